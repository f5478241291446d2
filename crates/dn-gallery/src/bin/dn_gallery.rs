use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use digitnorm::{
    DIGIT_SIDE, EdgeHistogram, Encoding, Grid, LabeledGrid, PipelineConfig, normalize,
    process_batch, remove_islands, scale_to_fit_vertically,
};
use image::GrayImage;
use image::imageops::{FilterType, resize};
use log::{info, warn};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "dn_gallery")]
#[command(about = "Run digitnorm stages on digit dataset files")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump every normalisation stage of one record as PNG plus meta.json.
    #[command(name = "stages")]
    Stages(StagesArgs),
    /// Normalise every record and write libsvm-style sparse vectors.
    #[command(name = "export")]
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
struct DatasetArgs {
    /// CSV with a header line, then one record per line.
    #[arg(long, required = true)]
    input: PathBuf,
    /// Records carry no leading label column.
    #[arg(long, default_value_t = false)]
    unlabeled: bool,
    /// JSON file with a `PipelineConfig`; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct StagesArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    #[arg(long, default_value_t = 0)]
    index: usize,
    #[arg(long, default_value = "out/stages")]
    out: PathBuf,
    /// Nearest-neighbor upscale factor for the PNGs.
    #[arg(long, default_value_t = 8)]
    zoom: u32,
}

#[derive(Args, Debug, Clone)]
struct ExportArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    #[arg(long, required = true)]
    out: PathBuf,
    /// Overrides the encoding from the config file.
    #[arg(long, value_enum)]
    encoding: Option<EncodingArg>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum EncodingArg {
    Raw,
    Edges,
}

impl From<EncodingArg> for Encoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Raw => Encoding::RawValues,
            EncodingArg::Edges => Encoding::EdgeHistogram,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct BoxDto {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

#[derive(Debug, Clone, Serialize)]
struct IslandsDto {
    components: usize,
    kept: usize,
    removed: usize,
}

#[derive(Debug, Clone, Serialize)]
struct MetaStages {
    index: usize,
    label: Option<u8>,
    config: PipelineConfig,
    foreground_after_threshold: usize,
    islands: Option<IslandsDto>,
    bounding_box: BoxDto,
    row_transitions: Vec<u32>,
    column_transitions: Vec<u32>,
    raw_nnz: usize,
    edge_nnz: usize,
    error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct MetaExport {
    records: usize,
    written: usize,
    skipped: usize,
    encoding: Encoding,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Stages(args) => run_stages(args),
        Command::Export(args) => run_export(args),
    }
}

fn run_stages(args: StagesArgs) -> Result<()> {
    let cfg = load_config(args.dataset.config.as_deref())?;
    let records = read_dataset(&args.dataset.input, !args.dataset.unlabeled)?;
    let Some(record) = records.get(args.index) else {
        bail!(
            "record index {} out of range, dataset has {} records.",
            args.index,
            records.len()
        );
    };

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output dir {}", args.out.display()))?;

    save_grid(args.out.join("raw.png"), &record.grid, args.zoom)?;

    let mut grid = record.grid.clone();
    grid.apply_threshold(cfg.threshold)
        .context("applying first threshold")?;
    save_grid(args.out.join("threshold.png"), &grid, args.zoom)?;
    let foreground_after_threshold = grid.foreground_count();

    let islands = if cfg.filter_islands {
        let summary = remove_islands(&mut grid).context("filtering islands")?;
        save_grid(args.out.join("islands.png"), &grid, args.zoom)?;
        Some(IslandsDto {
            components: summary.components,
            kept: summary.kept,
            removed: summary.removed,
        })
    } else {
        None
    };

    let located = EdgeHistogram::from_grid(&grid);
    let bbox = located.bounding_box().context("deriving bounding box")?;
    if bbox.has_area() {
        let mut fitted = scale_to_fit_vertically(&grid, &bbox).context("fitting box")?;
        fitted
            .apply_threshold(cfg.renormalize_threshold)
            .context("applying second threshold")?;
        save_grid(args.out.join("fitted.png"), &fitted, args.zoom)?;
    }

    let (raw_nnz, edge_nnz, error) = match normalize(record.grid.clone(), &cfg) {
        Ok(digit) => (
            digit.raw_features().nnz(),
            digit.edge_features().nnz(),
            None,
        ),
        Err(err) => (0, 0, Some(err.to_string())),
    };

    write_json(
        args.out.join("meta.json"),
        &MetaStages {
            index: args.index,
            label: record.label,
            config: cfg,
            foreground_after_threshold,
            islands,
            bounding_box: BoxDto {
                x1: bbox.x1(),
                y1: bbox.y1(),
                x2: bbox.x2(),
                y2: bbox.y2(),
            },
            row_transitions: located.rows().to_vec(),
            column_transitions: located.columns().to_vec(),
            raw_nnz,
            edge_nnz,
            error,
        },
    )?;

    info!("wrote stages for record {} to {}", args.index, args.out.display());
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let mut cfg = load_config(args.dataset.config.as_deref())?;
    if let Some(encoding) = args.encoding {
        cfg.encoding = encoding.into();
    }
    cfg.validate().context("validating pipeline config")?;

    let records = read_dataset(&args.dataset.input, !args.dataset.unlabeled)?;
    let processed = process_batch(&records, &cfg);

    let file = fs::File::create(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0usize;
    let mut skipped = 0usize;
    for (i, (record, result)) in records.iter().zip(&processed).enumerate() {
        match result {
            Ok(digit) => {
                let line = digit.features(cfg.encoding).to_libsvm_line(record.label.unwrap_or(0));
                writeln!(writer, "{line}").context("writing vector line")?;
                written += 1;
            }
            Err(err) => {
                warn!("record {i}: {err}");
                skipped += 1;
            }
        }
    }
    writer.flush().context("flushing vectors")?;

    let meta = MetaExport {
        records: records.len(),
        written,
        skipped,
        encoding: cfg.encoding,
    };
    write_json(args.out.with_extension("meta.json"), &meta)?;
    info!(
        "exported {written} of {} records to {} ({skipped} skipped)",
        records.len(),
        args.out.display()
    );
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    ensure_file_exists(path, "config")?;
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn read_dataset(path: &Path, labeled: bool) -> Result<Vec<LabeledGrid>> {
    ensure_file_exists(path, "dataset")?;
    let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    // First line is a header.
    for (lineno, line) in reader.lines().enumerate().skip(1) {
        let line = line.with_context(|| format!("reading line {}", lineno + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let values = line
            .split(',')
            .map(|v| v.trim().parse::<u16>())
            .collect::<Result<Vec<u16>, _>>()
            .with_context(|| format!("parsing line {}", lineno + 1))?;
        let record = LabeledGrid::from_row(DIGIT_SIDE, &values, labeled)
            .with_context(|| format!("line {} is not a {DIGIT_SIDE}x{DIGIT_SIDE} record", lineno + 1))?;
        records.push(record);
    }

    info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

fn save_grid(path: PathBuf, grid: &Grid, zoom: u32) -> Result<()> {
    let side = grid.side() as u32;
    let gray = GrayImage::from_raw(side, side, grid.to_visual())
        .context("constructing GrayImage from grid buffer")?;
    let zoom = zoom.max(1);
    let scaled = resize(&gray, side * zoom, side * zoom, FilterType::Nearest);
    scaled
        .save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

use dn_core::{BoundingBox, Error, Grid};
use dn_edge::EdgeHistogram;
use dn_features::{SparseVector, encode_edge_histogram, encode_raw_values};
use dn_morph::{ComponentSummary, remove_islands};
use dn_resample::scale_to_fit_vertically;
use log::debug;

use crate::config::{BlankPolicy, Encoding, PipelineConfig};

/// A normalised digit ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDigit {
    /// Binary grid after the final threshold.
    pub grid: Grid,
    /// Transition histogram of `grid`.
    pub histogram: EdgeHistogram,
    /// Region that was fit onto the output; `None` for blank pass-through.
    pub bounding_box: Option<BoundingBox>,
    /// Island filter outcome; `None` when filtering is disabled.
    pub islands: Option<ComponentSummary>,
}

impl ProcessedDigit {
    pub fn raw_features(&self) -> SparseVector {
        encode_raw_values(&self.grid)
    }

    pub fn edge_features(&self) -> SparseVector {
        encode_edge_histogram(&self.histogram)
    }

    pub fn features(&self, encoding: Encoding) -> SparseVector {
        match encoding {
            Encoding::RawValues => self.raw_features(),
            Encoding::EdgeHistogram => self.edge_features(),
        }
    }
}

/// Runs the full per-image normalisation on an owned raw grid.
pub fn normalize(mut grid: Grid, cfg: &PipelineConfig) -> Result<ProcessedDigit, Error> {
    cfg.validate()?;
    grid.apply_threshold(cfg.threshold)?;

    let islands = if cfg.filter_islands {
        Some(remove_islands(&mut grid)?)
    } else {
        None
    };

    let located = EdgeHistogram::from_grid(&grid);
    if located.is_blank() {
        return match cfg.blank_policy {
            BlankPolicy::Reject => Err(Error::EmptyActivity),
            BlankPolicy::PassThrough => {
                debug!("normalize: blank grid passed through");
                Ok(ProcessedDigit {
                    grid,
                    histogram: located,
                    bounding_box: None,
                    islands,
                })
            }
        };
    }

    let bbox = located.bounding_box()?;
    let mut fitted = scale_to_fit_vertically(&grid, &bbox)?;
    fitted.apply_threshold(cfg.renormalize_threshold)?;
    debug!(
        "normalize: box ({}, {}) -> ({}, {}), {} foreground px after fit",
        bbox.x1(),
        bbox.y1(),
        bbox.x2(),
        bbox.y2(),
        fitted.foreground_count()
    );

    let histogram = EdgeHistogram::from_grid(&fitted);
    Ok(ProcessedDigit {
        grid: fitted,
        histogram,
        bounding_box: Some(bbox),
        islands,
    })
}

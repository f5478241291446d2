use std::time::{Duration, Instant};

use dn_core::{Error, Label, LabeledGrid};
use dn_features::SparseVector;
use log::{info, warn};

use crate::batch::process_batch;
use crate::classify::{Model, Trainer};
use crate::config::PipelineConfig;

/// Row = true label, column = predicted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    classes: usize,
    counts: Vec<u32>,
}

impl ConfusionMatrix {
    pub fn new(classes: usize) -> Self {
        Self {
            classes,
            counts: vec![0; classes * classes],
        }
    }

    pub fn classes(&self) -> usize {
        self.classes
    }

    pub fn record(&mut self, truth: Label, predicted: Label) -> Result<(), Error> {
        let t = self.check(truth)?;
        let p = self.check(predicted)?;
        self.counts[t * self.classes + p] += 1;
        Ok(())
    }

    pub fn count(&self, truth: Label, predicted: Label) -> u32 {
        let (t, p) = (usize::from(truth), usize::from(predicted));
        if t >= self.classes || p >= self.classes {
            return 0;
        }
        self.counts[t * self.classes + p]
    }

    pub fn correct(&self) -> u32 {
        (0..self.classes)
            .map(|i| self.counts[i * self.classes + i])
            .sum()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Fraction of correct predictions; `0.0` before anything is recorded.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct()) / f64::from(total)
    }

    /// Predictions made for `truth`, most frequent first. Zero counts are
    /// omitted; equal counts put the higher label first.
    pub fn ranked_predictions(&self, truth: Label) -> Vec<(Label, u32)> {
        let t = usize::from(truth);
        if t >= self.classes {
            return Vec::new();
        }
        let row = &self.counts[t * self.classes..(t + 1) * self.classes];
        let mut ranked: Vec<(Label, u32)> = row
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(p, &c)| (p as Label, c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        ranked
    }

    fn check(&self, label: Label) -> Result<usize, Error> {
        let idx = usize::from(label);
        if idx >= self.classes {
            return Err(Error::InvalidLabel {
                label,
                classes: self.classes,
            });
        }
        Ok(idx)
    }
}

/// Train on the first `train` records, evaluate on the following `test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldoutSplit {
    pub train: usize,
    pub test: usize,
    pub classes: usize,
}

impl HoldoutSplit {
    pub fn new(train: usize, test: usize) -> Self {
        Self {
            train,
            test,
            classes: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub matrix: ConfusionMatrix,
    /// Training records dropped because normalisation failed.
    pub skipped_train: usize,
    /// Test records dropped because normalisation failed.
    pub skipped_test: usize,
    /// Test records dropped because the model predicted a label outside
    /// `0..classes`.
    pub rejected_predictions: usize,
    pub train_elapsed: Duration,
    pub test_elapsed: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError<E>
where
    E: std::error::Error + 'static,
{
    #[error("not enough images: need {required}, have {available}")]
    NotEnoughImages { required: usize, available: usize },
    #[error("record {index} has no label")]
    MissingLabel { index: usize },
    #[error("record {index} has label {label}, outside 0..{classes}")]
    LabelOutOfRange {
        index: usize,
        label: Label,
        classes: usize,
    },
    #[error("no training record survived normalisation")]
    NoTrainingData,
    #[error(transparent)]
    Pipeline(#[from] Error),
    #[error("classifier failed: {0}")]
    Classifier(#[source] E),
}

/// Normalises, trains and scores a holdout split.
///
/// Every record in the split must carry a label in `0..split.classes`; this
/// is checked before anything is normalised. Records whose normalisation
/// fails, and test records the model assigns an out-of-range label, are
/// skipped and counted rather than aborting the run.
pub fn evaluate_holdout<T: Trainer>(
    trainer: &T,
    records: &[LabeledGrid],
    split: HoldoutSplit,
    cfg: &PipelineConfig,
) -> Result<Evaluation, EvaluationError<T::Error>> {
    let required = split.train + split.test;
    if records.len() < required {
        return Err(EvaluationError::NotEnoughImages {
            required,
            available: records.len(),
        });
    }
    cfg.validate()?;

    let records = &records[..required];
    let truths = records
        .iter()
        .enumerate()
        .map(|(index, record)| match record.label {
            Some(label) if usize::from(label) < split.classes => Ok(label),
            Some(label) => Err(EvaluationError::LabelOutOfRange {
                index,
                label,
                classes: split.classes,
            }),
            None => Err(EvaluationError::MissingLabel { index }),
        })
        .collect::<Result<Vec<Label>, EvaluationError<T::Error>>>()?;

    let started = Instant::now();
    let processed = process_batch(records, cfg);
    info!(
        "normalised {} records in {:.3}s",
        records.len(),
        started.elapsed().as_secs_f64()
    );

    let mut vectors: Vec<SparseVector> = Vec::with_capacity(split.train);
    let mut labels: Vec<Label> = Vec::with_capacity(split.train);
    let mut skipped_train = 0usize;
    for (i, (&label, result)) in truths.iter().zip(&processed).take(split.train).enumerate() {
        match result {
            Ok(digit) => {
                vectors.push(digit.features(cfg.encoding));
                labels.push(label);
            }
            Err(err) => {
                warn!("skipping training record {i}: {err}");
                skipped_train += 1;
            }
        }
    }
    if vectors.is_empty() {
        return Err(EvaluationError::NoTrainingData);
    }

    let started = Instant::now();
    let model = trainer
        .train(&vectors, &labels)
        .map_err(EvaluationError::Classifier)?;
    let train_elapsed = started.elapsed();
    info!(
        "trained on {} vectors in {:.3}s",
        vectors.len(),
        train_elapsed.as_secs_f64()
    );

    let started = Instant::now();
    let mut matrix = ConfusionMatrix::new(split.classes);
    let mut skipped_test = 0usize;
    let mut rejected_predictions = 0usize;
    for (i, (&truth, result)) in truths
        .iter()
        .zip(&processed)
        .enumerate()
        .skip(split.train)
    {
        match result {
            Ok(digit) => {
                let predicted = model.predict(&digit.features(cfg.encoding));
                // Truth labels are range-checked above, so only the prediction can fail here.
                if let Err(err) = matrix.record(truth, predicted) {
                    warn!("discarding prediction for test record {i}: {err}");
                    rejected_predictions += 1;
                }
            }
            Err(err) => {
                warn!("skipping test record {i}: {err}");
                skipped_test += 1;
            }
        }
    }
    let test_elapsed = started.elapsed();
    info!(
        "got {} of {}, rate {:.4}, in {:.3}s",
        matrix.correct(),
        matrix.total(),
        matrix.accuracy(),
        test_elapsed.as_secs_f64()
    );

    Ok(Evaluation {
        matrix,
        skipped_train,
        skipped_test,
        rejected_predictions,
        train_elapsed,
        test_elapsed,
    })
}

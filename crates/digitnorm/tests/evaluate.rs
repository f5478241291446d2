mod common;

use common::synthetic::{add_specks, one_u8, zero_u8};
use digitnorm::{
    DIGIT_PIXELS, Encoding, EvaluationError, Grid, HoldoutSplit, Label, LabeledGrid, Model,
    PipelineConfig, SparseVector, Trainer, evaluate_holdout,
};

/// Dense nearest-centroid classifier over 1-based sparse indices.
struct CentroidTrainer {
    dims: usize,
}

struct CentroidModel {
    centroids: Vec<(Label, Vec<f64>)>,
}

#[derive(Debug, thiserror::Error)]
#[error("vectors and labels differ in length")]
struct LengthMismatch;

fn densify(v: &SparseVector, dims: usize) -> Vec<f64> {
    let mut out = vec![0.0; dims];
    for node in v.features() {
        out[(node.index - 1) as usize] = node.value;
    }
    out
}

impl Trainer for CentroidTrainer {
    type Model = CentroidModel;
    type Error = LengthMismatch;

    fn train(&self, vectors: &[SparseVector], labels: &[Label]) -> Result<CentroidModel, LengthMismatch> {
        if vectors.len() != labels.len() {
            return Err(LengthMismatch);
        }
        let mut sums: Vec<(Label, Vec<f64>, usize)> = Vec::new();
        for (v, &label) in vectors.iter().zip(labels) {
            let dense = densify(v, self.dims);
            match sums.iter_mut().find(|(l, _, _)| *l == label) {
                Some((_, sum, n)) => {
                    for (s, d) in sum.iter_mut().zip(&dense) {
                        *s += d;
                    }
                    *n += 1;
                }
                None => sums.push((label, dense, 1)),
            }
        }
        let centroids = sums
            .into_iter()
            .map(|(label, sum, n)| (label, sum.into_iter().map(|s| s / n as f64).collect()))
            .collect();
        Ok(CentroidModel { centroids })
    }
}

impl Model for CentroidModel {
    fn predict(&self, vector: &SparseVector) -> Label {
        let dense = densify(vector, self.centroids[0].1.len());
        let mut best = (self.centroids[0].0, f64::INFINITY);
        for (label, c) in &self.centroids {
            let d: f64 = c.iter().zip(&dense).map(|(a, b)| (a - b) * (a - b)).sum();
            if d < best.1 {
                best = (*label, d);
            }
        }
        best.0
    }
}

/// Trains instantly and always answers with a label past the digit range.
struct StrayTrainer;

struct StrayModel;

impl Trainer for StrayTrainer {
    type Model = StrayModel;
    type Error = LengthMismatch;

    fn train(&self, _vectors: &[SparseVector], _labels: &[Label]) -> Result<StrayModel, LengthMismatch> {
        Ok(StrayModel)
    }
}

impl Model for StrayModel {
    fn predict(&self, _vector: &SparseVector) -> Label {
        11
    }
}

fn dataset() -> Vec<LabeledGrid> {
    let mut out = Vec::new();
    for i in 0..12usize {
        let mut one = one_u8(3 + i, 2 + i % 4, 16 + i % 8);
        let mut zero = zero_u8(2 + i % 6, 3 + i % 5, 10 + i % 5, 16 + i % 5);
        if i % 3 == 0 {
            add_specks(&mut one, 7);
            add_specks(&mut zero, 7);
        }
        out.push(LabeledGrid::new(Some(1), one));
        out.push(LabeledGrid::new(Some(0), zero));
    }
    out
}

#[test]
fn normalised_strokes_separate_cleanly() {
    let _ = env_logger::builder().is_test(true).try_init();

    let records = dataset();
    let trainer = CentroidTrainer { dims: DIGIT_PIXELS };
    let eval = evaluate_holdout(
        &trainer,
        &records,
        HoldoutSplit::new(16, 8),
        &PipelineConfig::default(),
    )
    .expect("evaluation runs");

    assert_eq!(eval.skipped_train, 0);
    assert_eq!(eval.skipped_test, 0);
    assert_eq!(eval.rejected_predictions, 0);
    assert_eq!(eval.matrix.total(), 8);
    assert_eq!(eval.matrix.correct(), 8);
    assert_eq!(eval.matrix.ranked_predictions(1), vec![(1, 4)]);
}

#[test]
fn edge_encoding_feeds_the_same_contract() {
    let records = dataset();
    let trainer = CentroidTrainer { dims: 2 * 28 };
    let cfg = PipelineConfig {
        encoding: Encoding::EdgeHistogram,
        ..Default::default()
    };
    let eval = evaluate_holdout(&trainer, &records, HoldoutSplit::new(16, 8), &cfg)
        .expect("evaluation runs");
    assert_eq!(eval.matrix.total(), 8);
}

#[test]
fn blank_test_records_are_skipped_not_fatal() {
    let mut records = dataset();
    records[20] = LabeledGrid::new(Some(0), Grid::blank(28));

    let trainer = CentroidTrainer { dims: DIGIT_PIXELS };
    let eval = evaluate_holdout(
        &trainer,
        &records,
        HoldoutSplit::new(16, 8),
        &PipelineConfig::default(),
    )
    .expect("evaluation runs");

    assert_eq!(eval.skipped_test, 1);
    assert_eq!(eval.matrix.total(), 7);
}

#[test]
fn zero_threshold_config_fails_before_training() {
    let records = dataset();
    let cfg = PipelineConfig {
        threshold: 0,
        ..Default::default()
    };
    let err = evaluate_holdout(
        &CentroidTrainer { dims: DIGIT_PIXELS },
        &records,
        HoldoutSplit::new(4, 4),
        &cfg,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EvaluationError::Pipeline(digitnorm::Error::ZeroThreshold)
    ));
}

#[test]
fn out_of_range_predictions_are_discarded_not_fatal() {
    let _ = env_logger::builder().is_test(true).try_init();

    let records = dataset();
    let eval = evaluate_holdout(
        &StrayTrainer,
        &records,
        HoldoutSplit::new(2, 2),
        &PipelineConfig::default(),
    )
    .expect("evaluation runs");

    assert_eq!(eval.skipped_test, 0);
    assert_eq!(eval.rejected_predictions, 2);
    assert_eq!(eval.matrix.total(), 0);
    assert_eq!(eval.matrix.accuracy(), 0.0);
}

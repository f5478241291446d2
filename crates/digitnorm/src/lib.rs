//! Umbrella crate for the `digitnorm` workspace.
//!
//! Re-exports the per-stage crates and adds the per-image pipeline:
//!
//! raw grid -> threshold -> largest-component filter -> edge histogram ->
//! bounding box -> bilinear fit -> threshold -> sparse features
//!
//! Images are processed independently; [`process_batch`] fans out over
//! `rayon` when the `parallel` feature is enabled and always returns results
//! in input order. Training and prediction stay outside this crate behind the
//! [`Trainer`] and [`Model`] traits.

mod batch;
mod classify;
mod config;
mod evaluate;
mod pipeline;

pub use dn_core::*;
pub use dn_edge::*;
pub use dn_features::*;
pub use dn_morph::*;
pub use dn_resample::*;

pub use batch::process_batch;
pub use classify::{Model, Trainer};
pub use config::{BlankPolicy, Encoding, PipelineConfig};
pub use evaluate::{ConfusionMatrix, Evaluation, EvaluationError, HoldoutSplit, evaluate_holdout};
pub use pipeline::{ProcessedDigit, normalize};

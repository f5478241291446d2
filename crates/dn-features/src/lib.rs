//! Sparse feature vectors exchanged with an external classifier.
//!
//! Wire contract:
//! - `(index, value)` pairs with 1-based, strictly increasing indices;
//! - zero-valued features are omitted;
//! - the sequence ends with the sentinel `(-1, 0.0)`.
//!
//! Two interchangeable encodings are provided:
//! - [`encode_raw_values`]: one feature per nonzero pixel, index
//!   `pixel + 1`.
//! - [`encode_edge_histogram`]: row transition counts at `row + 1`, then
//!   column transition counts at `side + column + 1`.

mod encode;
mod vector;

pub use encode::{encode_edge_histogram, encode_raw_values};
pub use vector::{FeatureNode, SENTINEL, SparseVector};

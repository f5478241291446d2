//! Connected-component cleanup for binary grids.
//!
//! Pixels are treated as binary and must hold exactly `{0, 1}`; callers
//! threshold first. Connectivity is 4-neighborhood (axis-aligned only).
//!
//! [`remove_islands`] keeps the single largest foreground component and zeroes
//! every other foreground pixel. When several components share the maximum
//! size, the one whose [`DisjointSet`] representative has the lowest pixel
//! index survives.

mod disjoint_set;
mod islands;

pub use disjoint_set::DisjointSet;
pub use islands::{ComponentSummary, component_sizes, remove_islands};

//! Foundational primitives for digit-bitmap normalisation.
//!
//! ## Grids
//! A [`Grid`] is an owned, square, row-major buffer of `u8` intensities. The
//! reference domain uses [`DIGIT_SIDE`]` x `[`DIGIT_SIDE`] samples. Pixel
//! `(x, y)` lives at linear index `y * side + x`; every crate in the workspace
//! shares that convention.
//!
//! Raw intensities range over `0..=255`. After [`Grid::apply_threshold`] a
//! grid holds exactly `{0, 1}`, which [`Grid::assert_discrete`] checks
//! explicitly for stages that need binary input.
//!
//! ## Sampling Coordinates
//! Bilinear sampling uses the floor-based 2x2 neighborhood. Reads that fall
//! outside the grid contribute zero.

mod error;
mod geom;
mod grid;
mod record;
mod sample;

pub use error::Error;
pub use geom::BoundingBox;
pub use grid::{DIGIT_PIXELS, DIGIT_SIDE, Grid};
pub use record::{Label, LabeledGrid};
pub use sample::{lerp, sample_bilinear_zero};

//! Transition histograms for localizing digit activity.
//!
//! For every interior pixel `(x, y)` with `x >= 1` and `y >= 1`:
//! - `rows[y]` counts pixels that differ from their left neighbor;
//! - `columns[x]` counts pixels that differ from the neighbor above.
//!
//! Row `0` and column `0` therefore never receive counts. The activity
//! bounds are half-open: `first_row` is the lowest row with a nonzero count and
//! `last_row` is one past the highest. A grid without any transition reports
//! all four bounds as `0`.

mod histogram;

pub use histogram::EdgeHistogram;

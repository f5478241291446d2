//! Bilinear rescaling of a bounded region onto a full grid.
//!
//! Fit policy:
//! - One uniform scale, `box.height() / side`, maps the box height onto the
//!   full output height.
//! - The horizontal extent follows from the same factor, so aspect ratio is
//!   preserved and the box width is not fit independently.
//!
//! Sampling:
//! - Destination `(x, y)` reads the source at `(x1 + x * scale, y1 + y * scale)`.
//! - Source reads outside the grid contribute zero.
//! - Interpolated values are truncated to `u8`.

mod scale;

pub use scale::{scale_to_fit_vertically, scale_to_fit_vertically_into};

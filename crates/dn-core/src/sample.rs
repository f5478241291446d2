use crate::grid::Grid;

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Bilinear sample at `(x, y)` with zero padding outside the grid.
pub fn sample_bilinear_zero(grid: &Grid, x: f32, y: f32) -> f32 {
    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let p00 = f32::from(grid.get_or_zero(x0, y0));
    let p10 = f32::from(grid.get_or_zero(x1, y0));
    let p01 = f32::from(grid.get_or_zero(x0, y1));
    let p11 = f32::from(grid.get_or_zero(x1, y1));

    lerp(lerp(p00, p10, dx), lerp(p01, p11, dx), dy)
}

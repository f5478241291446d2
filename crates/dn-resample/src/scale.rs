use dn_core::{BoundingBox, Error, Grid, sample_bilinear_zero};

/// Resamples `bbox` of `src` onto a new grid of the same side.
///
/// Fails with [`Error::InvalidScale`] when the box has zero width or height.
pub fn scale_to_fit_vertically(src: &Grid, bbox: &BoundingBox) -> Result<Grid, Error> {
    let mut dst = Grid::blank(src.side());
    scale_to_fit_vertically_into(src, bbox, &mut dst)?;
    Ok(dst)
}

/// Same as [`scale_to_fit_vertically`], writing into a caller-owned grid.
pub fn scale_to_fit_vertically_into(
    src: &Grid,
    bbox: &BoundingBox,
    dst: &mut Grid,
) -> Result<(), Error> {
    if !bbox.has_area() {
        return Err(Error::InvalidScale {
            x1: bbox.x1(),
            y1: bbox.y1(),
            x2: bbox.x2(),
            y2: bbox.y2(),
        });
    }
    if dst.side() != src.side() {
        return Err(Error::SizeMismatch {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    let side = src.side();
    let scale = bbox.height() as f32 / side as f32;
    let x1 = bbox.x1() as f32;
    let y1 = bbox.y1() as f32;

    let out = dst.data_mut();
    for y in 0..side {
        let gy = y1 + y as f32 * scale;
        let row = &mut out[y * side..(y + 1) * side];
        for (x, px) in row.iter_mut().enumerate() {
            let gx = x1 + x as f32 * scale;
            *px = sample_bilinear_zero(src, gx, gy) as u8;
        }
    }

    Ok(())
}

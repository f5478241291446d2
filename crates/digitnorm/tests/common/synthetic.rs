use digitnorm::{DIGIT_SIDE, Grid};

/// Filled square with the given top-left corner and intensity.
pub fn square_u8(x0: usize, y0: usize, size: usize, value: u8) -> Grid {
    let mut grid = Grid::blank(DIGIT_SIDE);
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            *grid.get_mut(x, y).expect("square inside grid") = value;
        }
    }
    grid
}

/// Vertical stroke, a crude "1".
pub fn one_u8(x0: usize, y0: usize, height: usize) -> Grid {
    let mut grid = Grid::blank(DIGIT_SIDE);
    for y in y0..y0 + height {
        for x in x0..x0 + 3 {
            *grid.get_mut(x, y).expect("stroke inside grid") = 220;
        }
    }
    grid
}

/// Hollow rectangle, a crude "0".
pub fn zero_u8(x0: usize, y0: usize, width: usize, height: usize) -> Grid {
    let mut grid = Grid::blank(DIGIT_SIDE);
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            let border = y < y0 + 2 || y >= y0 + height - 2 || x < x0 + 2 || x >= x0 + width - 2;
            if border {
                *grid.get_mut(x, y).expect("ring inside grid") = 200;
            }
        }
    }
    grid
}

/// Sprinkles isolated single-pixel specks on a regular lattice, skipping
/// pixels that already carry ink or touch it.
pub fn add_specks(grid: &mut Grid, step: usize) {
    let side = grid.side();
    let source = grid.clone();
    for y in (1..side - 1).step_by(step) {
        for x in (1..side - 1).step_by(step) {
            let touches = [(0isize, 0isize), (-1, 0), (1, 0), (0, -1), (0, 1)]
                .iter()
                .any(|&(dx, dy)| source.get_or_zero(x as isize + dx, y as isize + dy) != 0);
            if !touches {
                *grid.get_mut(x, y).expect("in bounds") = 255;
            }
        }
    }
}

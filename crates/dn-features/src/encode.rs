use dn_core::Grid;
use dn_edge::EdgeHistogram;

use crate::vector::SparseVector;

/// One feature per nonzero pixel at index `pixel + 1`.
pub fn encode_raw_values(grid: &Grid) -> SparseVector {
    SparseVector::from_ascending(
        grid.data()
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as i32 + 1, f64::from(v))),
    )
}

/// Row counts at `row + 1`, then column counts at `side + column + 1`.
pub fn encode_edge_histogram(hist: &EdgeHistogram) -> SparseVector {
    let side = hist.side() as i32;
    let rows = hist
        .rows()
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as i32 + 1, f64::from(c)));
    let columns = hist
        .columns()
        .iter()
        .enumerate()
        .map(move |(j, &c)| (side + j as i32 + 1, f64::from(c)));

    SparseVector::from_ascending(rows.chain(columns))
}

#[cfg(test)]
mod tests {
    use dn_core::Grid;
    use dn_edge::EdgeHistogram;

    use crate::{SENTINEL, encode_edge_histogram, encode_raw_values};

    #[test]
    fn raw_values_use_one_based_pixel_index() {
        let grid = Grid::from_vec(
            3,
            vec![
                0u8, 1, 0, //
                0, 0, 0, //
                1, 0, 1, //
            ],
        )
        .expect("valid grid");

        let v = encode_raw_values(&grid);
        let idx: Vec<i32> = v.features().iter().map(|n| n.index).collect();
        assert_eq!(idx, vec![2, 7, 9]);
        assert!(v.features().iter().all(|n| n.value == 1.0));
        assert_eq!(v.nodes().last(), Some(&SENTINEL));
    }

    #[test]
    fn raw_values_keep_intensity() {
        let grid = Grid::from_vec(2, vec![0u8, 200, 0, 3]).expect("valid grid");
        let v = encode_raw_values(&grid);
        assert_eq!(v.to_libsvm_line(1), "1 2:200 4:3");
    }

    #[test]
    fn edge_histogram_rows_then_offset_columns() {
        let mut grid = Grid::blank(6);
        for y in 2..4 {
            for x in 1..3 {
                *grid.get_mut(x, y).expect("in bounds") = 1;
            }
        }
        let hist = EdgeHistogram::from_grid(&grid);
        let v = encode_edge_histogram(&hist);

        // rows 2,3 -> indices 3,4; columns 1,2 -> indices 6+1+1, 6+2+1.
        let pairs: Vec<(i32, f64)> = v.features().iter().map(|n| (n.index, n.value)).collect();
        assert_eq!(pairs, vec![(3, 2.0), (4, 2.0), (8, 2.0), (9, 2.0)]);
        assert!(v.is_well_formed());
    }

    #[test]
    fn column_feature_carries_column_count() {
        // A single pixel at (2, 1): row 1 sees two horizontal changes, while
        // column 2 sees two vertical changes and no other column sees any.
        let mut grid = Grid::blank(4);
        *grid.get_mut(2, 1).expect("in bounds") = 1;
        let hist = EdgeHistogram::from_grid(&grid);
        assert_eq!(hist.rows(), &[0, 2, 0, 0]);
        assert_eq!(hist.columns(), &[0, 0, 2, 0]);

        let v = encode_edge_histogram(&hist);
        let pairs: Vec<(i32, f64)> = v.features().iter().map(|n| (n.index, n.value)).collect();
        assert_eq!(pairs, vec![(2, 2.0), (7, 2.0)]);
    }

    #[test]
    fn blank_grid_encodes_to_sentinel_only() {
        let grid = Grid::blank(28);
        assert_eq!(encode_raw_values(&grid).nodes(), &[SENTINEL]);
        let hist = EdgeHistogram::from_grid(&grid);
        assert_eq!(encode_edge_histogram(&hist).nodes(), &[SENTINEL]);
    }
}

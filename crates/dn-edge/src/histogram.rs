use dn_core::{BoundingBox, Error, Grid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeHistogram {
    rows: Vec<u32>,
    columns: Vec<u32>,
    first_row: usize,
    last_row: usize,
    first_column: usize,
    last_column: usize,
}

impl EdgeHistogram {
    pub fn from_grid(grid: &Grid) -> Self {
        let side = grid.side();
        let data = grid.data();
        let mut rows = vec![0u32; side];
        let mut columns = vec![0u32; side];

        for y in 1..side {
            let cur = &data[y * side..(y + 1) * side];
            let above = &data[(y - 1) * side..y * side];
            for x in 1..side {
                if cur[x] != cur[x - 1] {
                    rows[y] += 1;
                }
                if cur[x] != above[x] {
                    columns[x] += 1;
                }
            }
        }

        let (first_row, last_row) = active_span(&rows);
        let (first_column, last_column) = active_span(&columns);

        Self {
            rows,
            columns,
            first_row,
            last_row,
            first_column,
            last_column,
        }
    }

    pub fn side(&self) -> usize {
        self.rows.len()
    }

    /// Horizontal transition count per row.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Vertical transition count per column.
    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn last_row(&self) -> usize {
        self.last_row
    }

    pub fn first_column(&self) -> usize {
        self.first_column
    }

    pub fn last_column(&self) -> usize {
        self.last_column
    }

    pub fn row_span(&self) -> usize {
        self.last_row - self.first_row
    }

    pub fn column_span(&self) -> usize {
        self.last_column - self.first_column
    }

    /// `true` when no row and no column saw a transition.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&c| c == 0) && self.columns.iter().all(|&c| c == 0)
    }

    /// Tight box `(first_column, first_row) -> (last_column, last_row)`.
    ///
    /// A blank grid yields the zero-area box at the origin.
    pub fn bounding_box(&self) -> Result<BoundingBox, Error> {
        BoundingBox::new(
            self.first_column,
            self.first_row,
            self.last_column,
            self.last_row,
        )
    }
}

fn active_span(counts: &[u32]) -> (usize, usize) {
    let first = counts.iter().position(|&c| c > 0);
    let last = counts.iter().rposition(|&c| c > 0);
    match (first, last) {
        (Some(first), Some(last)) => (first, last + 1),
        _ => (0, 0),
    }
}

use crate::Error;
use crate::grid::Grid;

/// Class index assigned to a digit.
pub type Label = u8;

/// One dataset record: an optional label and its pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGrid {
    pub label: Option<Label>,
    pub grid: Grid,
}

impl LabeledGrid {
    pub fn new(label: Option<Label>, grid: Grid) -> Self {
        Self { label, grid }
    }

    /// Builds a record from one parsed dataset row.
    ///
    /// Labeled rows carry the label first followed by `side * side`
    /// intensities; unlabeled rows carry only the intensities. Intensities
    /// above 255 are clamped, labels above 255 are rejected.
    pub fn from_row(side: usize, row: &[u16], labeled: bool) -> Result<Self, Error> {
        let pixels = side * side;
        let expected = pixels + usize::from(labeled);
        if row.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: row.len(),
            });
        }

        let (label, values) = if labeled {
            let label =
                Label::try_from(row[0]).map_err(|_| Error::LabelOverflow { value: row[0] })?;
            (Some(label), &row[1..])
        } else {
            (None, row)
        };

        let data = values.iter().map(|&v| v.min(255) as u8).collect();
        Ok(Self {
            label,
            grid: Grid::from_vec(side, data)?,
        })
    }
}

impl AsRef<Grid> for LabeledGrid {
    fn as_ref(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::LabeledGrid;
    use crate::Error;

    #[test]
    fn labeled_row_splits_label_from_pixels() {
        let rec = LabeledGrid::from_row(2, &[7, 0, 255, 300, 12], true).expect("valid row");
        assert_eq!(rec.label, Some(7));
        assert_eq!(rec.grid.data(), &[0, 255, 255, 12]);
    }

    #[test]
    fn unlabeled_row_is_all_pixels() {
        let rec = LabeledGrid::from_row(2, &[1, 2, 3, 4], false).expect("valid row");
        assert_eq!(rec.label, None);
        assert_eq!(rec.grid.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn oversized_label_is_rejected_not_wrapped() {
        assert_eq!(
            LabeledGrid::from_row(1, &[266, 5], true),
            Err(Error::LabelOverflow { value: 266 })
        );
        let rec = LabeledGrid::from_row(1, &[255, 5], true).expect("label fits");
        assert_eq!(rec.label, Some(255));
    }

    #[test]
    fn short_row_is_a_size_mismatch() {
        assert_eq!(
            LabeledGrid::from_row(2, &[1, 2, 3, 4], true),
            Err(Error::SizeMismatch {
                expected: 5,
                actual: 4
            })
        );
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// Vertical pixel bounds of one sprite sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBounds {
    /// First pixel row of the icons (inclusive)
    pub top: u32,
    /// Last pixel row of the icons (exclusive)
    pub bottom: u32,
}

impl RowBounds {
    pub fn new(top: u32, bottom: u32) -> Self {
        Self { top, bottom }
    }
}

/// Sprite sheet layout: column model, measured row bounds and the icon name grid.
///
/// `names[row][col]` is the icon stored in that cell, or `None` when the cell
/// is empty. Rows of `names` past the end of `rows` are not processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Layout file version (currently 1)
    pub version: u32,
    /// Width of one grid column in pixels
    pub cell_width: u32,
    /// Pixels trimmed from the left edge of every cell
    pub padding_left: u32,
    /// Pixels trimmed from the right edge of every cell
    pub padding_right: u32,
    /// Measured (top, bottom) bounds, one entry per row
    pub rows: Vec<RowBounds>,
    /// Icon names by row and column
    pub names: Vec<Vec<Option<String>>>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            version: 1,
            cell_width: 128,
            padding_left: 8,
            padding_right: 8,
            rows: Vec::new(),
            names: Vec::new(),
        }
    }
}

impl SheetLayout {
    /// Build a layout for a sheet tiled uniformly with `icon_width` x `icon_height`
    /// cells, trimming `padding` pixels from every side of each cell.
    ///
    /// One row of bounds is generated per row of `names`.
    pub fn uniform(
        icon_width: u32,
        icon_height: u32,
        padding: u32,
        names: Vec<Vec<Option<String>>>,
    ) -> Result<Self, SplitError> {
        let rows = (0u32..)
            .zip(&names)
            .map(|(row, _)| {
                let top = row
                    .checked_mul(icon_height)
                    .and_then(|y| y.checked_add(padding));
                let bottom = row
                    .checked_add(1)
                    .and_then(|r| r.checked_mul(icon_height))
                    .map(|y| y.saturating_sub(padding));
                match (top, bottom) {
                    (Some(top), Some(bottom)) => Ok(RowBounds::new(top, bottom)),
                    _ => Err(SplitError::InvalidLayout(format!(
                        "row {} of {}px icons does not fit in u32 pixel coordinates",
                        row, icon_height
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cell_width: icon_width,
            padding_left: padding,
            padding_right: padding,
            rows,
            names,
            ..Self::default()
        })
    }

    /// Iterate over all named cells as `(row, col, name)`, including rows
    /// without geometry.
    pub fn named_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.names.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter_map(move |(col, name)| name.as_deref().map(|n| (row, col, n)))
        })
    }

    /// Named cells in rows that have geometry, i.e. the cells a split writes.
    pub fn processed_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.named_cells()
            .filter(|(row, _, _)| *row < self.rows.len())
    }

    /// Number of icons a successful split writes.
    pub fn expected_count(&self) -> usize {
        self.processed_cells().count()
    }

    /// Widest row of the name grid.
    pub fn columns(&self) -> usize {
        self.names.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check that every processed cell can yield a non-empty crop and a
    /// distinct, plain file name.
    ///
    /// Rows without geometry are never cut, so their names are not checked.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.cell_width == 0 {
            return Err(SplitError::InvalidLayout(
                "cell_width must be greater than zero".to_string(),
            ));
        }

        if u64::from(self.padding_left) + u64::from(self.padding_right)
            >= u64::from(self.cell_width)
        {
            return Err(SplitError::InvalidLayout(format!(
                "padding ({} + {}) leaves no pixels in a {}px cell",
                self.padding_left, self.padding_right, self.cell_width
            )));
        }

        // Rightmost pixel column any processed cell reaches
        let processed_columns = self
            .names
            .iter()
            .take(self.rows.len())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let fits = u32::try_from(processed_columns)
            .ok()
            .and_then(|cols| cols.checked_mul(self.cell_width))
            .is_some();
        if !fits {
            return Err(SplitError::InvalidLayout(format!(
                "{} columns of {}px do not fit in u32 pixel coordinates",
                processed_columns, self.cell_width
            )));
        }

        for (index, bounds) in self.rows.iter().enumerate() {
            if bounds.bottom <= bounds.top {
                return Err(SplitError::InvalidLayout(format!(
                    "row {} has bottom {} <= top {}",
                    index, bounds.bottom, bounds.top
                )));
            }
        }

        let mut seen = HashSet::new();
        for (row, col, name) in self.processed_cells() {
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(SplitError::InvalidLayout(format!(
                    "cell ({}, {}) has unusable icon name '{}'",
                    row, col, name
                )));
            }
            if !seen.insert(name) {
                return Err(SplitError::InvalidLayout(format!(
                    "icon name '{}' is used more than once",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[&[Option<&str>]]) -> Vec<Vec<Option<String>>> {
        rows.iter()
            .map(|row| row.iter().map(|n| n.map(str::to_string)).collect())
            .collect()
    }

    #[test]
    fn test_expected_count_skips_nulls_and_rows_without_geometry() {
        let layout = SheetLayout {
            rows: vec![RowBounds::new(0, 10), RowBounds::new(10, 20)],
            names: names(&[
                &[Some("a"), None, Some("b")],
                &[None, Some("c")],
                &[Some("d"), Some("e")],
            ]),
            ..SheetLayout::default()
        };

        assert_eq!(layout.named_cells().count(), 5);
        assert_eq!(layout.expected_count(), 3);
        assert_eq!(layout.columns(), 3);
    }

    #[test]
    fn test_uniform_rows() {
        let layout =
            SheetLayout::uniform(100, 100, 4, names(&[&[Some("a")], &[Some("b")]])).unwrap();

        assert_eq!(layout.cell_width, 100);
        assert_eq!(layout.padding_left, 4);
        assert_eq!(layout.padding_right, 4);
        assert_eq!(
            layout.rows,
            vec![RowBounds::new(4, 96), RowBounds::new(104, 196)]
        );
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_padding_wider_than_cell() {
        let layout = SheetLayout {
            cell_width: 16,
            padding_left: 8,
            padding_right: 8,
            ..SheetLayout::default()
        };

        assert!(matches!(
            layout.validate(),
            Err(SplitError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_row() {
        let layout = SheetLayout {
            rows: vec![RowBounds::new(100, 50)],
            ..SheetLayout::default()
        };

        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let layout = SheetLayout {
            rows: vec![RowBounds::new(0, 10)],
            names: names(&[&[Some("clock"), Some("clock")]]),
            ..SheetLayout::default()
        };

        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("clock"));
    }

    #[test]
    fn test_validate_rejects_path_like_names() {
        let layout = SheetLayout {
            rows: vec![RowBounds::new(0, 10)],
            names: names(&[&[Some("../escape")]]),
            ..SheetLayout::default()
        };

        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_uniform_rejects_rows_past_u32() {
        let result = SheetLayout::uniform(
            10,
            2_147_483_648,
            0,
            names(&[&[Some("a")], &[Some("b")], &[Some("c")]]),
        );

        assert!(matches!(result, Err(SplitError::InvalidLayout(_))));
    }

    #[test]
    fn test_validate_rejects_columns_past_u32() {
        let layout = SheetLayout {
            cell_width: 2_147_483_648,
            rows: vec![RowBounds::new(0, 10)],
            names: names(&[&[None, None, Some("c")]]),
            ..SheetLayout::default()
        };

        assert!(matches!(
            layout.validate(),
            Err(SplitError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_validate_ignores_rows_without_geometry() {
        let layout = SheetLayout {
            rows: vec![RowBounds::new(0, 10)],
            names: names(&[
                &[Some("clock")],
                &[Some("clock"), Some("../escape")],
                &[None, None, None, None, None, None, None, None, Some("wide")],
            ]),
            cell_width: 500_000_000,
            padding_left: 0,
            padding_right: 0,
            ..SheetLayout::default()
        };

        assert!(layout.validate().is_ok());
        assert_eq!(layout.expected_count(), 1);
    }
}

use anyhow::Result;
use log::debug;

use super::CropRect;
use crate::config::{RowBounds, SheetLayout};
use crate::error::SplitError;

/// One icon to cut out of the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropJob {
    pub name: String,
    pub row: usize,
    pub col: u32,
    pub rect: CropRect,
}

/// Result of planning every crop for a sheet
#[derive(Debug, Clone, Default)]
pub struct CropPlan {
    pub jobs: Vec<CropJob>,
    /// Rows of the name grid that have no geometry entry
    pub skipped_rows: usize,
}

/// Crop rectangle of column `col` within a row.
///
/// Columns are `cell_width` wide and lose `padding_left`/`padding_right`
/// pixels on each side; the row supplies `top` and `bottom` directly.
/// Coordinates saturate at `u32::MAX`; `SheetLayout::validate` rejects layouts
/// that would reach it.
pub fn cell_rect(layout: &SheetLayout, col: u32, bounds: RowBounds) -> CropRect {
    let left = col
        .saturating_mul(layout.cell_width)
        .saturating_add(layout.padding_left);
    let right = col
        .saturating_add(1)
        .saturating_mul(layout.cell_width)
        .saturating_sub(layout.padding_right);
    CropRect::new(left, bounds.top, right, bounds.bottom)
}

/// Compute the crop of every named cell of `layout` on a `width` x `height` sheet.
///
/// Empty cells and rows without geometry are skipped. Any crop that does not
/// fit inside the sheet fails the whole plan, so nothing is written for a
/// layout that does not match the image.
pub fn plan_crops(layout: &SheetLayout, width: u32, height: u32) -> Result<CropPlan> {
    layout.validate()?;

    let mut plan = CropPlan::default();

    for (row, names) in layout.names.iter().enumerate() {
        let Some(&bounds) = layout.rows.get(row) else {
            debug!("Row {} has no geometry, skipping", row);
            plan.skipped_rows += 1;
            continue;
        };

        for (col, name) in (0u32..).zip(names) {
            let Some(name) = name else {
                continue;
            };

            let rect = cell_rect(layout, col, bounds);
            if !rect.fits_within(width, height) {
                return Err(SplitError::CropOutOfBounds {
                    name: name.clone(),
                    rect,
                    width,
                    height,
                }
                .into());
            }

            plan.jobs.push(CropJob {
                name: name.clone(),
                row,
                col,
                rect,
            });
        }
    }

    Ok(plan)
}

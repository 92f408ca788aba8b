use std::path::Path;

use anyhow::Result;
use image::{RgbaImage, imageops};
use log::info;

use crate::config::SheetLayout;
use crate::geometry::plan_crops;
use crate::output::{DirectorySink, IconSink};
use crate::sprite::load_sheet;

/// Outcome of a completed split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Icon names in the order they were written
    pub saved: Vec<String>,
    /// Rows of the name grid skipped for lack of geometry
    pub skipped_rows: usize,
    pub sheet_width: u32,
    pub sheet_height: u32,
}

impl SplitReport {
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

/// Cut every named cell of `layout` out of `sheet` and hand it to `sink`.
///
/// All crops are planned and bounds-checked before the sink is prepared; the
/// first write error aborts the run and leaves earlier icons in place.
pub fn split_sheet(
    sheet: &RgbaImage,
    layout: &SheetLayout,
    sink: &mut impl IconSink,
) -> Result<SplitReport> {
    let (sheet_width, sheet_height) = sheet.dimensions();
    let plan = plan_crops(layout, sheet_width, sheet_height)?;
    info!(
        "Cutting {} icons from a {} columns x {} rows grid",
        plan.jobs.len(),
        layout.columns(),
        layout.rows.len()
    );

    sink.prepare()?;

    let mut saved = Vec::with_capacity(plan.jobs.len());
    for job in &plan.jobs {
        let rect = job.rect;
        let icon =
            imageops::crop_imm(sheet, rect.left, rect.top, rect.width(), rect.height()).to_image();
        sink.write_icon(&job.name, &icon)?;
        info!("Saved: {}.png", job.name);
        saved.push(job.name.clone());
    }

    Ok(SplitReport {
        saved,
        skipped_rows: plan.skipped_rows,
        sheet_width,
        sheet_height,
    })
}

/// Decode `input` and write its icons into `output_dir` as PNG files.
pub fn split_file(input: &Path, output_dir: &Path, layout: &SheetLayout) -> Result<SplitReport> {
    let sheet = load_sheet(input)?;
    let mut sink = DirectorySink::new(output_dir);
    split_sheet(&sheet, layout, &mut sink)
}

use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};
use log::info;

use crate::error::SplitError;

/// Decode the sprite sheet at `path` into RGBA8.
///
/// A missing file and undecodable data both surface as `SplitError::ImageLoad`.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    let sheet = ImageReader::open(path)
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    let (width, height) = sheet.dimensions();
    info!("Sprite sheet size: {}x{}", width, height);

    Ok(sheet)
}

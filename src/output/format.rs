use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, RgbaImage};

use crate::error::SplitError;

/// Encode an icon as lossless RGBA PNG. `path` is only used for error reporting.
pub fn encode_png(icon: &RgbaImage, path: &Path) -> Result<Vec<u8>> {
    let mut png_data = Cursor::new(Vec::new());
    icon.write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| SplitError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(png_data.into_inner())
}

/// Save an icon as PNG at `path`
pub fn save_icon_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let png_data = encode_png(icon, path)?;

    fs::write(path, png_data).map_err(|e| SplitError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

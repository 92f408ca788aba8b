use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::CropRect;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode icon '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove stale icon '{path}': {source}")]
    RemoveStale {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid sheet layout: {0}")]
    InvalidLayout(String),

    #[error("Icon '{name}' crop {rect} lies outside the {width}x{height} sprite sheet")]
    CropOutOfBounds {
        name: String,
        rect: CropRect,
        width: u32,
        height: u32,
    },
}

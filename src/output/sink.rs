use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use log::debug;

use super::save_icon_png;
use crate::error::SplitError;

/// Destination for cropped icons.
///
/// `prepare` runs once before the first `write_icon`.
pub trait IconSink {
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_icon(&mut self, name: &str, icon: &RgbaImage) -> Result<()>;
}

/// Writes every icon as `<dir>/<name>.png`.
///
/// Preparing the sink creates the directory and removes any `.png` left by an
/// earlier run, so the directory only ever holds the icons of the latest split.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn icon_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }

    fn remove_stale_icons(&self) -> Result<usize> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read directory: {}", self.dir.display()))?;

        let mut removed = 0;
        for entry in entries {
            let path = entry
                .with_context(|| format!("failed to read entry in {}", self.dir.display()))?
                .path();
            if !path.is_file() || !is_png(&path) {
                continue;
            }
            fs::remove_file(&path).map_err(|e| SplitError::RemoveStale {
                path: path.clone(),
                source: e,
            })?;
            debug!("Removed stale {}", path.display());
            removed += 1;
        }

        Ok(removed)
    }
}

fn is_png(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("png"))
}

impl IconSink for DirectorySink {
    fn prepare(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SplitError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;

        let removed = self.remove_stale_icons()?;
        if removed > 0 {
            debug!("Removed {} stale icons from {}", removed, self.dir.display());
        }

        Ok(())
    }

    fn write_icon(&mut self, name: &str, icon: &RgbaImage) -> Result<()> {
        save_icon_png(icon, &self.icon_path(name))
    }
}

/// Keeps icons in memory, in the order they were written.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub icons: Vec<(String, RgbaImage)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&RgbaImage> {
        self.icons
            .iter()
            .find(|(icon_name, _)| icon_name == name)
            .map(|(_, icon)| icon)
    }

    pub fn names(&self) -> Vec<&str> {
        self.icons.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl IconSink for MemorySink {
    fn write_icon(&mut self, name: &str, icon: &RgbaImage) -> Result<()> {
        self.icons.push((name.to_string(), icon.clone()));
        Ok(())
    }
}

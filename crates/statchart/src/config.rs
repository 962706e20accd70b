// File: crates/statchart/src/config.rs
// Summary: Generator configuration with fixed defaults (output directory, render options).

use std::path::{Path, PathBuf};

use statchart_core::RenderOptions;

/// Where charts land and how they are drawn. The binary always uses `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving the five PNGs; the working directory by default.
    pub output_dir: PathBuf,
    /// Figure size 4 x 2.4 in at 100 DPI, classic theme, labels on.
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("."), render: RenderOptions::default() }
    }
}

impl Config {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

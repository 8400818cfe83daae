//! Platform-specific application data directory.
//!
//! | Platform | Base directory                                 |
//! |----------|------------------------------------------------|
//! | Windows  | `%LOCALAPPDATA%\hoslog\hoslog`                 |
//! | macOS    | `~/Library/Application Support/hoslog/hoslog`  |
//! | Other    | `~/.local/share/hoslog/hoslog`                 |
//!
//! The directory is created lazily the first time a path inside it is
//! requested.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "hoslog";
pub const APP_NAME: &str = "hoslog";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Full path of `file_name` inside the data directory, creating the
    /// directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

// src/storage/mod.rs
use crate::utils::error::StorageError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
            tracing::debug!("Created output directory {}", base_path.display());
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the printed results as `<prefix>_<timestamp>.txt`
    pub fn save_results(&self, prefix: &str, text: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(results_filename(prefix, &Local::now()));

        // Same bytes as the terminal output, including println!'s newline
        fs::write(&file_path, format!("{}\n", text)).map_err(StorageError::IoError)?;

        tracing::info!("Saved results to {}", file_path.display());
        Ok(file_path)
    }

    /// Keeps a copy of the fetched page for debugging extraction problems
    pub fn save_raw_page(&self, html: &str) -> Result<PathBuf, StorageError> {
        let filename = format!("page_{}.html", Local::now().format(TIMESTAMP_FORMAT));
        let file_path = self.base_dir.join(filename);

        fs::write(&file_path, html).map_err(StorageError::IoError)?;

        tracing::info!("Saved raw page to {}", file_path.display());
        Ok(file_path)
    }
}

/// `<prefix>_<YYYY-MM-DD_HH-MM-SS>.txt`
pub fn results_filename(prefix: &str, at: &DateTime<Local>) -> String {
    format!("{}_{}.txt", prefix, at.format(TIMESTAMP_FORMAT))
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_OUTPUT_DIR, ERROR_LOG_NAME, GPX_FILE_PREFIX, GPX_WRITE_LOG_NAME, SUPPORTED_EXTENSIONS,
};
use crate::utils::get_config_path;

/// Explicit configuration handed to the batch processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    pub output_dir: PathBuf,
    pub log_file_name: String,
    pub gpx_write_log_name: String,
    pub gpx_file_prefix: String,
    /// Lower-case extensions including the leading dot
    pub extensions: Vec<String>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file_name: ERROR_LOG_NAME.to_string(),
            gpx_write_log_name: GPX_WRITE_LOG_NAME.to_string(),
            gpx_file_prefix: GPX_FILE_PREFIX.to_string(),
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ProcessorConfig {
    pub fn with_output_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.output_dir.join(&self.log_file_name)
    }

    pub fn gpx_write_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.gpx_write_log_name)
    }

    /// `{output_dir}/{prefix}{timestamp}.gpx`
    pub fn gpx_file_path(&self, timestamp: &str) -> PathBuf {
        self.output_dir.join(format!("{}{}.gpx", self.gpx_file_prefix, timestamp))
    }
}

/// User settings persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub last_folder: Option<String>,
    pub output_dir: String,
    #[serde(default)]
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_folder: None,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            show_progress: true,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        if let Some(last_folder) = config_map.get("last_folder") {
            let folder = last_folder.trim_matches('"');
            if !folder.is_empty() {
                settings.last_folder = Some(folder.to_string());
            }
        }
        if let Some(output_dir) = config_map.get("output_dir") {
            let dir = output_dir.trim_matches('"');
            if !dir.is_empty() {
                settings.output_dir = dir.to_string();
            }
        }
        if let Some(show_progress_str) = config_map.get("show_progress") {
            if let Ok(show_progress) = show_progress_str.parse::<bool>() {
                settings.show_progress = show_progress;
            }
        }

        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Creating config directory")?;
        }

        let mut content = String::new();
        content.push_str("# PhotoGpx Configuration File\n");

        if let Some(ref last_folder) = self.last_folder {
            content.push_str(&format!("last_folder = \"{}\"\n", last_folder));
        }
        content.push_str(&format!("output_dir = \"{}\"\n", self.output_dir));
        content.push_str(&format!("show_progress = {}\n", self.show_progress));

        std::fs::write(config_path, content).context("Failed to write to config file")?;
        Ok(())
    }

    pub fn update_last_folder<P: AsRef<Path>>(&mut self, folder_path: P) {
        self.last_folder = folder_path.as_ref().to_str().map(|s| s.to_string());
    }

    pub fn processor_config(&self) -> ProcessorConfig {
        ProcessorConfig::with_output_dir(&self.output_dir)
    }
}

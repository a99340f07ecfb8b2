use std::path::{Path, PathBuf};

use crate::constants::SETTINGS_FILE_NAME;

/// Returns the cross-platform directory for application data
pub fn get_app_data_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        let home_dir = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let mut path = PathBuf::from(home_dir);
        path.push("Library");
        path.push("Application Support");
        path.push("PhotoGpx");
        path
    } else if cfg!(target_os = "windows") {
        // %APPDATA%/PhotoGpx, falling back to the working directory
        match std::env::var("APPDATA") {
            Ok(appdata) => PathBuf::from(appdata).join("PhotoGpx"),
            Err(_) => PathBuf::from(".").join("PhotoGpx"),
        }
    } else if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data_home).join("PhotoGpx")
    } else {
        // ~/.local/share/PhotoGpx
        let home_dir = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let mut path = PathBuf::from(home_dir);
        path.push(".local");
        path.push("share");
        path.push("PhotoGpx");
        path
    }
}

/// Ensures the directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<(), std::io::Error> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Returns the path to the application configuration file
pub fn get_config_path() -> PathBuf {
    get_app_data_dir().join(SETTINGS_FILE_NAME)
}

/// Base name of a photo path, lossy for non-UTF-8 names
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

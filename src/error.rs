use std::path::PathBuf;
use thiserror::Error;

/// Fatal enumeration failure. The batch stops and no GPX is produced.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Photos directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Error scanning folder {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-photo metadata failure. Counted as an errored photo, never fatal.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata error: {0}")]
    Metadata(#[from] exif::Error),
}

#[derive(Error, Debug)]
pub enum GpxError {
    #[error("Waypoint sequence has odd length {0}; waypoints must come in pairs")]
    UnpairedWaypoints(usize),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to finalize GPX file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Error writing GPX: {0}")]
    Write(#[from] GpxError),
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

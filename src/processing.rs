use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::{FILE_TIMESTAMP_FORMAT, LOG_TIMESTAMP_FORMAT, NO_GPS_MESSAGE, PROCESSING_TAG};
use crate::error::{GpxError, ProcessingError};
use crate::error_log::{append_line, ErrorLog};
use crate::exif_parser::{ExifGpsExtractor, GpsExtractor};
use crate::gpx::write_gpx;
use crate::progress::{PhotoOutcome, ProcessingCounters, ProgressSink};
use crate::scanner::{scan_photos, PhotoRef};
use crate::settings::ProcessorConfig;
use crate::utils::{ensure_directory_exists, file_name_of};
use crate::waypoint::WaypointSequence;

/// Final counters and output locations of one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub total_photos: usize,
    pub successful_photos: usize,
    pub skipped_photos: usize,
    pub error_photos: usize,
    pub success_rate: f64,
    pub gpx_file_path: PathBuf,
    pub log_file_path: PathBuf,
}

impl ProcessingResult {
    fn from_counters(
        counters: &ProcessingCounters,
        gpx_file_path: PathBuf,
        log_file_path: PathBuf,
    ) -> Self {
        Self {
            total_photos: counters.total(),
            successful_photos: counters.successful(),
            skipped_photos: counters.skipped(),
            error_photos: counters.errored(),
            success_rate: counters.success_rate(),
            gpx_file_path,
            log_file_path,
        }
    }
}

/// Sequential photo-to-GPX batch.
pub struct PhotoProcessor<E: GpsExtractor = ExifGpsExtractor> {
    config: ProcessorConfig,
    extractor: E,
}

impl PhotoProcessor<ExifGpsExtractor> {
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_extractor(config, ExifGpsExtractor)
    }
}

impl<E: GpsExtractor> PhotoProcessor<E> {
    pub fn with_extractor(config: ProcessorConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Scans `folder`, extracts GPS from every recognized photo and writes one
    /// GPX file into the output directory.
    ///
    /// Per-photo failures only show up in the counters and the error log.
    /// A missing or unreadable folder and a failed GPX write are returned as
    /// errors.
    pub fn process_photos(
        &self,
        folder: &Path,
        progress: &dyn ProgressSink,
    ) -> Result<ProcessingResult, ProcessingError> {
        let output_dir = &self.config.output_dir;
        ensure_directory_exists(output_dir).map_err(|source| ProcessingError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let error_log = ErrorLog::new(self.config.log_file_path());
        let timestamp = Local::now().format(FILE_TIMESTAMP_FORMAT).to_string();
        let gpx_path = self.config.gpx_file_path(&timestamp);

        let result = self.run_batch(folder, &gpx_path, &error_log, progress);
        if let Err(ref e) = result {
            error_log.log(PROCESSING_TAG, &e.to_string());
        }
        result
    }

    fn run_batch(
        &self,
        folder: &Path,
        gpx_path: &Path,
        error_log: &ErrorLog,
        progress: &dyn ProgressSink,
    ) -> Result<ProcessingResult, ProcessingError> {
        info!("🔍 Scanning photos directory: {}", folder.display());
        let photos = scan_photos(folder, &self.config.extensions)?;

        let mut counters = ProcessingCounters::new(photos.len());
        let mut waypoints = WaypointSequence::new();
        progress.report(&counters.snapshot());

        if photos.is_empty() {
            info!("No photos found, writing empty GPX");
        } else {
            info!("✅ Found {} photos. Starting processing...", photos.len());
        }

        for photo in &photos {
            let outcome = self.process_photo(photo, &mut waypoints, error_log);
            counters.record(outcome);
            progress.report(&counters.snapshot());
        }

        self.write_output(gpx_path, &waypoints)?;

        info!(
            "🎉 Done: {} with GPS, {} without, {} errors; GPX saved to {}",
            counters.successful(),
            counters.skipped(),
            counters.errored(),
            gpx_path.display()
        );

        Ok(ProcessingResult::from_counters(
            &counters,
            gpx_path.to_path_buf(),
            error_log.path().to_path_buf(),
        ))
    }

    fn process_photo(
        &self,
        photo: &PhotoRef,
        waypoints: &mut WaypointSequence,
        error_log: &ErrorLog,
    ) -> PhotoOutcome {
        let path_str = photo.path.to_string_lossy();
        match self.extractor.extract(&photo.path) {
            Ok(Some(point)) => {
                debug!(
                    "{}: {:.6}, {:.6}",
                    photo.path.display(),
                    point.latitude,
                    point.longitude
                );
                waypoints.push_pair(point, &file_name_of(&photo.path));
                PhotoOutcome::Success
            }
            Ok(None) => {
                debug!("{}: no GPS data", photo.path.display());
                error_log.log(&path_str, NO_GPS_MESSAGE);
                PhotoOutcome::Skipped
            }
            Err(e) => {
                warn!("Failed to read metadata from {}: {}", photo.path.display(), e);
                error_log.log(&path_str, &e.to_string());
                PhotoOutcome::Errored
            }
        }
    }

    fn write_output(&self, gpx_path: &Path, waypoints: &WaypointSequence) -> Result<(), GpxError> {
        write_gpx(gpx_path, waypoints.as_slice()).inspect_err(|e| {
            let line = format!(
                "[{}] Error writing GPX: {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                e
            );
            if let Err(log_err) = append_line(&self.config.gpx_write_log_path(), &line) {
                warn!("Could not record GPX write failure: {}", log_err);
            }
        })
    }
}

//! Photo folder to GPX track log exporter.
//!
//! Walks a folder of photos, reads the GPS position embedded in each file's
//! EXIF metadata and writes one GPX 1.1 document with a short two-point track
//! per geotagged photo.
//!
//! ```text
//! scanner ──► exif_parser ──► waypoint ──► gpx
//!                  │
//!                  ├──► progress (snapshot per photo)
//!                  └──► error_log (skipped / failed photos)
//! ```
//!
//! [`processing::PhotoProcessor`] ties the stages together.

pub mod constants;
pub mod error;
pub mod error_log;
pub mod exif_parser;
pub mod gpx;
pub mod processing;
pub mod progress;
pub mod scanner;
pub mod settings;
pub mod utils;
pub mod waypoint;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{ExtractionError, GpxError, ProcessingError, ScanError};
pub use processing::{PhotoProcessor, ProcessingResult};
pub use progress::{ProgressSink, ProgressSnapshot};
pub use settings::{ProcessorConfig, Settings};

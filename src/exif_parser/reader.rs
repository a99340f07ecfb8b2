use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use super::generic::gps_from_exif;
use crate::error::ExtractionError;
use crate::waypoint::GeoPoint;

/// Source of photo geolocations.
///
/// `Ok(None)` means the file was readable but carries no usable GPS tags;
/// `Err` means the metadata could not be read at all.
pub trait GpsExtractor {
    fn extract(&self, path: &Path) -> Result<Option<GeoPoint>, ExtractionError>;
}

/// Default extractor backed by kamadak-exif's container reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifGpsExtractor;

impl GpsExtractor for ExifGpsExtractor {
    fn extract(&self, path: &Path) -> Result<Option<GeoPoint>, ExtractionError> {
        extract_coordinates(path)
    }
}

/// Reads the GPS geolocation from any container kamadak-exif understands
/// (JPEG, HEIF/HEIC, PNG, TIFF, WebP).
pub fn extract_coordinates(path: &Path) -> Result<Option<GeoPoint>, ExtractionError> {
    let file = File::open(path)?;
    let mut buf_reader = BufReader::new(file);
    let mut exif_reader = exif::Reader::new();
    exif_reader.continue_on_error(true); // Tolerate non-standard EXIF structures

    let exif = match exif_reader.read_from_container(&mut buf_reader) {
        Ok(exif) => exif,
        Err(exif::Error::PartialResult(partial)) => {
            let (exif, errors) = partial.into_inner();
            debug!(
                "Partial EXIF in {} ({} errors), searching for GPS anyway",
                path.display(),
                errors.len()
            );
            exif
        }
        // No EXIF block at all is a clean "no GPS" answer
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(gps_from_exif(&exif))
}

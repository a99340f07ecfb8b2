// Recognized photo extensions, lower-case with the leading dot
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".heic"];

// Synthetic companion point: ~1.1 meters north of the real coordinate
pub const LATITUDE_OFFSET: f64 = 0.00001;
pub const OFFSET_SUFFIX: &str = " (offset)";

// GPX document header
pub const GPX_VERSION: &str = "1.1";
pub const GPX_CREATOR: &str = "PhotoToGPX";
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

// Output layout
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const ERROR_LOG_NAME: &str = "errors.log";
pub const GPX_WRITE_LOG_NAME: &str = "gpx_write_errors.log";
pub const GPX_FILE_PREFIX: &str = "photos_export";
pub const SETTINGS_FILE_NAME: &str = "photo_gpx.ini";

// chrono format strings
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Error log tag for failures not attributable to a single photo
pub const PROCESSING_TAG: &str = "PROCESSING";
pub const NO_GPS_MESSAGE: &str = "No GPS data found";

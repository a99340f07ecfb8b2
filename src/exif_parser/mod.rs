pub mod generic;
pub mod reader;

pub use generic::{get_gps_coord, gps_from_exif};
pub use reader::{extract_coordinates, ExifGpsExtractor, GpsExtractor};

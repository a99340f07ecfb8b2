use exif::{In, Tag, Value};

use crate::waypoint::GeoPoint;

/// Reads a GPS degrees/minutes/seconds triple as signed decimal degrees.
///
/// Returns `None` when either the coordinate or its hemisphere reference is
/// missing or malformed.
pub fn get_gps_coord(exif: &exif::Exif, coord_tag: Tag, ref_tag: Tag) -> Option<f64> {
    let coord = exif.get_field(coord_tag, In::PRIMARY)?;
    let ref_field = exif.get_field(ref_tag, In::PRIMARY)?;

    let Value::Rational(ref vec) = coord.value else {
        return None;
    };
    if vec.len() != 3 {
        return None;
    }
    let d = vec[0].to_f64();
    let m = vec[1].to_f64();
    let s = vec[2].to_f64();
    let mut decimal = d + (m / 60.0) + (s / 3600.0);
    if !decimal.is_finite() {
        return None;
    }

    // S/W hemispheres are negative
    let hemisphere = match ref_field.value {
        Value::Ascii(ref parts) => parts.first().and_then(|p| p.first()).copied(),
        _ => None,
    }?;
    if matches!(hemisphere.to_ascii_uppercase(), b'S' | b'W') {
        decimal *= -1.0;
    }
    Some(decimal)
}

/// Geolocation from the GPS IFD, if both axes are present
pub fn gps_from_exif(exif: &exif::Exif) -> Option<GeoPoint> {
    let lat = get_gps_coord(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef)?;
    let lng = get_gps_coord(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef)?;
    Some(GeoPoint::new(lat, lng))
}

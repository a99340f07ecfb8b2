use serde::{Deserialize, Serialize};

use crate::constants::{LATITUDE_OFFSET, OFFSET_SUFFIX};

/// Decimal-degree coordinate read from photo metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Real point followed by its synthetic companion shifted north by
/// `LATITUDE_OFFSET`.
pub fn derive_pair(point: GeoPoint, name: &str) -> [Waypoint; 2] {
    [
        Waypoint {
            latitude: point.latitude,
            longitude: point.longitude,
            name: name.to_string(),
        },
        Waypoint {
            latitude: point.latitude + LATITUDE_OFFSET,
            longitude: point.longitude,
            name: format!("{}{}", name, OFFSET_SUFFIX),
        },
    ]
}

/// Track name for a waypoint: its name without the offset suffix
pub fn track_name(name: &str) -> &str {
    name.strip_suffix(OFFSET_SUFFIX).unwrap_or(name)
}

/// Ordered waypoints, appended strictly in (real, offset) pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointSequence {
    points: Vec<Waypoint>,
}

impl WaypointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pair(&mut self, point: GeoPoint, name: &str) {
        self.points.extend(derive_pair(point, name));
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&Waypoint, &Waypoint)> {
        self.points.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn track_count(&self) -> usize {
        self.points.len() / 2
    }
}

//! Geographic coordinate value type and its external text forms.

use serde::Serialize;

/// Base URL of the external map viewer. The query is appended verbatim.
pub const MAPS_BASE_URL: &str = "https://maps.google.com/?q=";

/// A latitude/longitude pair in decimal degrees.
///
/// Latitude lies in `[-90, 90]`, longitude in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// `{0, 0}`: the value held before anything has been generated.
    pub const ORIGIN: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True for the `{0, 0}` placeholder.
    ///
    /// A genuine sample landing exactly on the origin is indistinguishable
    /// from "nothing generated yet" and is treated the same way.
    pub fn is_origin(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Whether both components are inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Clipboard form: both components fixed to six decimals.
    pub fn clipboard_text(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }

    /// Map viewer URL. Components are written at full precision, not rounded.
    pub fn maps_url(&self) -> String {
        format!("{MAPS_BASE_URL}{},{}", self.latitude, self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}°, {:.6}°", self.latitude, self.longitude)
    }
}

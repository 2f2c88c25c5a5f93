//! Continental bounding boxes used by restricted sampling.
//!
//! Each region is a coarse latitude/longitude box approximating a landmass.
//! The boxes are pairwise disjoint, so any point drawn from one of them can be
//! attributed back to exactly one region.

use crate::coordinate::Coordinate;

/// A fixed latitude/longitude bounding box. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Display name (e.g. `"North America"`).
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Region {
    pub const fn new(
        name: &'static str,
        lat_min: f64,
        lat_max: f64,
        lng_min: f64,
        lng_max: f64,
    ) -> Self {
        Self {
            name,
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&c.latitude)
            && (self.lng_min..=self.lng_max).contains(&c.longitude)
    }

    /// Point at the given fractions (each in `[0, 1]`) along the box's axes.
    pub fn interpolate(&self, lat_fraction: f64, lng_fraction: f64) -> Coordinate {
        Coordinate::new(
            self.lat_min + lat_fraction * (self.lat_max - self.lat_min),
            self.lng_min + lng_fraction * (self.lng_max - self.lng_min),
        )
    }

    /// Box area in square degrees. Only used for display; sampling ignores it.
    pub fn span_sq_deg(&self) -> f64 {
        (self.lat_max - self.lat_min) * (self.lng_max - self.lng_min)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const NORTH_AMERICA: Region = Region::new("North America", 25.0, 72.0, -168.0, -52.0);
pub const SOUTH_AMERICA: Region = Region::new("South America", -56.0, 13.0, -82.0, -34.0);
pub const EUROPE: Region = Region::new("Europe", 36.0, 71.0, -10.0, 40.0);
pub const AFRICA: Region = Region::new("Africa", -35.0, 35.0, -18.0, 52.0);
pub const ASIA: Region = Region::new("Asia", 5.0, 77.0, 53.0, 180.0);
pub const OCEANIA: Region = Region::new("Oceania", -47.0, -10.0, 110.0, 180.0);
pub const ANTARCTICA: Region = Region::new("Antarctica", -90.0, -60.0, -180.0, 180.0);

/// The seven continental regions, in selection order.
pub const REGIONS: [Region; 7] = [
    NORTH_AMERICA,
    SOUTH_AMERICA,
    EUROPE,
    AFRICA,
    ASIA,
    OCEANIA,
    ANTARCTICA,
];

/// Every region whose box contains `c`.
pub fn regions_containing(c: &Coordinate) -> Vec<&'static Region> {
    REGIONS.iter().filter(|r| r.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlaps(a: &Region, b: &Region) -> bool {
        a.lat_min <= b.lat_max
            && b.lat_min <= a.lat_max
            && a.lng_min <= b.lng_max
            && b.lng_min <= a.lng_max
    }

    #[test]
    fn table_has_seven_regions() {
        assert_eq!(REGIONS.len(), 7);
        assert!(REGIONS.iter().any(|r| r.name == "Antarctica"));
    }

    #[test]
    fn bounds_are_ordered_and_valid() {
        for r in &REGIONS {
            assert!(r.lat_min < r.lat_max, "{} latitude bounds", r.name);
            assert!(r.lng_min < r.lng_max, "{} longitude bounds", r.name);
            assert!(Coordinate::new(r.lat_min, r.lng_min).is_valid(), "{}", r.name);
            assert!(Coordinate::new(r.lat_max, r.lng_max).is_valid(), "{}", r.name);
        }
    }

    #[test]
    fn regions_are_pairwise_disjoint() {
        for (i, a) in REGIONS.iter().enumerate() {
            for b in &REGIONS[i + 1..] {
                assert!(!overlaps(a, b), "{} overlaps {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn interpolate_midpoint_of_north_america() {
        let c = NORTH_AMERICA.interpolate(0.5, 0.5);
        assert_eq!(c, Coordinate::new(48.5, -110.0));
    }

    #[test]
    fn interpolate_corners_stay_inside() {
        for r in &REGIONS {
            assert!(r.contains(&r.interpolate(0.0, 0.0)));
            assert!(r.contains(&r.interpolate(1.0, 1.0)));
        }
    }

    #[test]
    fn ocean_point_is_in_no_region() {
        // Middle of the Pacific.
        let c = Coordinate::new(0.0, -140.0);
        assert!(regions_containing(&c).is_empty());
    }
}

//! Random coordinate sampling.
//!
//! Two policies:
//! - **Unrestricted**: uniform over the latitude/longitude rectangle of the globe.
//! - **ContinentRestricted**: pick one of the seven [`REGIONS`] with equal
//!   weight, then a uniform point inside its box.
//!
//! Region choice is deliberately not weighted by area: Oceania is as likely as
//! Asia. Antarctica counts as a continent, so restricted samples can be polar.

use rand::Rng;

use crate::coordinate::Coordinate;
use crate::region::{REGIONS, Region};

/// Which sampling policy to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SamplingMode {
    /// Anywhere on the globe, oceans included.
    #[default]
    Unrestricted,
    /// Inside one of the continental bounding boxes.
    ContinentRestricted,
}

impl SamplingMode {
    /// Map the "include oceans" preference onto a mode.
    pub fn from_include_oceans(include_oceans: bool) -> Self {
        if include_oceans {
            Self::Unrestricted
        } else {
            Self::ContinentRestricted
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unrestricted => "anywhere",
            Self::ContinentRestricted => "land only",
        }
    }
}

impl std::fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Source of the uniform draws the sampler consumes.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests implement it directly to
/// script region picks and fractions.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// A sampled coordinate plus the region it was drawn from, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub coordinate: Coordinate,
    pub region: Option<&'static Region>,
}

/// Draw one coordinate under `mode`.
pub fn sample<R: RandomSource + ?Sized>(mode: SamplingMode, rng: &mut R) -> Coordinate {
    sample_with_region(mode, rng).coordinate
}

/// Draw one coordinate under `mode`, reporting the chosen region.
pub fn sample_with_region<R: RandomSource + ?Sized>(mode: SamplingMode, rng: &mut R) -> Sample {
    match mode {
        SamplingMode::Unrestricted => {
            let latitude = (rng.unit() - 0.5) * 180.0;
            let longitude = (rng.unit() - 0.5) * 360.0;
            Sample {
                coordinate: Coordinate::new(latitude, longitude),
                region: None,
            }
        }
        SamplingMode::ContinentRestricted => {
            // Clamp so a misbehaving source can't index past the table.
            let idx = rng.pick(REGIONS.len()).min(REGIONS.len() - 1);
            let region = &REGIONS[idx];
            let coordinate = region.interpolate(rng.unit(), rng.unit());
            Sample {
                coordinate,
                region: Some(region),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::region::{NORTH_AMERICA, regions_containing};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use std::collections::VecDeque;

    /// Replays fixed draws; falls back to 0.5 / index 0 when exhausted.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedSource {
        pub units: VecDeque<f64>,
        pub picks: VecDeque<usize>,
    }

    impl ScriptedSource {
        pub fn new(picks: &[usize], units: &[f64]) -> Self {
            Self {
                units: units.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn unit(&mut self) -> f64 {
            self.units.pop_front().unwrap_or(0.5)
        }

        fn pick(&mut self, _len: usize) -> usize {
            self.picks.pop_front().unwrap_or(0)
        }
    }

    #[test]
    fn unrestricted_stays_on_the_globe() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let c = sample(SamplingMode::Unrestricted, &mut rng);
            assert!((-90.0..=90.0).contains(&c.latitude), "lat {}", c.latitude);
            assert!((-180.0..=180.0).contains(&c.longitude), "lng {}", c.longitude);
        }
    }

    #[test]
    fn unrestricted_maps_unit_draws_linearly() {
        let mut src = ScriptedSource::new(&[], &[0.0, 0.75]);
        let c = sample(SamplingMode::Unrestricted, &mut src);
        assert_eq!(c, Coordinate::new(-90.0, 90.0));

        let mut mid = ScriptedSource::new(&[], &[0.5, 0.5]);
        assert!(sample(SamplingMode::Unrestricted, &mut mid).is_origin());
    }

    #[test]
    fn unrestricted_reports_no_region() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = sample_with_region(SamplingMode::Unrestricted, &mut rng);
        assert!(s.region.is_none());
    }

    #[test]
    fn restricted_lands_in_exactly_one_region() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let s = sample_with_region(SamplingMode::ContinentRestricted, &mut rng);
            let hits = regions_containing(&s.coordinate);
            assert_eq!(hits.len(), 1, "{:?} in {hits:?}", s.coordinate);
            assert_eq!(Some(hits[0]), s.region);
        }
    }

    #[test]
    fn restricted_regions_are_equally_likely() {
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 70_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..trials {
            let s = sample_with_region(SamplingMode::ContinentRestricted, &mut rng);
            *counts.entry(s.region.map(|r| r.name).unwrap_or("none")).or_default() += 1;
        }
        assert_eq!(counts.len(), REGIONS.len());
        let expected = trials / REGIONS.len();
        for (name, n) in &counts {
            assert!(
                n.abs_diff(expected) < expected / 10,
                "{name}: {n} draws, expected about {expected}"
            );
        }
    }

    #[test]
    fn restricted_scripted_north_america_midpoint() {
        let mut src = ScriptedSource::new(&[0], &[0.5, 0.5]);
        let s = sample_with_region(SamplingMode::ContinentRestricted, &mut src);
        assert_eq!(s.region, Some(&NORTH_AMERICA));
        assert_eq!(s.coordinate, Coordinate::new(48.5, -110.0));
    }

    #[test]
    fn restricted_clamps_out_of_range_pick() {
        let mut src = ScriptedSource::new(&[99], &[0.0, 0.0]);
        let s = sample_with_region(SamplingMode::ContinentRestricted, &mut src);
        assert_eq!(s.region.map(|r| r.name), Some("Antarctica"));
    }

    #[test]
    fn mode_from_include_oceans() {
        assert_eq!(
            SamplingMode::from_include_oceans(true),
            SamplingMode::Unrestricted
        );
        assert_eq!(
            SamplingMode::from_include_oceans(false),
            SamplingMode::ContinentRestricted
        );
    }
}

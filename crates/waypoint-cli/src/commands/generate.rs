use serde::Serialize;

use waypoint_core::{
    Browser, Clipboard, Coordinate, Sample, SamplingMode, SystemBrowser, SystemClipboard,
    sample_with_region,
};

pub struct GenerateCommandConfig<'a> {
    pub config_path: Option<&'a str>,
    pub land_only: bool,
    pub count: usize,
    pub format: &'a str,
    pub copy: bool,
    pub open: bool,
}

/// One line of `--format json` output.
#[derive(Serialize)]
struct GeneratedRecord<'a> {
    #[serde(flatten)]
    coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    maps_url: String,
}

pub fn run(cmd: GenerateCommandConfig<'_>) {
    let config = super::load_config(cmd.config_path);
    let include_oceans = config.include_oceans && !cmd.land_only;
    let mode = SamplingMode::from_include_oceans(include_oceans);

    let mut rng = rand::rng();
    let mut last = None;
    for _ in 0..cmd.count {
        let s = sample_with_region(mode, &mut rng);
        println!("{}", format_sample(&s, cmd.format));
        last = Some(s);
    }

    // Zero samples: nothing to copy or open.
    let Some(last) = last else {
        return;
    };
    if cmd.copy
        && let Err(e) = SystemClipboard.copy_text(&last.coordinate.clipboard_text())
    {
        log::warn!("clipboard write failed: {e}");
    }
    let url = last.coordinate.maps_url();
    if cmd.open
        && let Err(e) = SystemBrowser.open_url(&url)
    {
        log::warn!("failed to open {url}: {e}");
    }
}

fn format_sample(s: &Sample, format: &str) -> String {
    match format {
        "json" => {
            let record = GeneratedRecord {
                coordinate: s.coordinate,
                region: s.region.map(|r| r.name),
                maps_url: s.coordinate.maps_url(),
            };
            serde_json::to_string(&record).unwrap_or_default()
        }
        _ => match s.region {
            Some(region) => format!("{}  ({region})", s.coordinate.clipboard_text()),
            None => s.coordinate.clipboard_text(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::Coordinate;
    use waypoint_core::region::EUROPE;

    #[test]
    fn text_format_unrestricted() {
        let s = Sample {
            coordinate: Coordinate::new(12.345678, -98.765432),
            region: None,
        };
        assert_eq!(format_sample(&s, "text"), "12.345678, -98.765432");
    }

    #[test]
    fn text_format_names_region() {
        let s = Sample {
            coordinate: Coordinate::new(48.0, 2.5),
            region: Some(&EUROPE),
        };
        assert_eq!(format_sample(&s, "text"), "48.000000, 2.500000  (Europe)");
    }

    #[test]
    fn zero_count_prints_and_spawns_nothing() {
        // copy/open are requested but there is no sample to act on.
        run(GenerateCommandConfig {
            config_path: None,
            land_only: false,
            count: 0,
            format: "text",
            copy: true,
            open: true,
        });
    }

    #[test]
    fn json_format_fields() {
        let s = Sample {
            coordinate: Coordinate::new(48.5, -110.0),
            region: None,
        };
        let v: serde_json::Value = serde_json::from_str(&format_sample(&s, "json")).unwrap();
        assert_eq!(v["latitude"], 48.5);
        assert_eq!(v["longitude"], -110.0);
        assert_eq!(v["maps_url"], "https://maps.google.com/?q=48.5,-110");
        assert!(v.get("region").is_none());
    }

    #[test]
    fn json_format_includes_region_when_restricted() {
        let s = Sample {
            coordinate: Coordinate::new(48.0, 2.5),
            region: Some(&EUROPE),
        };
        let v: serde_json::Value = serde_json::from_str(&format_sample(&s, "json")).unwrap();
        assert_eq!(v["region"], "Europe");
    }
}

use waypoint_core::{REGIONS, Region};

pub fn run() {
    println!(
        "{} regions, each picked with equal probability by --land-only:\n",
        REGIONS.len()
    );
    println!(
        "  {:<15} {:>17} {:>19} {:>7} {:>7}",
        "Region", "Latitude", "Longitude", "Pick", "Area"
    );
    println!("  {}", "-".repeat(69));
    for row in region_rows(&REGIONS) {
        println!("{row}");
    }
}

/// One table line per region: bounds, pick share and area share in percent.
fn region_rows(regions: &[Region]) -> Vec<String> {
    let total_area: f64 = regions.iter().map(Region::span_sq_deg).sum();
    let pick_share = 100.0 / regions.len() as f64;
    regions
        .iter()
        .map(|r| format_row(r, pick_share, 100.0 * r.span_sq_deg() / total_area))
        .collect()
}

fn format_row(r: &Region, pick_share: f64, area_share: f64) -> String {
    format!(
        "  {:<15} {:>7.1} .. {:>6.1} {:>8.1} .. {:>6.1} {:>6.1}% {:>6.1}%",
        r.name, r.lat_min, r.lat_max, r.lng_min, r.lng_max, pick_share, area_share,
    )
}

pub mod generate;
pub mod regions;
pub mod ui;

use std::path::Path;

use waypoint_core::WaypointConfig;

/// Load the config file if one was given, defaults otherwise.
/// Exits with an error message when the file can't be read or parsed.
pub fn load_config(path: Option<&str>) -> WaypointConfig {
    let Some(path) = path else {
        return WaypointConfig::default();
    };
    match WaypointConfig::load_from_path(Path::new(path)) {
        Ok(config) => {
            log::debug!("loaded config from {path}");
            config
        }
        Err(e) => {
            eprintln!("Error: cannot load config {path}: {e}");
            std::process::exit(1);
        }
    }
}

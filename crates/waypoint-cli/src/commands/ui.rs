use waypoint_core::{Theme, WaypointConfig};

pub struct UiCommandConfig<'a> {
    pub config_path: Option<&'a str>,
    pub land_only: bool,
    pub dark: bool,
    pub tick_ms: Option<u64>,
    pub duration_ms: Option<u64>,
    pub feedback_ms: Option<u64>,
}

pub fn run(cmd: UiCommandConfig<'_>) {
    let config = apply_overrides(super::load_config(cmd.config_path), &cmd);
    let mut app = crate::tui::app::App::new(&config);
    if let Err(e) = app.run() {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}

/// Flags win over the config file. Boolean flags can only switch a setting on.
fn apply_overrides(mut config: WaypointConfig, cmd: &UiCommandConfig<'_>) -> WaypointConfig {
    if cmd.land_only {
        config.include_oceans = false;
    }
    if cmd.dark {
        config.theme = Theme::Dark;
    }
    if let Some(ms) = cmd.tick_ms {
        config.tick_ms = ms;
    }
    if let Some(ms) = cmd.duration_ms {
        config.duration_ms = ms;
    }
    if let Some(ms) = cmd.feedback_ms {
        config.feedback_ms = ms;
    }
    config
}

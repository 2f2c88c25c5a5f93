//! CLI for waypoint — discover random places on Earth.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "waypoint — discover random places on Earth")]
#[command(version = waypoint_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive coordinate generator (TUI)
    Ui {
        /// Restrict results to continental landmasses
        #[arg(long)]
        land_only: bool,

        /// Start in the dark theme
        #[arg(long)]
        dark: bool,

        /// Milliseconds between scramble frames
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Length of the scramble animation in milliseconds
        #[arg(long)]
        duration_ms: Option<u64>,

        /// How long "Copied!" stays visible, in milliseconds
        #[arg(long)]
        feedback_ms: Option<u64>,

        /// JSON config file; flags above override it
        #[arg(long)]
        config: Option<String>,
    },

    /// Print random coordinates without the animation
    Generate {
        /// Restrict results to continental landmasses
        #[arg(long)]
        land_only: bool,

        /// How many coordinates to print
        #[arg(
            long,
            default_value = "1",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        count: usize,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Copy the last coordinate to the clipboard
        #[arg(long)]
        copy: bool,

        /// Open the last coordinate in the map viewer
        #[arg(long)]
        open: bool,

        /// JSON config file (only `include_oceans` applies here)
        #[arg(long)]
        config: Option<String>,
    },

    /// List the continental regions used by --land-only
    Regions,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ui {
            land_only,
            dark,
            tick_ms,
            duration_ms,
            feedback_ms,
            config,
        } => commands::ui::run(commands::ui::UiCommandConfig {
            config_path: config.as_deref(),
            land_only,
            dark,
            tick_ms,
            duration_ms,
            feedback_ms,
        }),
        Commands::Generate {
            land_only,
            count,
            format,
            copy,
            open,
            config,
        } => commands::generate::run(commands::generate::GenerateCommandConfig {
            config_path: config.as_deref(),
            land_only,
            count,
            format: &format,
            copy,
            open,
        }),
        Commands::Regions => commands::regions::run(),
    }
}

//! # waypoint-core
//!
//! **Discover random places on Earth.**
//!
//! `waypoint-core` holds everything behind the waypoint front end that is not
//! drawing: coordinate sampling, the scramble-then-settle generation session,
//! the view preferences, and the clipboard/browser seams.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use waypoint_core::{Waypoint, WaypointConfig};
//!
//! let mut app = Waypoint::new(&WaypointConfig::default());
//! let t0 = Instant::now();
//! app.generate(t0);
//!
//! // Drive timers from your event loop.
//! app.tick(t0 + Duration::from_millis(1200));
//! if app.session().has_coordinates() {
//!     println!("{}", app.session().committed());
//!     app.open_map();
//! }
//! ```
//!
//! ## Architecture
//!
//! Intent → [`Waypoint`] → [`GenerationSession`] / [`UiPreferences`] → collaborators
//!
//! - **Sampler**: uniform over the globe, or uniform inside one of seven
//!   equally weighted continental boxes.
//! - **Session**: `Idle → Animating → Settled`, driven by owned timers that
//!   the caller polls with an explicit `Instant`.
//! - **Collaborators**: [`Clipboard`] and [`Browser`] are fire-and-forget.

pub mod collaborators;
pub mod config;
pub mod coordinate;
pub mod preferences;
pub mod region;
pub mod sampler;
pub mod session;
pub mod timer;
pub mod waypoint;

pub use collaborators::{Browser, Clipboard, SystemBrowser, SystemClipboard};
pub use config::WaypointConfig;
pub use coordinate::Coordinate;
pub use preferences::{Theme, UiPreferences};
pub use region::{REGIONS, Region};
pub use sampler::{RandomSource, Sample, SamplingMode, sample, sample_with_region};
pub use session::{GenerationSession, Phase, SessionTimings, Step};
pub use timer::Timer;
pub use waypoint::{REPOSITORY_URL, Waypoint};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

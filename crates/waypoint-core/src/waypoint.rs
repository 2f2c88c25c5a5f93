//! Intent dispatcher that owns a session, the preferences, and the
//! collaborators. Front ends forward user actions here and render from the
//! accessors; they never touch the session or the collaborators directly.

use std::time::Instant;

use log::{debug, warn};
use rand::rngs::ThreadRng;

use crate::collaborators::{Browser, Clipboard, SystemBrowser, SystemClipboard};
use crate::config::WaypointConfig;
use crate::preferences::{Theme, UiPreferences};
use crate::sampler::RandomSource;
use crate::session::{GenerationSession, Step};

/// Link shown in the about dialog.
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

pub struct Waypoint<C = SystemClipboard, B = SystemBrowser, R = ThreadRng> {
    session: GenerationSession<R>,
    prefs: UiPreferences,
    clipboard: C,
    browser: B,
}

impl Waypoint {
    /// System clipboard, system browser, thread-local RNG.
    pub fn new(config: &WaypointConfig) -> Self {
        Self::with_parts(
            GenerationSession::new(config.timings()),
            preferences_from(config),
            SystemClipboard,
            SystemBrowser,
        )
    }
}

fn preferences_from(config: &WaypointConfig) -> UiPreferences {
    UiPreferences::new(config.theme, config.include_oceans, config.feedback())
}

impl<C: Clipboard, B: Browser, R: RandomSource> Waypoint<C, B, R> {
    pub fn with_parts(
        session: GenerationSession<R>,
        prefs: UiPreferences,
        clipboard: C,
        browser: B,
    ) -> Self {
        Self {
            session,
            prefs,
            clipboard,
            browser,
        }
    }

    /// Build from a config with caller-supplied randomness and collaborators.
    pub fn from_config(config: &WaypointConfig, rng: R, clipboard: C, browser: B) -> Self {
        Self::with_parts(
            GenerationSession::with_rng(config.timings(), rng),
            preferences_from(config),
            clipboard,
            browser,
        )
    }

    pub fn session(&self) -> &GenerationSession<R> {
        &self.session
    }

    pub fn preferences(&self) -> &UiPreferences {
        &self.prefs
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// Start a generation and clear any copy feedback. No-op while animating.
    pub fn generate(&mut self, now: Instant) -> bool {
        let started = self.session.generate(now);
        if started {
            self.prefs.clear_copied();
        }
        started
    }

    /// Drive every timer to `now`.
    pub fn tick(&mut self, now: Instant) -> Step {
        if self.prefs.advance(now) {
            debug!("copy feedback expired");
        }
        self.session.advance(now, self.prefs.sampling_mode())
    }

    /// Copy the committed coordinate. Returns false when there is nothing to copy.
    ///
    /// Feedback is shown even if the clipboard tool fails.
    pub fn copy(&mut self, now: Instant) -> bool {
        if !self.session.has_coordinates() {
            return false;
        }
        let text = self.session.committed().clipboard_text();
        if let Err(e) = self.clipboard.copy_text(&text) {
            warn!("clipboard write failed: {e}");
        }
        self.prefs.mark_copied(now);
        true
    }

    /// Open the committed coordinate in the map viewer.
    pub fn open_map(&mut self) -> bool {
        if !self.session.has_coordinates() {
            return false;
        }
        let url = self.session.committed().maps_url();
        self.open(&url);
        true
    }

    pub fn open_repository(&mut self) {
        self.open(REPOSITORY_URL);
    }

    fn open(&mut self, url: &str) {
        debug!("opening {url}");
        if let Err(e) = self.browser.open_url(url) {
            warn!("failed to open {url}: {e}");
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.toggle_theme()
    }

    pub fn toggle_oceans(&mut self) -> bool {
        self.prefs.toggle_oceans()
    }

    pub fn toggle_about(&mut self) -> bool {
        self.prefs.toggle_about()
    }

    pub fn open_about(&mut self) {
        self.prefs.open_about();
    }

    pub fn close_about(&mut self) {
        self.prefs.close_about();
    }

    /// Cancel every pending timer. Call before tearing the front end down.
    pub fn dispose(&mut self) {
        self.session.dispose();
        self.prefs.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::sampler::tests::ScriptedSource;
    use crate::session::Phase;
    use std::io;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct RecordingClipboard {
        texts: Vec<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn copy_text(&mut self, text: &str) -> io::Result<()> {
            self.texts.push(text.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no clipboard tool"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Debug, Default)]
    struct RecordingBrowser {
        urls: Vec<String>,
    }

    impl Browser for RecordingBrowser {
        fn open_url(&mut self, url: &str) -> io::Result<()> {
            self.urls.push(url.to_string());
            Ok(())
        }
    }

    type TestWaypoint = Waypoint<RecordingClipboard, RecordingBrowser, ScriptedSource>;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn waypoint(config: &WaypointConfig, picks: &[usize], units: &[f64]) -> TestWaypoint {
        Waypoint::from_config(
            config,
            ScriptedSource::new(picks, units),
            RecordingClipboard::default(),
            RecordingBrowser::default(),
        )
    }

    /// Unit draws that map to exactly this coordinate in unrestricted mode.
    fn units_for(c: Coordinate) -> [f64; 2] {
        [c.latitude / 180.0 + 0.5, c.longitude / 360.0 + 0.5]
    }

    fn settle(w: &mut TestWaypoint, t0: Instant) {
        assert!(w.generate(t0));
        w.tick(t0 + w.session().timings().duration);
        assert_eq!(w.session().phase(), Phase::Settled);
    }

    #[test]
    fn copy_and_map_disabled_before_generation() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[]);
        let t0 = Instant::now();
        assert!(!w.session().has_coordinates());
        assert!(!w.copy(t0));
        assert!(!w.open_map());
        assert!(w.clipboard.texts.is_empty());
        assert!(w.browser.urls.is_empty());
        assert!(!w.preferences().copied_feedback_active());
    }

    #[test]
    fn copy_formats_committed_coordinate() {
        let target = Coordinate::new(12.345678, -98.765432);
        let mut w = waypoint(&WaypointConfig::default(), &[], &units_for(target));
        let t0 = Instant::now();
        settle(&mut w, t0);

        assert!(w.session().has_coordinates());
        assert!(w.copy(t0 + ms(1300)));
        assert_eq!(w.clipboard.texts, vec!["12.345678, -98.765432".to_string()]);
        assert!(w.preferences().copied_feedback_active());
    }

    #[test]
    fn open_map_uses_raw_coordinate() {
        let config = WaypointConfig {
            include_oceans: false,
            ..WaypointConfig::default()
        };
        let mut w = waypoint(&config, &[0], &[0.5, 0.5]);
        settle(&mut w, Instant::now());

        assert_eq!(w.session().committed(), Coordinate::new(48.5, -110.0));
        assert!(w.open_map());
        assert_eq!(w.browser.urls, vec!["https://maps.google.com/?q=48.5,-110"]);
    }

    #[test]
    fn actions_disabled_while_animating_again() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[0.1, 0.2]);
        let t0 = Instant::now();
        settle(&mut w, t0);
        assert!(w.generate(t0 + ms(2000)));
        assert!(!w.copy(t0 + ms(2100)));
        assert!(!w.open_map());
    }

    #[test]
    fn failed_clipboard_still_shows_feedback() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[0.1, 0.2]);
        w.clipboard.fail = true;
        let t0 = Instant::now();
        settle(&mut w, t0);
        assert!(w.copy(t0 + ms(1300)));
        assert!(w.preferences().copied_feedback_active());
    }

    #[test]
    fn copy_feedback_expires_and_generate_clears_it() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[0.1, 0.2, 0.3, 0.4]);
        let t0 = Instant::now();
        settle(&mut w, t0);

        w.copy(t0 + ms(1300));
        w.tick(t0 + ms(3299));
        assert!(w.preferences().copied_feedback_active());
        w.tick(t0 + ms(3300));
        assert!(!w.preferences().copied_feedback_active());

        w.copy(t0 + ms(4000));
        assert!(w.generate(t0 + ms(4100)));
        assert!(!w.preferences().copied_feedback_active());
    }

    #[test]
    fn mode_is_read_at_settlement() {
        let mut w = waypoint(&WaypointConfig::default(), &[0], &[0.5, 0.5]);
        let t0 = Instant::now();
        assert!(w.generate(t0));
        // Switched to land-only mid-animation: the result honours it.
        assert!(!w.toggle_oceans());
        w.tick(t0 + ms(1200));
        assert_eq!(w.session().committed(), Coordinate::new(48.5, -110.0));
    }

    #[test]
    fn repository_link_opens_regardless_of_state() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[]);
        w.open_repository();
        assert_eq!(w.browser.urls, vec![REPOSITORY_URL.to_string()]);
    }

    #[test]
    fn preference_intents_forward() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[]);
        assert_eq!(w.toggle_theme(), Theme::Dark);
        assert!(w.toggle_about());
        w.close_about();
        assert!(!w.preferences().about_open());
        w.open_about();
        assert!(w.preferences().about_open());
    }

    #[test]
    fn dispose_cancels_all_timers() {
        let mut w = waypoint(&WaypointConfig::default(), &[], &[0.1, 0.2]);
        let t0 = Instant::now();
        settle(&mut w, t0);
        w.copy(t0 + ms(1300));
        assert!(w.generate(t0 + ms(1400)));
        let shown = w.session().displayed();

        w.dispose();
        assert_eq!(w.session().pending_timers(), 0);
        assert!(!w.preferences().copied_feedback_active());
        assert_eq!(w.tick(t0 + ms(9000)), Step::Unchanged);
        assert_eq!(w.session().displayed(), shown);
    }
}

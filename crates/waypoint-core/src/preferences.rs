//! View-level flags: theme, ocean toggle, about dialog, copy feedback.
//!
//! These are independent of each other. The only one the generation session
//! reads is `include_oceans`, as the sampling mode at settlement.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_FEEDBACK_MS;
use crate::sampler::SamplingMode;
use crate::timer::{Timer, take_due};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiPreferences {
    theme: Theme,
    include_oceans: bool,
    about_open: bool,
    feedback_delay: Duration,
    /// Expiry of the "copied" feedback; `Some` while it is showing.
    copied: Option<Timer>,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self::new(
            Theme::default(),
            true,
            Duration::from_millis(DEFAULT_FEEDBACK_MS),
        )
    }
}

impl UiPreferences {
    pub fn new(theme: Theme, include_oceans: bool, feedback_delay: Duration) -> Self {
        Self {
            theme,
            include_oceans,
            about_open: false,
            feedback_delay,
            copied: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn include_oceans(&self) -> bool {
        self.include_oceans
    }

    pub fn about_open(&self) -> bool {
        self.about_open
    }

    pub fn copied_feedback_active(&self) -> bool {
        self.copied.is_some()
    }

    pub fn sampling_mode(&self) -> SamplingMode {
        SamplingMode::from_include_oceans(self.include_oceans)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_oceans(&mut self) -> bool {
        self.include_oceans = !self.include_oceans;
        self.include_oceans
    }

    pub fn open_about(&mut self) {
        self.about_open = true;
    }

    pub fn close_about(&mut self) {
        self.about_open = false;
    }

    pub fn toggle_about(&mut self) -> bool {
        self.about_open = !self.about_open;
        self.about_open
    }

    /// Show "copied" feedback, restarting its expiry if already showing.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied = Some(Timer::once(now, self.feedback_delay));
    }

    pub fn clear_copied(&mut self) {
        self.copied = None;
    }

    /// Expire the copy feedback if due. Returns whether it just expired.
    pub fn advance(&mut self, now: Instant) -> bool {
        take_due(&mut self.copied, now)
    }

    /// Drop any pending timer.
    pub fn cancel_timers(&mut self) {
        self.copied = None;
    }
}

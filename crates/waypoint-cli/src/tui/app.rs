//! TUI application state and event loop.
//!
//! Design: one screen, one coordinate. Keys are forwarded as intents to a
//! [`Waypoint`]; every frame polls its timers, so the scramble animation and
//! the "Copied!" feedback run off the same loop that reads input.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use waypoint_core::{
    Browser, Clipboard, RandomSource, SystemBrowser, SystemClipboard, Waypoint, WaypointConfig,
};

/// Input poll interval; also the redraw cadence.
const FRAME: Duration = Duration::from_millis(16);

pub struct App<C = SystemClipboard, B = SystemBrowser, R = rand::rngs::ThreadRng> {
    waypoint: Waypoint<C, B, R>,
    running: bool,
    /// Instant of the last timer poll, used when drawing.
    now: Instant,
}

impl App {
    pub fn new(config: &WaypointConfig) -> Self {
        Self::with_waypoint(Waypoint::new(config))
    }
}

impl<C: Clipboard, B: Browser, R: RandomSource> App<C, B, R> {
    pub fn with_waypoint(waypoint: Waypoint<C, B, R>) -> Self {
        Self {
            waypoint,
            running: true,
            now: Instant::now(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // No timer may fire once the screen is gone.
        self.waypoint.dispose();

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook(); // remove our hook
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        // Leave the last result on the normal screen.
        if self.waypoint.session().has_coordinates() {
            println!("{}", self.waypoint.session().committed().clipboard_text());
        }

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(FRAME)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key.code, Instant::now());
            }

            self.tick_at(Instant::now());
        }

        Ok(())
    }

    pub(crate) fn handle_key(&mut self, key: KeyCode, now: Instant) {
        // The about dialog is modal: it only closes, links out, or quits.
        if self.waypoint.preferences().about_open() {
            match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('a') | KeyCode::Enter => {
                    self.waypoint.close_about()
                }
                KeyCode::Char('r') => self.waypoint.open_repository(),
                KeyCode::Char('q') => self.running = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.waypoint.generate(now);
            }
            KeyCode::Char('o') => {
                self.waypoint.toggle_oceans();
            }
            KeyCode::Char('c') => {
                self.waypoint.copy(now);
            }
            KeyCode::Char('m') => {
                self.waypoint.open_map();
            }
            KeyCode::Char('t') => {
                self.waypoint.toggle_theme();
            }
            KeyCode::Char('?') | KeyCode::Char('a') => self.waypoint.open_about(),
            KeyCode::Char('r') => self.waypoint.open_repository(),
            _ => {}
        }
    }

    /// Poll every timer at `now` and remember it for drawing.
    pub(crate) fn tick_at(&mut self, now: Instant) {
        self.now = now;
        self.waypoint.tick(now);
    }

    pub fn waypoint(&self) -> &Waypoint<C, B, R> {
        &self.waypoint
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

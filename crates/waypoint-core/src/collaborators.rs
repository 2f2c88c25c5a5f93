//! External collaborators: the system clipboard and the web browser.
//!
//! Both are fire-and-forget. Implementations report spawn errors, but callers
//! in this crate only log them. Every child is reaped: clipboard tools are
//! waited on once their stdin closes, openers on a detached thread.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Receives text to place on the clipboard.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> io::Result<()>;
}

/// Opens a URL in a new browsing context.
pub trait Browser {
    fn open_url(&mut self, url: &str) -> io::Result<()>;
}

/// Pipes text into the platform clipboard tool.
///
/// macOS uses `pbcopy`, Windows `clip`, Linux `wl-copy` under Wayland and
/// `xclip` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn command() -> Command {
        #[cfg(target_os = "macos")]
        {
            Command::new("pbcopy")
        }
        #[cfg(target_os = "windows")]
        {
            Command::new("clip")
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                Command::new("wl-copy")
            } else {
                let mut cmd = Command::new("xclip");
                cmd.args(["-selection", "clipboard"]);
                cmd
            }
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> io::Result<()> {
        pipe_to(Self::command(), text)
    }
}

/// Write `text` to the command's stdin, close it and wait for the exit.
///
/// The clipboard tools exit (or fork a server and exit) on EOF.
fn pipe_to(mut cmd: Command, text: &str) -> io::Result<()> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    // stdin is dropped above, so the wait cannot block on our pipe.
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("clipboard tool exited with {status}")))
    }
}

/// Spawn the command and reap it on a background thread.
///
/// Openers such as `xdg-open` may stay alive as long as the browser does.
fn spawn_reaped(mut cmd: Command) -> io::Result<()> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();
    thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::debug!("failed to reap opener {pid}: {e}");
        }
    });
    Ok(())
}

/// Hands URLs to the platform opener (`open`, `xdg-open`, `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open_url(&mut self, url: &str) -> io::Result<()> {
        #[cfg(target_os = "macos")]
        let cmd = {
            let mut c = Command::new("open");
            c.arg(url);
            c
        };
        #[cfg(target_os = "windows")]
        let cmd = {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let cmd = {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        };

        spawn_reaped(cmd)
    }
}

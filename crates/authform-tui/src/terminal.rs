//! Terminal lifecycle for the form screen.
//!
//! `enter` switches the terminal into form mode in one step and hands back a
//! [`TerminalGuard`]. The guard is armed as soon as raw mode is on, so a
//! failure halfway through setup, an error out of the event loop, and a
//! normal exit all restore the terminal. Panics are covered by
//! [`install_panic_hook`].

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped.
#[must_use = "the terminal is restored as soon as the guard is dropped"]
pub struct TerminalGuard {
    restore: fn() -> Result<()>,
    armed: bool,
}

impl TerminalGuard {
    fn arm(restore: fn() -> Result<()>) -> Self {
        Self {
            restore,
            armed: true,
        }
    }

    /// Restores now and reports failures, instead of ignoring them on drop.
    ///
    /// # Errors
    /// Returns an error if leaving the alternate screen or raw mode fails.
    pub fn release(mut self) -> Result<()> {
        self.armed = false;
        (self.restore)()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = (self.restore)();
        }
    }
}

/// Puts the terminal into form mode.
///
/// Raw mode, alternate screen, window title, bracketed paste and mouse
/// capture. Call [`install_panic_hook`] first.
///
/// # Errors
/// Returns an error if any step fails; steps already applied are undone.
pub fn enter(title: &str) -> Result<(FormTerminal, TerminalGuard)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::arm(restore_terminal);

    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(title),
        EnableBracketedPaste,
        EnableMouseCapture
    )
    .context("Failed to enter form screen")?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")?;
    Ok((terminal, guard))
}

/// Undoes everything `enter` applied.
///
/// Idempotent. Raw mode is always left, even when leaving the alternate
/// screen fails.
///
/// # Errors
/// Returns the first step that failed.
pub fn restore_terminal() -> Result<()> {
    let screen = execute!(
        io::stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .context("Failed to leave form screen");
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    screen.and(raw)
}

/// Restores the terminal before the default panic message prints.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

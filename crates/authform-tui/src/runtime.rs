//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use tracing::{debug, warn};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Presentation};
use crate::terminal::{self, FormTerminal, TerminalGuard};
use crate::{render, update};

/// How often a Tick is emitted while idle.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. The terminal is restored when `run`
/// returns or the runtime is dropped, and on panic through the installed hook.
pub struct TuiRuntime {
    terminal: FormTerminal,
    pub state: AppState,
    last_tick: Instant,
    guard: TerminalGuard,
}

impl TuiRuntime {
    /// Enters form mode and builds the initial state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(title: &str, presentation: Presentation) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen
        terminal::install_panic_hook();

        let (terminal, guard) = terminal::enter(title)?;

        Ok(Self {
            terminal,
            state: AppState::new(presentation),
            last_tick: Instant::now(),
            guard,
        })
    }

    /// Runs the main event loop, restores the terminal, and returns the final
    /// state.
    ///
    /// # Errors
    /// Returns an error if reading events, drawing, or restoring fails. The
    /// event loop error wins when both fail.
    pub fn run(mut self) -> Result<AppState> {
        let result = self.event_loop();

        let Self {
            terminal,
            state,
            guard,
            ..
        } = self;
        drop(terminal);
        let restored = guard.release();

        result?;
        restored?;
        Ok(state)
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }

            for event in self.collect_events()? {
                let toast_before = self.state.view.toast.is_some();
                let is_tick = matches!(event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);

                // A Tick only matters when it took a notification down.
                if !is_tick || toast_before != self.state.view.toast.is_some() {
                    dirty = true;
                }
            }
        }

        Ok(())
    }

    /// Blocks until terminal input arrives or the next Tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        let time_until_tick = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());

        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain anything else already buffered
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                debug!("quit requested");
                self.state.should_quit = true;
            }
            UiEffect::Bell => {
                let out = self.terminal.backend_mut();
                if let Err(err) = out.write_all(b"\x07").and_then(|()| out.flush()) {
                    warn!("failed to ring bell: {err}");
                }
            }
        }
    }
}

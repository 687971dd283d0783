//! Events fed to the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic heartbeat; drives notification expiry.
    Tick,
    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(Event),
}

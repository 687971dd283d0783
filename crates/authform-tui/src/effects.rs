//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never touches the
//! terminal itself.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Leave the event loop and restore the terminal.
    Quit,
    /// Ring the terminal bell (sent when a submit is rejected).
    Bell,
}

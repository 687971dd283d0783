//! Full-screen login/signup form for authform.
//!
//! Elm-style split:
//! - `state.rs`: everything the screen knows
//! - `update.rs`: the reducer, `(state, event) -> effects`
//! - `render.rs`: pure drawing from state
//! - `runtime.rs`: terminal ownership, event loop, effect execution
//! - `features/view.rs`: the `Presenter` the form pushes into

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use authform_core::config::Config;
pub use runtime::TuiRuntime;
use state::Presentation;
use tracing::info;

/// Runs the interactive form until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the theme is invalid, or the
/// terminal fails.
pub fn run_auth_form(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The form requires a terminal.\n\
             Use `authform check --mode login --username ... --password ...` for non-interactive validation."
        );
    }

    // Resolve colors before touching the terminal so errors print normally.
    let presentation = Presentation::from_config(config)?;

    info!("starting form");
    let state = TuiRuntime::new(&config.title, presentation)?.run()?;
    info!(mode = %state.form.mode(), "form closed");

    Ok(())
}

//! Runtime execution modes.
//!
//! - `headless`: notifications to stdout/stderr, no terminal UI
//! - `tui`: full-screen interactive form (optional feature)

pub mod headless;

#[cfg(feature = "tui")]
pub use authform_tui::run_auth_form;

#[cfg(not(feature = "tui"))]
pub fn run_auth_form(_config: &authform_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}

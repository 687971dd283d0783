//! Interactive form command handler.

use anyhow::Result;
use authform_core::config::Config;

use crate::modes;

pub fn run(config: &Config) -> Result<()> {
    modes::run_auth_form(config)
}

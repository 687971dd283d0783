mod cli;
mod logging;
mod modes;

use cli::commands::check::ValidationFailed;

fn main() {
    if let Err(e) = cli::run() {
        // Already reported on stderr by the headless presenter
        if e.downcast_ref::<ValidationFailed>().is_some() {
            std::process::exit(1);
        }
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}

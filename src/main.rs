use std::io;
use std::panic;

use tracing_subscriber::EnvFilter;

use crate::constants::{FIRST_CHILD, LAST_CHILD};
use crate::core::domain::{Invocation, Mode};
use crate::core::pipeline::detecting::run_worker;
use crate::core::pipeline::dispatching::handle_dispatching;
use crate::native::launcher::NativeLauncher;

mod constants;
mod core;
mod native;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = Invocation::from_env();

    match Mode::from(&invocation) {
        Mode::Worker(value) => run_worker(value, &mut io::stdout().lock())?,
        Mode::Dispatcher => run_dispatcher(&invocation)?,
    }

    Ok(())
}

fn run_dispatcher(invocation: &Invocation) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    set_panic_hook();

    let launcher = NativeLauncher::for_invocation(invocation)?;
    tracing::debug!("Dispatching children of {}", launcher.program().display());

    let summary = handle_dispatching(&launcher, &mut io::stdout(), FIRST_CHILD..=LAST_CHILD);
    tracing::info!(
        launched = summary.launched.len(),
        failed = summary.failed.len(),
        "All children finished"
    );

    Ok(())
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}

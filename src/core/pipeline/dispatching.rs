use std::io::Write;
use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::{
    constants::ERROR_PREFIX,
    core::{
        domain::{ChildState, ChildTask, DispatchSummary},
        traits::launcher::{ChildExecutionError, Launcher},
    },
};

/// Launches one child per index, strictly in order, each one finished before
/// the next starts. Failures are written to `out` and never stop the loop.
#[tracing::instrument(skip(launcher, out))]
pub fn handle_dispatching<W: Write>(
    launcher: &dyn Launcher,
    out: &mut W,
    indices: RangeInclusive<u32>,
) -> DispatchSummary {
    let mut summary = DispatchSummary::default();

    for index in indices {
        let task = process_child(ChildTask::new(index), launcher, out);
        summary.record(&task);
    }

    tracing::debug!(
        launched = summary.launched.len(),
        failed = %summary.failed.iter().join(", "),
        "Dispatch finished"
    );
    summary
}

fn process_child<W: Write>(task: ChildTask, launcher: &dyn Launcher, out: &mut W) -> ChildTask {
    let task = task.change_state(ChildState::Running);
    tracing::debug!(index = task.index, "Launching child");

    let task = match launcher.launch(task.index) {
        Ok(()) => task.change_state(ChildState::Succeeded),
        Err(err) => {
            tracing::warn!(index = task.index, error = %err, "Child failed");
            report_failure(out, &err);
            task.change_state(ChildState::Failed {
                msg: err.to_string(),
            })
        }
    };

    tracing::debug!(
        index = task.index,
        elapsed_ms = task.elapsed_ms(),
        state = ?task.state,
        "Child finished"
    );
    task
}

// Flushed right away so the line lands before the next child's output.
fn report_failure<W: Write>(out: &mut W, err: &ChildExecutionError) {
    let written = writeln!(out, "{} {}", ERROR_PREFIX, err).and_then(|_| out.flush());
    if let Err(e) = written {
        tracing::warn!("Failed to report child error: {}", e);
    }
}

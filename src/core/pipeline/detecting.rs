use std::io::{self, Write};

use crate::core::domain::{Invocation, Mode};

impl From<&Invocation> for Mode {
    /// Only the first extra argument decides; anything that is not a
    /// base-10 integer leaves the process in dispatcher mode.
    fn from(invocation: &Invocation) -> Self {
        invocation
            .first_extra()
            .and_then(|arg| arg.to_str())
            .and_then(|arg| arg.parse::<i64>().ok())
            .map_or(Mode::Dispatcher, Mode::Worker)
    }
}

pub fn run_worker<W: Write>(value: i64, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

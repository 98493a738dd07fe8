use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::core::{
    domain::Invocation,
    traits::launcher::{ChildExecutionError, Launcher},
};

/// Re-runs `program` with the child index as its only argument, sharing the
/// parent's stdout and stderr.
#[derive(Clone, Debug)]
pub struct NativeLauncher {
    program: PathBuf,
}

impl NativeLauncher {
    pub fn new<T>(program: T) -> Self
    where
        T: AsRef<Path>,
    {
        NativeLauncher {
            program: program.as_ref().into(),
        }
    }

    /// Launcher for the running executable. Falls back to `argv[0]` when the
    /// executable path cannot be resolved.
    pub fn for_invocation(invocation: &Invocation) -> io::Result<Self> {
        match std::env::current_exe() {
            Ok(path) => Ok(Self::new(path)),
            Err(err) => {
                tracing::warn!("Cannot resolve current executable: {}", err);
                invocation.program().map(Self::new).ok_or(err)
            }
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Launcher for NativeLauncher {
    #[tracing::instrument(skip(self), fields(program = %self.program.display()))]
    fn launch(&self, index: u32) -> Result<(), ChildExecutionError> {
        let status = Command::new(&self.program)
            .arg(index.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ChildExecutionError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        tracing::debug!("Child exit status: {}", status);
        ChildExecutionError::check(status)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_launch_success() {
        let launcher = NativeLauncher::new("true");

        assert!(launcher.launch(1).is_ok());
    }

    #[test]
    fn test_launch_non_zero_exit() {
        let launcher = NativeLauncher::new("false");

        let result = launcher.launch(1);

        assert!(matches!(result, Err(ChildExecutionError::Exited(1))));
    }

    #[test]
    fn test_launch_receives_index_argument() {
        // `test` exits 0 only when its single operand is non-empty
        let launcher = NativeLauncher::new("test");

        assert!(launcher.launch(6).is_ok());
    }

    #[test]
    fn test_launch_program_not_found() {
        let launcher = NativeLauncher::new("/aboba/relaunch");

        let result = launcher.launch(1);

        println!("{:#?}", result);
        assert!(matches!(result, Err(ChildExecutionError::Launch { .. })));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("failed to launch /aboba/relaunch: ")
        );
    }

    #[test]
    fn test_for_invocation_resolves_current_executable() {
        let launcher = NativeLauncher::for_invocation(&Invocation::new(["ignored"])).unwrap();

        assert_eq!(launcher.program(), std::env::current_exe().unwrap());
    }
}

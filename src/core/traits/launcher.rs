use std::process::ExitStatus;

/// Runs one child to completion.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher: std::fmt::Debug {
    fn launch(&self, index: u32) -> Result<(), ChildExecutionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChildExecutionError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
    #[error("exit status {0}")]
    Exited(i32),
    #[error("signal: {0}")]
    Signaled(i32),
    #[error("terminated abnormally")]
    Abnormal,
}

impl ChildExecutionError {
    pub fn check(status: ExitStatus) -> Result<(), Self> {
        if status.success() {
            return Ok(());
        }
        if let Some(code) = status.code() {
            return Err(Self::Exited(code));
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Err(Self::Signaled(signal));
            }
        }

        Err(Self::Abnormal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_descriptions() {
        let launch = ChildExecutionError::Launch {
            program: "/missing/relaunch".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(launch.to_string().starts_with("failed to launch /missing/relaunch: "));
        assert_eq!(ChildExecutionError::Exited(3).to_string(), "exit status 3");
        assert_eq!(ChildExecutionError::Signaled(9).to_string(), "signal: 9");
        assert_eq!(ChildExecutionError::Abnormal.to_string(), "terminated abnormally");
    }

    #[cfg(unix)]
    #[test]
    fn test_check_maps_wait_statuses() {
        use std::os::unix::process::ExitStatusExt;

        assert!(ChildExecutionError::check(ExitStatus::from_raw(0)).is_ok());
        assert!(matches!(
            ChildExecutionError::check(ExitStatus::from_raw(2 << 8)),
            Err(ChildExecutionError::Exited(2))
        ));
        assert!(matches!(
            ChildExecutionError::check(ExitStatus::from_raw(9)),
            Err(ChildExecutionError::Signaled(9))
        ));
    }
}

use std::ffi::{OsStr, OsString};

/// Arguments the process was started with, program name included.
#[derive(Clone, Debug)]
pub struct Invocation {
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    pub fn program(&self) -> Option<&OsStr> {
        self.args.first().map(OsString::as_os_str)
    }

    pub fn first_extra(&self) -> Option<&OsStr> {
        self.args.get(1).map(OsString::as_os_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Worker(i64),
    Dispatcher,
}

#[derive(Clone, Debug)]
pub struct ChildTask {
    pub index: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub state: ChildState,
}

impl ChildTask {
    pub fn new(index: u32) -> Self {
        let now = chrono::Utc::now();
        Self {
            index,
            created_at: now,
            updated_at: now,
            state: ChildState::default(),
        }
    }

    pub fn change_state(self, new_state: ChildState) -> Self {
        Self {
            state: new_state,
            updated_at: chrono::Utc::now(),
            ..self
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.updated_at - self.created_at).num_milliseconds()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChildState {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed {
        msg: String,
    },
}

/// Indices seen by one dispatch run, in launch order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub launched: Vec<u32>,
    pub failed: Vec<u32>,
}

impl DispatchSummary {
    pub fn record(&mut self, task: &ChildTask) {
        self.launched.push(task.index);
        if let ChildState::Failed { .. } = task.state {
            self.failed.push(task.index);
        }
    }
}

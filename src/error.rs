use std::path::PathBuf;

use crate::lock::LockError;

/// A task command refused to run against the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("there are no tasks")]
    NoTasks,
    #[error("no task with id {0}")]
    InvalidId(usize),
    #[error("no updates made")]
    NoUpdate,
    #[error("all tasks are already completed")]
    AlreadyComplete,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("configuration at {path} is not valid JSON: {source}")]
    ConfigCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize settings: {0}")]
    Serialize(serde_json::Error),
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error(transparent)]
    Task(#[from] TaskError),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized scheme in `{0}` (expected `https://` or `git@`)")]
    UnrecognizedScheme(String),

    #[error("invalid repo url `{0}`")]
    InvalidUrl(String),

    #[error("{0} is not set")]
    ConfigurationMissing(&'static str),

    #[error("directory {} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    CloneFailed(#[from] CloneFailure),
}

/// Why the external clone did not succeed.
#[derive(Debug, Error)]
pub enum CloneFailure {
    #[error("could not launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` {status}")]
    Exit { program: String, status: ExitStatus },
}

impl CloneFailure {
    /// Exit status reported by the subprocess, if it ran at all.
    pub fn status(&self) -> Option<ExitStatus> {
        match self {
            CloneFailure::Launch { .. } => None,
            CloneFailure::Exit { status, .. } => Some(*status),
        }
    }
}

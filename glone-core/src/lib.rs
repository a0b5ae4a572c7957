//! Resolve a git repository url to `$GOPATH/src/<host>/<owner>/<repo>` and
//! clone it there with the system `git`.

pub mod clone;
pub mod config;
pub mod error;
pub mod repo;
pub mod types;

pub use clone::{destination, Cloned, Cloner, CommandRunner, SystemRunner};
pub use config::{CloneConfig, GlobalConfig, Workspace};
pub use error::{CloneFailure, Error, Result};
pub use repo::parse;
pub use types::{RepoLocation, Scheme};

use std::{ffi::OsString, path::PathBuf};

use crate::{
    error::{Error, Result},
    types::RepoLocation,
};

/// Environment variable naming the workspace root.
pub const WORKSPACE_ROOT_VAR: &str = "GOPATH";

/// Directory under the workspace root that holds the `<host>/<owner>/<repo>` tree.
pub const SOURCE_DIR: &str = "src";

pub const DEFAULT_GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root taken from the value of `$GOPATH`, unset and empty are refused.
    pub fn from_value(value: Option<OsString>) -> Result<Self> {
        match value {
            Some(root) if !root.is_empty() => Ok(Self::new(root)),
            _ => Err(Error::ConfigurationMissing(WORKSPACE_ROOT_VAR)),
        }
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }
}

#[derive(Debug, Clone)]
pub struct CloneConfig {
    pub location: RepoLocation,
    pub workspace: Workspace,
    pub program: String,
}

impl CloneConfig {
    pub fn new(location: RepoLocation, workspace: Workspace) -> Self {
        Self {
            location,
            workspace,
            program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }
}

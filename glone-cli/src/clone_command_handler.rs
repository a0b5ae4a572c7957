use std::ffi::OsString;

use glone_core::{
    config::{CloneConfig, Workspace},
    error::Result,
    repo,
};

pub struct CloneCommandHandler {}

impl CloneCommandHandler {
    pub fn config(repo_url: &str, workspace_root: Option<OsString>) -> Result<CloneConfig> {
        // Fail fast -> a bad url is reported before the workspace is looked at
        let location = repo::parse(repo_url)?;
        let workspace = Workspace::from_value(workspace_root)?;

        Ok(CloneConfig::new(location, workspace))
    }
}

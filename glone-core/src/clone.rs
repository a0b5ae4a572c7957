use std::{
    ffi::OsString,
    io,
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

use log::debug;

use crate::{
    config::{CloneConfig, Workspace},
    error::{CloneFailure, Error, Result},
    types::RepoLocation,
};

/// Runs an external program to completion with the caller's stdio.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<ExitStatus>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
        (**self).run(program, args)
    }
}

/// Spawns real processes, forwarding stdout and stderr untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}

/// `<root>/src/<host>/<owner...>/<repo>`, refused if it is already there.
pub fn destination(workspace: &Workspace, location: &RepoLocation) -> Result<PathBuf> {
    let mut path = workspace.source_dir().join(&location.host);
    path.extend(location.owner_segments());
    path.push(&location.repo_name);

    if path.exists() {
        return Err(Error::AlreadyExists(path));
    }

    debug!("Destination for {} is {}", location, path.display());
    Ok(path)
}

// Cloned Repository on Local FileSystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cloned {
    pub location: RepoLocation,
    pub path: PathBuf,
}

pub struct Cloner<R: CommandRunner> {
    runner: R,
    config: CloneConfig,
}

impl<R: CommandRunner> Cloner<R> {
    pub fn with_config(runner: R, config: CloneConfig) -> Self {
        Self { runner, config }
    }

    /// Run `<program> clone <canonical url> <path>` and wait for it.
    pub fn clone_into(&mut self, location: &RepoLocation, path: PathBuf) -> Result<Cloned> {
        let program = &self.config.program;
        let args = [
            OsString::from("clone"),
            OsString::from(location.canonical_url()),
            path.clone().into_os_string(),
        ];
        debug!("Running {} {:?}", program, args);

        let status = self
            .runner
            .run(program, &args)
            .map_err(|source| CloneFailure::Launch {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CloneFailure::Exit {
                program: program.clone(),
                status,
            }
            .into());
        }

        Ok(Cloned {
            location: location.clone(),
            path,
        })
    }

    /// Place the configured repository in its workspace and clone it.
    pub fn run(&mut self) -> Result<Cloned> {
        let location = self.config.location.clone();
        let path = destination(&self.config.workspace, &location)?;
        self.clone_into(&location, path)
    }
}

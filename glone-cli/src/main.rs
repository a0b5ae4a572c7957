pub mod cli;
pub mod clone_command_handler;
pub mod global_option_handler;
pub mod printer;
pub mod utils;

use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use clap::ArgMatches;
use glone_core::{
    clone::{Cloner, CommandRunner, SystemRunner},
    config::WORKSPACE_ROOT_VAR,
};

use clone_command_handler::CloneCommandHandler;
use global_option_handler::GlobalOptionHandler;
use printer::Printer;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Help is informational, every other clap error is a usage failure.
fn exit_code_for(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn run<R, O, E>(
    matches: &ArgMatches,
    workspace_root: Option<OsString>,
    runner: R,
    printer: &mut Printer<O, E>,
) -> io::Result<u8>
where
    R: CommandRunner,
    O: Write,
    E: Write,
{
    if matches.get_flag("version") {
        printer.version()?;
        return Ok(EXIT_SUCCESS);
    }

    let Some(repo_url) = matches.get_one::<String>("repo_url") else {
        printer.usage()?;
        return Ok(EXIT_SUCCESS);
    };

    let clone_config = match CloneCommandHandler::config(repo_url, workspace_root) {
        Ok(clone_config) => clone_config,
        Err(err) => {
            printer.fatal(&err)?;
            return Ok(EXIT_FAILURE);
        }
    };

    match Cloner::with_config(runner, clone_config).run() {
        Ok(cloned) => {
            printer.cloned(&cloned)?;
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            printer.clone_failed(&err)?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let matches = match cli::cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(exit_code_for(&err));
        }
    };

    let global_config = GlobalOptionHandler::config(&matches);
    GlobalOptionHandler::init_logger(&global_config);
    let mut printer = Printer::stdio(global_config);

    match run(
        &matches,
        env::var_os(WORKSPACE_ROOT_VAR),
        SystemRunner,
        &mut printer,
    ) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use std::{path::Path, process::ExitStatus};

    use glone_core::config::GlobalConfig;
    use tempfile::TempDir;

    use super::*;
    use crate::utils::BIN_NAME;

    struct RecordingRunner {
        calls: Vec<Vec<OsString>>,
        code: i32,
    }

    impl RecordingRunner {
        fn exiting_with(code: i32) -> Self {
            Self {
                calls: Vec::new(),
                code,
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, _program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
            self.calls.push(args.to_vec());
            Ok(exit_with(self.code))
        }
    }

    #[cfg(unix)]
    fn exit_with(code: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }

    #[cfg(windows)]
    fn exit_with(code: i32) -> ExitStatus {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }

    struct Outcome {
        code: u8,
        out: String,
        err: String,
        calls: Vec<Vec<OsString>>,
    }

    fn glone(args: &[&str], workspace_root: Option<&Path>, exit_code: i32) -> Outcome {
        let matches = cli::cli()
            .try_get_matches_from(std::iter::once(BIN_NAME).chain(args.iter().copied()))
            .unwrap();
        let mut runner = RecordingRunner::exiting_with(exit_code);
        let mut printer = Printer::new(GlobalConfig { verbose: false }, Vec::new(), Vec::new());

        let code = run(
            &matches,
            workspace_root.map(|root| root.as_os_str().to_owned()),
            &mut runner,
            &mut printer,
        )
        .unwrap();

        Outcome {
            code,
            out: String::from_utf8(printer.out).unwrap(),
            err: String::from_utf8(printer.err).unwrap(),
            calls: runner.calls,
        }
    }

    #[test]
    fn no_url_prints_usage() {
        let outcome = glone(&[], None, 0);

        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert!(outcome.out.starts_with("usage: glone [OPTIONS...] <url>"));
        assert!(outcome.out.contains("EXAMPLES:"));
        assert!(outcome.calls.is_empty());
    }

    #[test]
    fn version_wins_over_the_url() {
        let outcome = glone(&["--version", "ftp://example.com/x"], None, 0);

        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert_eq!(outcome.out.trim_end(), utils::version());
        assert!(outcome.err.is_empty());
        assert!(outcome.calls.is_empty());
    }

    #[test]
    fn bad_url_is_fatal() {
        let root = TempDir::new().unwrap();
        let outcome = glone(&["ftp://example.com/x"], Some(root.path()), 0);

        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.err.contains("fatal:"));
        assert!(outcome.err.contains("ftp://example.com/x"));
        assert!(outcome.calls.is_empty());
    }

    #[test]
    fn unset_workspace_is_fatal() {
        let outcome = glone(&["git@github.com:rajiv/glone.git"], None, 0);

        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.err.contains("fatal:"));
        assert!(outcome.err.contains("GOPATH is not set"));
        assert!(outcome.calls.is_empty());
    }

    #[test]
    fn failing_git_exits_non_zero() {
        let root = TempDir::new().unwrap();
        let outcome = glone(&["https://github.com/rajiv/glone.git"], Some(root.path()), 128);

        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.err.contains("ERROR: failed to clone:"));
        assert_eq!(outcome.calls.len(), 1);
    }

    #[test]
    fn existing_destination_exits_non_zero_without_git() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("src/github.com/rajiv/glone")).unwrap();

        let outcome = glone(&["git@github.com:rajiv/glone.git"], Some(root.path()), 0);

        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.err.contains("ERROR: failed to clone:"));
        assert!(outcome.err.contains("already exists"));
        assert!(outcome.calls.is_empty());
    }

    #[test]
    fn successful_clone_is_silent() {
        let root = TempDir::new().unwrap();
        let outcome = glone(&["git@github.com:rajiv/glone.git"], Some(root.path()), 0);

        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert!(outcome.out.is_empty());
        assert!(outcome.err.is_empty());
        assert_eq!(
            outcome.calls,
            vec![vec![
                OsString::from("clone"),
                OsString::from("git@github.com:rajiv/glone.git"),
                root.path()
                    .join("src/github.com/rajiv/glone")
                    .into_os_string(),
            ]]
        );
    }

    #[test]
    fn flag_errors_exit_one_and_help_exits_zero() {
        let err = cli::cli()
            .try_get_matches_from([BIN_NAME, "--depth", "1"])
            .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);

        let help = cli::cli()
            .try_get_matches_from([BIN_NAME, "--help"])
            .unwrap_err();
        assert_eq!(exit_code_for(&help), EXIT_SUCCESS);
    }
}

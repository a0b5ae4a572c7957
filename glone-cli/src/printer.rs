use std::io::{self, Stderr, Stdout, Write};

use colored::Colorize;
use glone_core::{clone::Cloned, config::GlobalConfig, error::Error};

use crate::{cli::cli, utils::version};

pub struct Printer<O: Write, E: Write> {
    global_config: GlobalConfig,
    pub out: O,
    pub err: E,
}

impl Printer<Stdout, Stderr> {
    pub fn stdio(global_config: GlobalConfig) -> Self {
        Self::new(global_config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Printer<O, E> {
    pub fn new(global_config: GlobalConfig, out: O, err: E) -> Self {
        Self {
            global_config,
            out,
            err,
        }
    }

    pub fn version(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", version())
    }

    pub fn usage(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", cli().render_help())
    }

    pub fn fatal(&mut self, err: &Error) -> io::Result<()> {
        writeln!(self.err, "{} {}", "fatal:".red().bold(), err)
    }

    pub fn clone_failed(&mut self, err: &Error) -> io::Result<()> {
        writeln!(self.err, "{} {}", "ERROR: failed to clone:".red(), err)
    }

    // git already reported progress, only speak up when asked
    pub fn cloned(&mut self, cloned: &Cloned) -> io::Result<()> {
        if !self.global_config.verbose {
            return Ok(());
        }
        let path = cloned.path.display().to_string();
        writeln!(
            self.err,
            "{} {}",
            cloned.location.to_string().blue(),
            path.green()
        )
    }
}

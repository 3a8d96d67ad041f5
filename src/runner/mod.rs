//!
//! The external command runner.
//!

pub mod output;

use std::process::Command;
use std::process::Stdio;
use std::time::Instant;

use crate::error::Error;

use self::output::Output;

///
/// The external command runner.
///
/// Runs the command to completion and captures its output. A non-zero exit status is not
/// an error, only the failure to launch the process is.
///
pub trait ICommandRunner {
    ///
    /// Runs `program` with `arguments` and waits for it to exit.
    ///
    fn run(&self, program: &str, arguments: &[String]) -> Result<Output, Error>;
}

///
/// The runner spawning real child processes.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ICommandRunner for SystemRunner {
    fn run(&self, program: &str, arguments: &[String]) -> Result<Output, Error> {
        let mut command = Command::new(program);
        command.args(arguments);
        command.stdin(Stdio::null());

        let started = Instant::now();
        let output = command.output().map_err(|error| Error::Spawn {
            program: program.to_owned(),
            error,
        })?;
        log::debug!("`{}` exited in {:?}", program, started.elapsed());

        Ok(Output::from(output))
    }
}

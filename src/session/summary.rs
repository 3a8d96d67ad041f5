//!
//! The verification session summary.
//!

use std::path::PathBuf;

use colored::Colorize;

use crate::verifier::report::Report;

///
/// The verification session summary.
///
#[derive(Debug, Default, Clone)]
pub struct Summary {
    /// The number of located artifacts.
    pub located: usize,
    /// The number of contracts the verifier accepted.
    pub succeeded: usize,
    /// The number of contracts the verifier exited with a non-zero code for.
    pub rejected: usize,
    /// The artifacts which could not be processed, with the error messages.
    pub failures: Vec<(PathBuf, String)>,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(located: usize) -> Self {
        Self {
            located,
            ..Default::default()
        }
    }

    ///
    /// Counts the finished verifier run.
    ///
    pub fn push_report(&mut self, report: &Report) {
        if report.output.is_success() {
            self.succeeded += 1;
        } else {
            self.rejected += 1;
        }
    }

    ///
    /// Records the artifact processing failure.
    ///
    pub fn push_failure(&mut self, path: PathBuf, message: String) {
        self.failures.push((path, message));
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = if self.failures.is_empty() && self.rejected == 0 {
            "SUMMARY".green()
        } else {
            "SUMMARY".bright_red()
        };
        write!(
            f,
            "[{}] {} located, {} verified, {} rejected, {} failed",
            tag,
            self.located,
            self.succeeded,
            self.rejected,
            self.failures.len()
        )
    }
}

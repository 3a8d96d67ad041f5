//!
//! The external command output.
//!

///
/// The external command output.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    /// The exit code. `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl Output {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    ///
    /// Whether the process exited with the zero code.
    ///
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self::new(
            output.status.code(),
            String::from_utf8_lossy(output.stdout.as_slice()).to_string(),
            String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
        )
    }
}

//!
//! The single contract verification report.
//!

use crate::runner::output::Output;

///
/// The single contract verification report.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The contract name.
    pub name: String,
    /// The deployed contract address.
    pub address: String,
    /// The verifier output.
    pub output: Output,
}

impl Report {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, address: String, output: Output) -> Self {
        Self {
            name,
            address,
            output,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Verifying contract {} ({})", self.name, self.address)?;
        match self.output.exit_code {
            Some(code) => writeln!(f, "Result: {}", code)?,
            None => writeln!(f, "Result: terminated by signal")?,
        }
        write!(f, "{}", self.output.stdout)?;
        if !self.output.stdout.is_empty() && !self.output.stdout.ends_with('\n') {
            writeln!(f)?;
        }
        write!(f, "{}", self.output.stderr)
    }
}

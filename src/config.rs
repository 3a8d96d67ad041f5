//!
//! The deployment verifier configuration.
//!

use std::path::PathBuf;

use crate::arguments_file::style::Style as ArgumentsStyle;

/// The default deployments directory, relative to the working directory.
pub const DEFAULT_DEPLOYMENTS_DIRECTORY: &str = "./deployments";

/// The default constructor arguments file path.
pub const DEFAULT_ARGUMENTS_PATH: &str = "arguments.js";

/// The default verifier command prefix.
pub const DEFAULT_VERIFIER_COMMAND: [&str; 2] = ["npx", "hardhat"];

///
/// The deployment verifier configuration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The directory containing one subdirectory of artifacts per network.
    pub deployments_directory: PathBuf,
    /// The constructor arguments file, overwritten for each contract.
    pub arguments_path: PathBuf,
    /// The constructor arguments rendering style.
    pub arguments_style: ArgumentsStyle,
    /// The verifier executable followed by its leading arguments.
    pub verifier_command: Vec<String>,
}

impl Config {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        deployments_directory: PathBuf,
        arguments_path: PathBuf,
        arguments_style: ArgumentsStyle,
        verifier_command: Vec<String>,
    ) -> Self {
        Self {
            deployments_directory,
            arguments_path,
            arguments_style,
            verifier_command,
        }
    }

    ///
    /// Splits a whitespace-separated command line, e.g. `npx hardhat`.
    ///
    /// Returns `None` if the command line is blank.
    ///
    pub fn parse_verifier_command(command: &str) -> Option<Vec<String>> {
        let command: Vec<String> = command.split_whitespace().map(str::to_owned).collect();
        if command.is_empty() {
            None
        } else {
            Some(command)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_DEPLOYMENTS_DIRECTORY),
            PathBuf::from(DEFAULT_ARGUMENTS_PATH),
            ArgumentsStyle::default(),
            DEFAULT_VERIFIER_COMMAND
                .iter()
                .map(|part| part.to_string())
                .collect(),
        )
    }
}

//!
//! The network verification session.
//!

pub mod summary;

use colored::Colorize;

use crate::arguments_file::ArgumentsFile;
use crate::config::Config;
use crate::error::Error;
use crate::locator::Locator;
use crate::runner::ICommandRunner;
use crate::verifier::Verifier;

use self::summary::Summary;

///
/// The network verification session.
///
/// Verifies all contracts deployed to the network one by one. A contract failure is
/// reported and does not stop the session.
///
#[derive(Debug)]
pub struct Session<R: ICommandRunner> {
    /// The network name.
    network: String,
    /// The artifact locator.
    locator: Locator,
    /// The single contract verifier.
    verifier: Verifier<R>,
}

impl<R: ICommandRunner> Session<R> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(network: String, config: Config, runner: R) -> Self {
        let locator = Locator::new(config.deployments_directory);
        let verifier = Verifier::new(
            network.clone(),
            ArgumentsFile::new(config.arguments_path, config.arguments_style),
            config.verifier_command,
            runner,
        );

        Self {
            network,
            locator,
            verifier,
        }
    }

    ///
    /// The single contract verifier.
    ///
    pub fn verifier(&self) -> &Verifier<R> {
        &self.verifier
    }

    ///
    /// Verifies all contracts deployed to the network.
    ///
    /// Only fails if the network artifacts cannot be listed.
    ///
    pub fn run(&self) -> Result<Summary, Error> {
        println!("Verifying for network {}", self.network);

        let paths = self.locator.contract_file_paths(self.network.as_str())?;
        let mut summary = Summary::new(paths.len());

        for path in paths.into_iter() {
            match self.verifier.verify(path.as_path()) {
                Ok(report) => {
                    let text = report.to_string();
                    if text.ends_with('\n') {
                        print!("{}", text);
                    } else {
                        println!("{}", text);
                    }
                    summary.push_report(&report);
                }
                Err(error) => {
                    println!(
                        "[{}] Failed to verify contract in path '{}': {}",
                        "FAILED".bright_red(),
                        path.display(),
                        error
                    );
                    summary.push_failure(path, error.to_string());
                }
            }
        }

        Ok(summary)
    }
}

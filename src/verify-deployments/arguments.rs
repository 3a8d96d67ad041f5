//!
//! The deployment verifier arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// Verifies every contract deployed to the network with `hardhat verify`.
///
/// Reads the `hardhat-deploy` artifacts from the network deployments directory, writes the
/// constructor arguments of each contract to the arguments file, and runs the verifier once
/// per contract. A failed contract does not stop the run.
///
/// Example: verify-deployments -n rinkeby
///
#[derive(Debug, StructOpt)]
#[structopt(name = "verify-deployments")]
pub struct Arguments {
    /// The network name, e.g. `rinkeby`.
    #[structopt(short = "n", long = "network")]
    pub network: Option<String>,

    /// The directory containing one subdirectory of artifacts per network.
    #[structopt(
        long = "deployments-dir",
        parse(from_os_str),
        default_value = "./deployments"
    )]
    pub deployments_directory: PathBuf,

    /// The constructor arguments file, overwritten for each contract.
    #[structopt(
        long = "arguments-path",
        parse(from_os_str),
        default_value = "arguments.js"
    )]
    pub arguments_path: PathBuf,

    /// The verifier command prefix. The `--network ... verify ...` arguments are appended.
    #[structopt(long = "verifier", default_value = "npx hardhat")]
    pub verifier: String,

    /// Write the constructor arguments as JSON instead of Python literals.
    #[structopt(long = "json-arguments")]
    pub json_arguments: bool,

    /// Enable the debug logging.
    #[structopt(short = "v", long = "verbose")]
    pub verbose: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Validates the arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.network.as_deref() {
            Some(network) if !network.trim().is_empty() => {}
            _ => anyhow::bail!(
                "Network name was not passed, usage example: verify-deployments -n rinkeby"
            ),
        }

        if deployment_verifier::Config::parse_verifier_command(self.verifier.as_str()).is_none()
        {
            anyhow::bail!("The verifier command must not be empty: --verifier.");
        }

        Ok(())
    }

    ///
    /// Splits the arguments into the network name and the library configuration.
    ///
    pub fn try_into_config(self) -> anyhow::Result<(String, deployment_verifier::Config)> {
        self.validate()?;

        let network = self
            .network
            .ok_or_else(|| anyhow::anyhow!("Network name was not passed"))?;
        let verifier_command =
            deployment_verifier::Config::parse_verifier_command(self.verifier.as_str())
                .ok_or_else(|| anyhow::anyhow!("The verifier command is empty"))?;
        let arguments_style = if self.json_arguments {
            deployment_verifier::ArgumentsStyle::Json
        } else {
            deployment_verifier::ArgumentsStyle::Python
        };

        let config = deployment_verifier::Config::new(
            self.deployments_directory,
            self.arguments_path,
            arguments_style,
            verifier_command,
        );

        Ok((network, config))
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}

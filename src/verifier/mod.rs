//!
//! The single contract verifier.
//!

pub mod invocation;
pub mod report;

use std::path::Path;

use crate::arguments_file::ArgumentsFile;
use crate::artifact::Artifact;
use crate::error::Error;
use crate::runner::ICommandRunner;

use self::invocation::Invocation;
use self::report::Report;

///
/// The single contract verifier.
///
#[derive(Debug)]
pub struct Verifier<R: ICommandRunner> {
    /// The network name.
    network: String,
    /// The constructor arguments file shared by all contracts.
    arguments_file: ArgumentsFile,
    /// The verifier executable followed by its leading arguments.
    verifier_command: Vec<String>,
    /// The command runner.
    runner: R,
}

impl<R: ICommandRunner> Verifier<R> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        network: String,
        arguments_file: ArgumentsFile,
        verifier_command: Vec<String>,
        runner: R,
    ) -> Self {
        Self {
            network,
            arguments_file,
            verifier_command,
            runner,
        }
    }

    ///
    /// The command runner.
    ///
    pub fn runner(&self) -> &R {
        &self.runner
    }

    ///
    /// Verifies the contract described by the artifact at `path`.
    ///
    /// The artifact must have the `address` and `metadata` fields. Missing constructor
    /// arguments are passed as an empty list.
    ///
    pub fn verify(&self, path: &Path) -> Result<Report, Error> {
        let artifact = Artifact::try_from_path(path)?;
        let address = artifact.address()?;

        let no_arguments = serde_json::Value::Array(Vec::new());
        let arguments = artifact.args().unwrap_or_else(|| {
            log::warn!(
                "Artifact {:?} has no constructor arguments, passing an empty list",
                path
            );
            &no_arguments
        });

        let metadata = artifact.metadata()?;
        let (location, name) = metadata.settings.compilation_target.first()?;

        let invocation = Invocation::new(
            self.network.as_str(),
            location,
            name,
            self.arguments_file.path(),
            address,
        );
        self.arguments_file.write(arguments)?;

        let (program, leading_arguments) =
            self.verifier_command.split_first().ok_or_else(|| Error::Spawn {
                program: String::new(),
                error: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "the verifier command is empty",
                ),
            })?;
        let mut command_arguments = leading_arguments.to_vec();
        command_arguments.extend(invocation.arguments());
        log::debug!("Running `{} {}`", program, command_arguments.join(" "));

        let output = self.runner.run(program.as_str(), command_arguments.as_slice())?;

        Ok(Report::new(name.to_owned(), address.to_owned(), output))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Verifier;
    use crate::arguments_file::style::Style;
    use crate::arguments_file::ArgumentsFile;
    use crate::error::Error;
    use crate::runner::output::Output;
    use crate::tests::Deployments;
    use crate::tests::RecordingRunner;

    fn verifier(deployments: &Deployments, runner: RecordingRunner) -> Verifier<RecordingRunner> {
        Verifier::new(
            "rinkeby".to_owned(),
            ArgumentsFile::new(deployments.arguments_path(), Style::Python),
            vec!["npx".to_owned(), "hardhat".to_owned()],
            runner,
        )
    }

    #[test]
    fn ok_runs_hardhat_verify() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact(
            "Bridge.json",
            Some("0xB1"),
            Some(json!([1, "0xabc", true])),
            &[("contracts/Bridge.sol", "Bridge")],
        );
        let verifier = verifier(&deployments, RecordingRunner::default());

        let report = verifier.verify(path.as_path()).expect("Always valid");

        assert_eq!(report.name, "Bridge");
        assert_eq!(report.address, "0xB1");
        assert!(report.output.is_success());

        let calls = verifier.runner().calls();
        assert_eq!(calls.len(), 1);
        let (program, arguments) = &calls[0];
        assert_eq!(program, "npx");
        assert_eq!(
            arguments,
            &vec![
                "hardhat".to_owned(),
                "--network".to_owned(),
                "rinkeby".to_owned(),
                "verify".to_owned(),
                "--contract".to_owned(),
                "contracts/Bridge.sol:Bridge".to_owned(),
                "--constructor-args".to_owned(),
                deployments.arguments_path().to_string_lossy().to_string(),
                "0xB1".to_owned(),
            ]
        );
        assert_eq!(
            deployments.arguments_text(),
            "module.exports = [1, '0xabc', True]\n"
        );
    }

    #[test]
    fn ok_nonzero_exit_is_reported() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact(
            "Bridge.json",
            Some("0xB1"),
            Some(json!([])),
            &[("contracts/Bridge.sol", "Bridge")],
        );
        let runner = RecordingRunner::with_output(Output::new(
            Some(1),
            String::new(),
            "Already Verified\n".to_owned(),
        ));
        let verifier = verifier(&deployments, runner);

        let report = verifier.verify(path.as_path()).expect("Always valid");

        assert_eq!(report.output.exit_code, Some(1));
        assert_eq!(report.output.stderr, "Already Verified\n");
    }

    #[test]
    fn ok_missing_args_become_empty_list() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact(
            "Token.json",
            Some("0xT0"),
            None,
            &[("contracts/Token.sol", "Token")],
        );
        let verifier = verifier(&deployments, RecordingRunner::default());

        verifier.verify(path.as_path()).expect("Always valid");

        assert_eq!(deployments.arguments_text(), "module.exports = []\n");
    }

    #[test]
    fn error_empty_compilation_target() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact("Bridge.json", Some("0xB1"), Some(json!([])), &[]);
        let verifier = verifier(&deployments, RecordingRunner::default());

        let result = verifier.verify(path.as_path());

        assert!(matches!(result, Err(Error::EmptyCompilationTarget)));
        assert!(verifier.runner().calls().is_empty());
    }

    #[test]
    fn error_missing_address() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact(
            "Bridge.json",
            None,
            Some(json!([])),
            &[("contracts/Bridge.sol", "Bridge")],
        );
        let verifier = verifier(&deployments, RecordingRunner::default());

        let result = verifier.verify(path.as_path());

        assert!(matches!(result, Err(Error::MissingField("address"))));
        assert!(verifier.runner().calls().is_empty());
    }

    #[test]
    fn error_spawn_failure() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact(
            "Bridge.json",
            Some("0xB1"),
            Some(json!([])),
            &[("contracts/Bridge.sol", "Bridge")],
        );
        let verifier = verifier(&deployments, RecordingRunner::failing());

        let result = verifier.verify(path.as_path());

        assert!(matches!(result, Err(Error::Spawn { .. })));
    }

    #[test]
    fn error_empty_verifier_command() {
        let deployments = Deployments::new("rinkeby");
        let path = deployments.write_artifact(
            "Bridge.json",
            Some("0xB1"),
            Some(json!([])),
            &[("contracts/Bridge.sol", "Bridge")],
        );
        let verifier = Verifier::new(
            "rinkeby".to_owned(),
            ArgumentsFile::new(deployments.arguments_path(), Style::Python),
            Vec::new(),
            RecordingRunner::default(),
        );

        let result = verifier.verify(path.as_path());

        assert!(matches!(result, Err(Error::Spawn { .. })));
    }
}

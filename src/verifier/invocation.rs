//!
//! The verifier invocation.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The verifier invocation for a single deployed contract.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The network name.
    pub network: String,
    /// The `<location>:<name>` contract identifier.
    pub contract: String,
    /// The constructor arguments file path.
    pub arguments_path: PathBuf,
    /// The deployed contract address.
    pub address: String,
}

impl Invocation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        network: &str,
        location: &str,
        name: &str,
        arguments_path: &Path,
        address: &str,
    ) -> Self {
        Self {
            network: network.to_owned(),
            contract: Self::contract_flag(location, name),
            arguments_path: arguments_path.to_owned(),
            address: address.to_owned(),
        }
    }

    ///
    /// Joins the source file path and the contract name, e.g. `contracts/Foo.sol:Foo`.
    ///
    pub fn contract_flag(location: &str, name: &str) -> String {
        format!("{}:{}", location, name)
    }

    ///
    /// The arguments appended to the verifier command prefix.
    ///
    pub fn arguments(&self) -> Vec<String> {
        vec![
            "--network".to_owned(),
            self.network.clone(),
            "verify".to_owned(),
            "--contract".to_owned(),
            self.contract.clone(),
            "--constructor-args".to_owned(),
            self.arguments_path.to_string_lossy().to_string(),
            self.address.clone(),
        ]
    }
}

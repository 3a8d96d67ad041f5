//!
//! The `hardhat-deploy` deployment artifact.
//!

pub mod metadata;

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

use self::metadata::Metadata;

///
/// The `hardhat-deploy` deployment artifact.
///
/// Only the fields required for verification are read, and all of them may be absent.
///
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Artifact {
    /// The deployed contract address.
    #[serde(default)]
    address: Option<String>,
    /// The constructor arguments.
    #[serde(default)]
    args: Option<serde_json::Value>,
    /// The compiler metadata, encoded as a JSON string.
    #[serde(default)]
    metadata: Option<String>,
}

impl Artifact {
    ///
    /// Reads and parses the artifact file.
    ///
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::try_from_str(text.as_str())
    }

    ///
    /// Parses the artifact JSON.
    ///
    pub fn try_from_str(text: &str) -> Result<Self, Error> {
        let artifact = serde_json::from_str(text)?;
        Ok(artifact)
    }

    ///
    /// The deployed contract address.
    ///
    pub fn address(&self) -> Result<&str, Error> {
        self.address
            .as_deref()
            .ok_or(Error::MissingField("address"))
    }

    ///
    /// The constructor arguments, if present.
    ///
    /// An explicit JSON `null` is treated as absent.
    ///
    pub fn args(&self) -> Option<&serde_json::Value> {
        self.args.as_ref().filter(|args| !args.is_null())
    }

    ///
    /// Decodes the double-encoded compiler metadata.
    ///
    pub fn metadata(&self) -> Result<Metadata, Error> {
        let metadata = self
            .metadata
            .as_deref()
            .ok_or(Error::MissingField("metadata"))?;
        Metadata::try_from_str(metadata)
    }
}

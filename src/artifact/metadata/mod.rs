//!
//! The compiler metadata embedded into the deployment artifact.
//!

pub mod settings;

use serde::Deserialize;

use crate::error::Error;

use self::settings::Settings;

///
/// The compiler metadata embedded into the deployment artifact.
///
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Metadata {
    /// The compiler settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Metadata {
    ///
    /// Parses the metadata string, which is a JSON document on its own.
    ///
    pub fn try_from_str(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(Error::Metadata)
    }
}

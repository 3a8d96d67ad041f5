//!
//! The deployment artifact locator.
//!

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::error::Error;

/// The deployment artifact file extension.
pub const EXTENSION_ARTIFACT: &str = ".json";

///
/// The deployment artifact locator.
///
#[derive(Debug, Clone)]
pub struct Locator {
    /// The directory containing one subdirectory per network.
    deployments_directory: PathBuf,
}

impl Locator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(deployments_directory: PathBuf) -> Self {
        Self {
            deployments_directory,
        }
    }

    ///
    /// Returns the artifact directory of the `network`.
    ///
    pub fn network_directory(&self, network: &str) -> PathBuf {
        self.deployments_directory.join(network)
    }

    ///
    /// Returns the paths of all `*.json` entries directly under the `network` directory.
    ///
    /// The paths are sorted, so that repeated runs process contracts in the same order.
    ///
    pub fn contract_file_paths(&self, network: &str) -> Result<Vec<PathBuf>, Error> {
        let directory = self.network_directory(network);
        log::debug!("Listing deployment artifacts in {:?}", directory);

        let listing_error = |error: std::io::Error| Error::Listing {
            directory: directory.clone(),
            error,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(directory.as_path()).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            if Self::is_artifact(&entry.file_name()) {
                paths.push(entry.path());
            }
        }
        paths.sort();

        Ok(paths)
    }

    ///
    /// Checks whether the file name has the artifact extension.
    ///
    #[cfg(unix)]
    fn is_artifact(file_name: &OsStr) -> bool {
        use std::os::unix::ffi::OsStrExt;

        file_name.as_bytes().ends_with(EXTENSION_ARTIFACT.as_bytes())
    }

    ///
    /// Checks whether the file name has the artifact extension.
    ///
    #[cfg(not(unix))]
    fn is_artifact(file_name: &OsStr) -> bool {
        file_name.to_string_lossy().ends_with(EXTENSION_ARTIFACT)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::Locator;
    use crate::error::Error;

    #[test]
    fn ok_filters_by_suffix() {
        let deployments = crate::tests::Deployments::new("rinkeby");
        deployments.write_raw("Bridge.json", "{}");
        deployments.write_raw("Federation.json", "{}");
        deployments.write_raw(".chainId", "4");
        deployments.write_raw("notes.json.bak", "");
        deployments.create_directory("solcInputs");

        let locator = Locator::new(deployments.root());
        let names: BTreeSet<String> = locator
            .contract_file_paths("rinkeby")
            .expect("Always valid")
            .into_iter()
            .map(|path| {
                path.file_name()
                    .expect("Always exists")
                    .to_string_lossy()
                    .to_string()
            })
            .collect();

        let expected: BTreeSet<String> = ["Bridge.json", "Federation.json"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn ok_paths_are_under_network_directory() {
        let deployments = crate::tests::Deployments::new("kovan");
        deployments.write_raw("Bridge.json", "{}");

        let locator = Locator::new(deployments.root());
        let paths = locator.contract_file_paths("kovan").expect("Always valid");

        assert_eq!(paths, vec![deployments.root().join("kovan").join("Bridge.json")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn ok_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let deployments = crate::tests::Deployments::new("kovan");
        let name = OsStr::from_bytes(b"Br\xffdge.json");
        std::fs::write(deployments.root().join("kovan").join(name), "{}")
            .expect("Always valid");
        deployments.write_raw("Bridge.txt", "");

        let locator = Locator::new(deployments.root());
        let paths = locator.contract_file_paths("kovan").expect("Always valid");

        assert_eq!(paths, vec![deployments.root().join("kovan").join(name)]);
    }

    #[test]
    fn ok_empty_directory() {
        let deployments = crate::tests::Deployments::new("kovan");

        let locator = Locator::new(deployments.root());
        let paths = locator.contract_file_paths("kovan").expect("Always valid");

        assert!(paths.is_empty());
    }

    #[test]
    fn error_missing_network_directory() {
        let deployments = crate::tests::Deployments::new("kovan");

        let locator = Locator::new(deployments.root());
        let result = locator.contract_file_paths("mainnet");

        assert!(matches!(result, Err(Error::Listing { .. })));
    }
}

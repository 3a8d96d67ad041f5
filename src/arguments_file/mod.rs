//!
//! The constructor arguments file passed to the verifier.
//!

pub mod python_literal;
pub mod style;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

use self::style::Style;

///
/// The constructor arguments file passed to the verifier.
///
/// The same file is overwritten for every contract, so the verifier must finish reading it
/// before the next contract is processed.
///
#[derive(Debug, Clone)]
pub struct ArgumentsFile {
    /// The file path.
    path: PathBuf,
    /// The rendering style.
    style: Style,
}

impl ArgumentsFile {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, style: Style) -> Self {
        Self { path, style }
    }

    ///
    /// The file path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Renders the module text, e.g. `module.exports = [1, '0xabc', True]`.
    ///
    pub fn render(&self, arguments: &serde_json::Value) -> String {
        format!("module.exports = {}\n", self.style.render(arguments))
    }

    ///
    /// Overwrites the file with the rendered `arguments`.
    ///
    pub fn write(&self, arguments: &serde_json::Value) -> Result<(), Error> {
        let text = self.render(arguments);
        File::create(&self.path)
            .and_then(|mut file| file.write_all(text.as_bytes()))
            .map_err(|error| Error::ArgumentsFile {
                path: self.path.clone(),
                error,
            })
    }
}

//!
//! The compiler metadata settings.
//!

use serde::Deserialize;

use crate::error::Error;

///
/// The compiler metadata settings.
///
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The source file to contract name mapping.
    #[serde(default)]
    pub compilation_target: CompilationTarget,
}

///
/// The `settings.compilationTarget` mapping, kept in the document order.
///
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct CompilationTarget(serde_json::Map<String, serde_json::Value>);

impl CompilationTarget {
    ///
    /// Returns the first source file path and contract name pair.
    ///
    /// `solc` always emits exactly one entry. If there are more, the first one in the
    /// document order is used.
    ///
    pub fn first(&self) -> Result<(&str, &str), Error> {
        if self.0.len() > 1 {
            log::warn!(
                "Found {} compilation targets, using the first one",
                self.0.len()
            );
        }

        let (location, name) = self.0.iter().next().ok_or(Error::EmptyCompilationTarget)?;
        let name = name
            .as_str()
            .ok_or_else(|| Error::invalid_field("settings.compilationTarget", "a string map"))?;

        Ok((location.as_str(), name))
    }

    ///
    /// Whether the mapping has no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::error::Error;

    fn settings(json: &str) -> Settings {
        serde_json::from_str(json).expect("Always valid")
    }

    #[test]
    fn ok_single_target() {
        let settings = settings(r#"{ "compilationTarget": { "contracts/Foo.sol": "Foo" } }"#);

        assert_eq!(
            settings.compilation_target.first().expect("Always exists"),
            ("contracts/Foo.sol", "Foo")
        );
    }

    #[test]
    fn ok_multiple_targets_document_order() {
        let settings = settings(
            r#"{ "compilationTarget": { "contracts/Zeta.sol": "Zeta", "contracts/Alpha.sol": "Alpha" } }"#,
        );

        assert_eq!(
            settings.compilation_target.first().expect("Always exists"),
            ("contracts/Zeta.sol", "Zeta")
        );
    }

    #[test]
    fn error_empty_target() {
        let settings = settings(r#"{ "compilationTarget": {} }"#);

        assert!(matches!(
            settings.compilation_target.first(),
            Err(Error::EmptyCompilationTarget)
        ));
    }

    #[test]
    fn error_absent_target() {
        let settings = settings(r#"{ "optimizer": { "enabled": true } }"#);

        assert!(matches!(
            settings.compilation_target.first(),
            Err(Error::EmptyCompilationTarget)
        ));
    }

    #[test]
    fn error_non_string_name() {
        let settings = settings(r#"{ "compilationTarget": { "contracts/Foo.sol": 42 } }"#);

        assert!(matches!(
            settings.compilation_target.first(),
            Err(Error::InvalidField { .. })
        ));
    }
}

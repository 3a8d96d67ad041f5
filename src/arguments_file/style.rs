//!
//! The constructor arguments rendering style.
//!

///
/// The constructor arguments rendering style.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Python literals, e.g. `[1, '0xabc', True]`. Compatible with the legacy `verify.py`.
    Python,
    /// Compact JSON, e.g. `[1,"0xabc",true]`. Always valid JavaScript.
    Json,
}

impl Style {
    ///
    /// Renders the value in the style.
    ///
    pub fn render(self, value: &serde_json::Value) -> String {
        match self {
            Self::Python => super::python_literal::render(value),
            Self::Json => value.to_string(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::Python
    }
}

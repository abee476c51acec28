//! Transform options for the Plasmatic JSX compiler

use oxc_span::SourceType;
use oxc_syntax::identifier::is_identifier_name;

use crate::check::is_valid_identifier;
use crate::error::OptionsError;

/// Configuration options for the JSX transform
pub struct TransformOptions<'a> {
    /// Top-level binding the runtime methods are called on
    pub namespace: &'a str,

    /// Runtime method building a component node
    pub component_method: &'a str,

    /// Runtime method building a text node
    pub literal_method: &'a str,

    /// Source filename
    pub filename: &'a str,

    /// Source type (jsx, tsx, script or module)
    pub source_type: SourceType,

    /// Whether to generate source maps
    pub source_map: bool,
}

impl Default for TransformOptions<'_> {
    fn default() -> Self {
        Self::plasmatic_defaults()
    }
}

impl<'a> TransformOptions<'a> {
    pub fn plasmatic_defaults() -> Self {
        Self {
            namespace: "Plasmatic",
            component_method: "createComponent",
            literal_method: "createLiteral",
            filename: "input.jsx",
            source_type: SourceType::jsx(),
            source_map: false,
        }
    }

    /// Check that the runtime call surface can be printed as plain member calls
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_valid_identifier(self.namespace) {
            return Err(OptionsError::InvalidNamespace(self.namespace.to_string()));
        }
        for method in [self.component_method, self.literal_method] {
            if !is_identifier_name(method) {
                return Err(OptionsError::InvalidMethod(method.to_string()));
            }
        }
        Ok(())
    }
}

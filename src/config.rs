//! Owned, deserializable transform configuration
//!
//! This is the layer config files and the JS binding talk to. Every field is
//! optional and falls back to the Plasmatic defaults.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_span::SourceType;
use serde::Deserialize;

use common::TransformOptions;

use crate::TransformError;

#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformConfig {
    /// Top-level binding the runtime methods are called on
    /// @default "Plasmatic"
    pub namespace: Option<String>,

    /// @default "createComponent"
    pub component_method: Option<String>,

    /// @default "createLiteral"
    pub literal_method: Option<String>,

    /// Source filename, also decides the source type
    /// @default "input.jsx"
    pub filename: Option<String>,

    /// Whether to generate source maps
    /// @default false
    pub source_map: Option<bool>,
}

impl TransformConfig {
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Borrow the config as transform options
    pub fn to_options(&self) -> TransformOptions<'_> {
        let defaults = TransformOptions::plasmatic_defaults();
        let filename = self.filename.as_deref().unwrap_or(defaults.filename);

        TransformOptions {
            namespace: self.namespace.as_deref().unwrap_or(defaults.namespace),
            component_method: self
                .component_method
                .as_deref()
                .unwrap_or(defaults.component_method),
            literal_method: self
                .literal_method
                .as_deref()
                .unwrap_or(defaults.literal_method),
            filename,
            source_type: SourceType::from_path(filename).unwrap_or(defaults.source_type),
            source_map: self.source_map.unwrap_or(defaults.source_map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TransformConfig::from_json("{}").unwrap();
        let options = config.to_options();
        assert_eq!(options.namespace, "Plasmatic");
        assert_eq!(options.component_method, "createComponent");
        assert_eq!(options.literal_method, "createLiteral");
        assert_eq!(options.filename, "input.jsx");
        assert!(!options.source_map);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = TransformConfig::from_json(
            r#"{ "namespace": "UI", "componentMethod": "h", "literalMethod": "text", "sourceMap": true }"#,
        )
        .unwrap();
        let options = config.to_options();
        assert_eq!(options.namespace, "UI");
        assert_eq!(options.component_method, "h");
        assert_eq!(options.literal_method, "text");
        assert!(options.source_map);
    }

    #[test]
    fn test_filename_decides_source_type() {
        let config = TransformConfig {
            filename: Some("view.tsx".to_string()),
            ..TransformConfig::default()
        };
        assert!(config.to_options().source_type.is_typescript());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TransformConfig::from_json(r#"{ "runtime": "dom" }"#).unwrap_err();
        assert!(matches!(err, TransformError::Config(_)));
    }
}

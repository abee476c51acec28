//! Plasmatic JSX OXC Compiler
//!
//! A Rust-based JSX compiler pass using OXC. Every JSX element becomes a
//! `Plasmatic.createComponent(...)` call and every non-blank text child a
//! `Plasmatic.createLiteral(...)` call.
//!
//! ## Usage
//!
//! ```rust
//! use plasmatic_jsx_oxc::{transform, TransformOptions};
//!
//! let source = r#"<div class="hello">{count()}</div>"#;
//! let result = transform(source, None).unwrap();
//! println!("{}", result.code);
//!
//! let options = TransformOptions {
//!     namespace: "UI",
//!     ..TransformOptions::plasmatic_defaults()
//! };
//! let result = transform(source, Some(options)).unwrap();
//! assert!(result.code.contains("UI.createComponent"));
//! ```

mod config;
mod error;

pub use common::{OptionsError, TransformOptions};
pub use config::TransformConfig;
pub use error::TransformError;

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, IndentChar};
use oxc_parser::Parser;
use oxc_span::Span;

use std::path::PathBuf;

use plasmatic::PlasmaticTransform;

/// Output of a transform
#[derive(Debug)]
pub struct TransformOutput {
    /// The transformed code
    pub code: String,
    /// Source map JSON (if enabled)
    pub map: Option<String>,
    /// Source spans of component calls carrying the `pretty` formatting hint
    pub pretty_calls: Vec<Span>,
}

/// Result of a transform operation
#[cfg(feature = "napi")]
#[napi(object)]
pub struct TransformResult {
    /// The transformed code
    pub code: String,
    /// Source map (if enabled)
    pub map: Option<String>,
}

/// Transform JSX source code
#[cfg(feature = "napi")]
#[napi]
pub fn transform_jsx(
    source: String,
    options: Option<TransformConfig>,
) -> napi::Result<TransformResult> {
    let config = options.unwrap_or_default();
    let options = config.to_options();

    let result = transform_internal(&source, &options)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;

    Ok(TransformResult {
        code: result.code,
        map: result.map,
    })
}

/// Transform JSX source code with the given options (defaults when `None`)
pub fn transform(
    source: &str,
    options: Option<TransformOptions>,
) -> Result<TransformOutput, TransformError> {
    let options = options.unwrap_or_else(TransformOptions::plasmatic_defaults);
    transform_internal(source, &options)
}

/// Transform JSX source code configured by a JSON document
pub fn transform_with_json_config(
    source: &str,
    config: &str,
) -> Result<TransformOutput, TransformError> {
    let config = TransformConfig::from_json(config)?;
    transform_internal(source, &config.to_options())
}

fn transform_internal(
    source: &str,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    options.validate()?;

    let allocator = Allocator::default();

    // Parse the source
    let parsed = Parser::new(&allocator, source, options.source_type).parse();
    if !parsed.errors.is_empty() {
        return Err(TransformError::Parse {
            filename: options.filename.to_string(),
            errors: parsed.errors.iter().map(ToString::to_string).collect(),
        });
    }
    let mut program = parsed.program;

    log::debug!("transforming {} ({} bytes)", options.filename, source.len());
    let pretty_calls = PlasmaticTransform::new(&allocator, options).transform(&mut program);

    // Generate code
    let generated = Codegen::new()
        .with_options(CodegenOptions {
            source_map_path: if options.source_map {
                Some(PathBuf::from(options.filename))
            } else {
                None
            },
            indent_width: 2,
            indent_char: IndentChar::Space,
            ..CodegenOptions::default()
        })
        .build(&program);

    Ok(TransformOutput {
        code: generated.code,
        map: generated.map.map(|map| map.to_json_string()),
        pretty_calls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_element() {
        let source = r#"<div class="hello">world</div>"#;
        let result = transform(source, None).unwrap();
        assert!(result.code.contains("Plasmatic.createComponent"));
    }

    #[test]
    fn test_component() {
        let source = r#"<Counter onClick={handler}>Click me</Counter>"#;
        let result = transform(source, None).unwrap();
        assert!(result.code.contains("Plasmatic.createComponent(Counter"));
    }

    #[test]
    fn test_source_map() {
        let options = TransformOptions {
            source_map: true,
            ..TransformOptions::plasmatic_defaults()
        };
        let result = transform("<div/>", Some(options)).unwrap();
        assert!(result.map.is_some());
    }

    #[test]
    fn test_invalid_namespace() {
        let options = TransformOptions {
            namespace: "not valid",
            ..TransformOptions::plasmatic_defaults()
        };
        let err = transform("<div/>", Some(options)).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Options(OptionsError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = transform("<div>", None).unwrap_err();
        match err {
            TransformError::Parse { filename, errors } => {
                assert_eq!(filename, "input.jsx");
                assert!(!errors.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_output_preview() {
        let cases = [
            (
                r#"<div class="hello">world</div>"#,
                "basic element",
                r#"Plasmatic.createLiteral("world ")"#,
            ),
            (
                r#"<div class={style()}>content</div>"#,
                "dynamic class",
                r#""class": style()"#,
            ),
            (
                r#"<Foo.Bar data-id="1" />"#,
                "member tag",
                r#"Plasmatic.createComponent(Foo.Bar, { "data-id": "1" })"#,
            ),
            (
                r#"<ul>{items.map(i => <li>{i}</li>)}</ul>"#,
                "nested in container",
                r#"Plasmatic.createComponent("li", null, i)"#,
            ),
            (
                "<p>\n  Hello\n  <b>world</b>\n</p>",
                "multi-line text",
                r#"Plasmatic.createLiteral("  Hello ")"#,
            ),
            (
                r#"<><a/><b/></>"#,
                "fragment",
                r#"[Plasmatic.createComponent("a", null), Plasmatic.createComponent("b", null)]"#,
            ),
        ];

        for (source, label, expected) in cases {
            let result = transform(source, None).unwrap();
            println!("\n=== {} ===\nInput:  {}\nOutput: {}", label, source, result.code);
            assert!(result.code.contains(expected), "{label}: {}", result.code);
        }
    }
}

//! Plasmatic JSX transform
//!
//! Rewrites every JSX element into plain calls against the Plasmatic runtime.
//!
//! ## Output Format
//!
//! ```js
//! // Input JSX
//! <Card title="Hi" data-id={id}>
//!   Hello <b>{name}</b>
//! </Card>
//!
//! // Output
//! Plasmatic.createComponent(Card, { title: "Hi", "data-id": id },
//!   Plasmatic.createLiteral("  Hello "),
//!   Plasmatic.createComponent("b", null, name))
//! ```

pub mod attributes;
pub mod children;
pub mod element;
pub mod ir;
pub mod output;
pub mod scope;
pub mod tag;
pub mod transform;

pub use transform::*;

pub mod check;
pub mod constants;
pub mod error;
pub mod expression;
pub mod options;

pub use check::*;
pub use constants::*;
pub use error::OptionsError;
pub use expression::{
    collapse_attribute_whitespace, decode_entities, expr_to_string, normalize_text,
};
pub use options::*;

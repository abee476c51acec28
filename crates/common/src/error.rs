use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Invalid namespace identifier: {0:?}")]
    InvalidNamespace(String),
    #[error("Invalid runtime method name: {0:?}")]
    InvalidMethod(String),
}

//! Error types for attribute parsing.

use thiserror::Error;

/// Error returned when a string cannot be parsed into an [`Attribute`](crate::Attribute).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAttributeError {
    /// The input was empty or whitespace only.
    #[error("attribute name is empty")]
    Empty,

    /// The input is not one of the known attribute names.
    #[error("unknown attribute name: '{0}'")]
    UnknownName(String),

    /// The input looks numeric but does not fit a 32-bit signed code.
    #[error("invalid attribute code '{0}' (out of range for i32)")]
    InvalidCode(String),
}

pub mod category;
pub mod game;
pub mod role;

use std::fmt;

pub use category::Category;
pub use game::GameTag;
pub use role::Role;

/// Error when parsing a label that is not one of a fixed set of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    kind: &'static str,
    invalid: String,
    valid: Vec<&'static str>,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, invalid: &str, valid: Vec<&'static str>) -> Self {
        Self {
            kind,
            invalid: invalid.to_string(),
            valid,
        }
    }
}

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} '{}'. Valid values: {}",
            self.kind,
            self.invalid,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for ParseLabelError {}

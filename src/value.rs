//! Option values.

use std::fmt;

/// Value held by an option.
///
/// An option given without a value (`--verbose` as the last token) is
/// [`OptionValue::Present`]; everything else carries the verbatim text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OptionValue {
    /// Option named without a value
    #[default]
    Present,
    /// Option with a value, possibly empty
    Value(String),
}

impl OptionValue {
    /// The value text, or `None` for a valueless option.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Present => None,
            OptionValue::Value(v) => Some(v),
        }
    }

    pub fn is_present_only(&self) -> bool {
        matches!(self, OptionValue::Present)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Value(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Value(v.to_string())
    }
}

impl From<Option<String>> for OptionValue {
    fn from(v: Option<String>) -> Self {
        v.map_or(OptionValue::Present, OptionValue::Value)
    }
}

impl PartialEq<str> for OptionValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for OptionValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Present => Ok(()),
            OptionValue::Value(v) => write!(f, "{v}"),
        }
    }
}

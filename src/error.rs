//! Error types for cli_args.
//!
//! Parsing itself never fails: malformed quoting is tolerated and unknown
//! prefixes fall through to positional arguments. The only errors are
//! configuration contract violations caught when prefixes are constructed.

use thiserror::Error;

/// Invalid prefix configuration.
///
/// An empty prefix would match every token, so it is rejected up front
/// instead of producing surprising classifications later.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Flag prefix is the empty string
    #[error("flag prefix must not be empty")]
    EmptyFlagPrefix,

    /// Option prefix is the empty string
    #[error("option prefix must not be empty")]
    EmptyOptionPrefix,
}

//! Canonical rendering of classified arguments.
//!
//! Output order is fixed: flags, then options, then positional arguments,
//! each in collection order. Only option values are encoded; flag names and
//! arguments are emitted verbatim.

use crate::classifier::Classified;
use crate::prefix::Prefixes;
use crate::value::OptionValue;

/// Text written for an option that was given without a value.
pub const PRESENT_TEXT: &str = "1";

/// How option values containing spaces are protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// Wrap the whole value in this character (`--name="John Doe"`).
    Wrap(char),
    /// Escape every space with a backslash (`--name=John\ Doe`).
    Escape,
}

impl Default for Quote {
    fn default() -> Self {
        Quote::Wrap('"')
    }
}

/// Encode an option value so the tokenizer reads it back as one token.
///
/// Every `"` and `'` gets a backslash in front. If the result contains a
/// space it is then wrapped or space-escaped according to `quote`. Values
/// without spaces are not quoted.
pub fn encode_value(value: &str, quote: Quote) -> String {
    let mut encoded = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\'' {
            encoded.push('\\');
        }
        encoded.push(ch);
    }

    if !encoded.contains(' ') {
        return encoded;
    }

    match quote {
        Quote::Wrap(q) => format!("{q}{encoded}{q}"),
        Quote::Escape => encoded.replace(' ', "\\ "),
    }
}

/// Render classified arguments as a token array.
///
/// Every option is emitted inline (`--out=file.txt`). A valueless option
/// is written with [`PRESENT_TEXT`] (`--verbose=1`), so it can never take
/// the token after it as its value when the array is classified again.
pub fn to_array(parsed: &Classified, prefixes: &Prefixes, quote: Quote) -> Vec<String> {
    let mut out = Vec::with_capacity(
        parsed.flags().len() + parsed.options().len() + parsed.arguments().len(),
    );

    for flag in parsed.flags() {
        out.push(format!("{}{}", prefixes.flag(), flag));
    }

    for (name, value) in parsed.options() {
        let value = match value {
            OptionValue::Present => PRESENT_TEXT.to_string(),
            OptionValue::Value(v) => encode_value(v, quote),
        };
        out.push(format!("{}{}={}", prefixes.option(), name, value));
    }

    out.extend(parsed.arguments().iter().cloned());
    out
}

/// Join rendered tokens with single spaces, trimming the ends.
pub fn join(tokens: &[String]) -> String {
    tokens
        .join(" ")
        .trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
        .to_string()
}

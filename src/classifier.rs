//! Token classification into flags, options and positional arguments.
//!
//! Flags and options are recognised by prefix. Because the prefixes may
//! overlap (`-` and `--` by default), a token matching both belongs to the
//! longer prefix. A token matching exactly one prefix belongs to that one.

use crate::prefix::Prefixes;
use crate::value::OptionValue;

/// Classification of a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    /// A flag, prefix stripped (`-v` gives `v`)
    Flag(String),
    /// An option whose value is the next token (`--out file`)
    Option(String),
    /// An option carrying its value inline (`--out=file`)
    InlineOption { name: String, value: String },
    /// Anything not matching a prefix, kept verbatim
    Argument(String),
}

/// Classify a single token.
///
/// # Rules
///
/// - Starts with the flag prefix, and either does not start with the option
///   prefix or the flag prefix is the longer one: a flag
/// - Starts with the option prefix, and either does not start with the flag
///   prefix or the option prefix is the longer one: an option. If the rest
///   is `name=value` it is inline; the name is the text before the first
///   `=` and must be non-empty and free of quote characters
/// - Everything else is a positional argument
///
/// With the defaults, `-` alone is a flag with an empty name and `--` alone
/// is an option with an empty name.
pub fn classify_token(token: &str, prefixes: &Prefixes) -> ArgKind {
    let flag = prefixes.flag();
    let option = prefixes.option();
    let is_flag = token.starts_with(flag);
    let is_option = token.starts_with(option);

    if is_flag && (!is_option || flag.len() > option.len()) {
        return ArgKind::Flag(token[flag.len()..].to_string());
    }

    if is_option && (!is_flag || option.len() > flag.len()) {
        let rest = &token[option.len()..];
        return match split_inline(rest) {
            Some((name, value)) => ArgKind::InlineOption {
                name: name.to_string(),
                value: value.to_string(),
            },
            None => ArgKind::Option(rest.to_string()),
        };
    }

    ArgKind::Argument(token.to_string())
}

fn split_inline(rest: &str) -> Option<(&str, &str)> {
    let (name, value) = rest.split_once('=')?;
    if name.is_empty() || name.contains(['\'', '"']) {
        return None;
    }
    Some((name, value))
}

/// Flags, options and arguments produced by classification.
///
/// Flags are unique and options are unique by name; both keep the position
/// of their first insertion. Arguments keep every occurrence in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    flags: Vec<String>,
    options: Vec<(String, OptionValue)>,
    arguments: Vec<String>,
}

impl Classified {
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn options(&self) -> &[(String, OptionValue)] {
        &self.options
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.options.is_empty() && self.arguments.is_empty()
    }

    /// Split into `(flags, options, arguments)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<(String, OptionValue)>, Vec<String>) {
        (self.flags, self.options, self.arguments)
    }

    pub(crate) fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f == name)
    }

    /// Returns true if the flag was newly added.
    pub(crate) fn insert_flag(&mut self, name: String) -> bool {
        if self.has_flag(&name) {
            return false;
        }
        self.flags.push(name);
        true
    }

    /// Returns true if the flag was present.
    pub(crate) fn remove_flag(&mut self, name: &str) -> bool {
        let before = self.flags.len();
        self.flags.retain(|f| f != name);
        self.flags.len() != before
    }

    /// Set an option, replacing an existing value in place.
    pub(crate) fn insert_option(&mut self, name: String, value: OptionValue) {
        match self.options.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.options.push((name, value)),
        }
    }

    /// Returns true if the option was present.
    pub(crate) fn remove_option(&mut self, name: &str) -> bool {
        match self.options.iter().position(|(n, _)| n == name) {
            Some(idx) => {
                self.options.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    /// Add `other` on top: flags union, options last-wins, arguments appended.
    pub(crate) fn merge(&mut self, other: &Classified) {
        for flag in &other.flags {
            self.insert_flag(flag.clone());
        }
        for (name, value) in &other.options {
            self.insert_option(name.clone(), value.clone());
        }
        self.arguments.extend(other.arguments.iter().cloned());
    }

    pub(crate) fn clear_flags(&mut self) {
        self.flags.clear();
    }

    pub(crate) fn clear_options(&mut self) {
        self.options.clear();
    }
}

/// Classify a token sequence into a fresh [`Classified`].
///
/// An option without an inline value takes the following token as its
/// value, whatever that token looks like. An option left waiting at the end
/// of input becomes [`OptionValue::Present`]. A bare option prefix (empty
/// name) is dropped and does not take the next token. Repeated options keep
/// the last value; repeated flags collapse.
pub fn classify<S: AsRef<str>>(tokens: &[S], prefixes: &Prefixes) -> Classified {
    let mut out = Classified::default();
    classify_into(&mut out, tokens, prefixes);
    out
}

/// Classify tokens on top of existing state.
pub(crate) fn classify_into<S: AsRef<str>>(
    out: &mut Classified,
    tokens: &[S],
    prefixes: &Prefixes,
) {
    let mut pending: Option<String> = None;

    for token in tokens {
        let token = token.as_ref();

        if let Some(name) = pending.take() {
            out.insert_option(name, OptionValue::Value(token.to_string()));
            continue;
        }

        let kind = classify_token(token, prefixes);
        tracing::trace!(token, kind = ?kind, "Classified token");

        match kind {
            ArgKind::Flag(name) => {
                out.insert_flag(name);
            }
            ArgKind::Option(name) if name.is_empty() => {
                tracing::debug!(token, "Ignoring option prefix without a name");
            }
            ArgKind::Option(name) => pending = Some(name),
            ArgKind::InlineOption { name, value } => {
                out.insert_option(name, OptionValue::Value(value));
            }
            ArgKind::Argument(arg) => out.arguments.push(arg),
        }
    }

    if let Some(name) = pending {
        tracing::debug!(option = %name, "Option at end of input has no value");
        out.insert_option(name, OptionValue::Present);
    }
}

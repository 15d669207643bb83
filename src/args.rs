//! The mutable argument container.

use crate::classifier::{classify_into, Classified};
use crate::error::ConfigError;
use crate::prefix::Prefixes;
use crate::serializer::{self, Quote};
use crate::tokenizer::tokenize;
use crate::value::OptionValue;
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Flags, options and positional arguments of one command line.
///
/// Load it from a raw string or a token array, query and mutate it, then
/// render it back with [`CliArgs::to_array`] or [`CliArgs::to_string_with`].
///
/// ```
/// use cli_args::{CliArgs, OptionValue};
///
/// let mut args = CliArgs::parse("-v --out result.txt input.txt");
/// assert!(args.has_flag("v"));
/// assert_eq!(args.get_option("out"), Some(&OptionValue::from("result.txt")));
/// assert_eq!(args.get_argument(0), Some("input.txt"));
///
/// args.set_option("name", "John Doe");
/// assert_eq!(
///     args.to_string(),
///     r#"-v --out=result.txt --name="John Doe" input.txt"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    prefixes: Prefixes,
    parsed: Classified,
}

impl CliArgs {
    /// Create an empty container with the default `-` / `--` prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container using the given prefixes.
    pub fn with_prefixes(prefixes: Prefixes) -> Self {
        Self {
            prefixes,
            parsed: Classified::default(),
        }
    }

    /// Create an empty container from prefix strings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if either prefix is empty.
    pub fn with_prefix_strings(
        flag: impl Into<String>,
        option: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_prefixes(Prefixes::new(flag, option)?))
    }

    /// Parse a raw string with the default prefixes.
    pub fn parse(raw: &str) -> Self {
        let mut args = Self::new();
        args.load_str(raw, true);
        args
    }

    /// Classify pre-split tokens with the default prefixes.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut args = Self::new();
        args.load_tokens(tokens, true);
        args
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// The classified state as one value.
    pub fn classified(&self) -> &Classified {
        &self.parsed
    }

    // ---------------------------------------------------------------------
    // Bulk load
    // ---------------------------------------------------------------------

    /// Load from a raw string.
    ///
    /// With `clear` the previous state is replaced; without it the new
    /// tokens are merged in (flags added, options overwritten by name,
    /// arguments appended).
    pub fn load_str(&mut self, raw: &str, clear: bool) -> &mut Self {
        let tokens = tokenize(raw);
        self.load_tokens(&tokens, clear)
    }

    /// Load from pre-split tokens. See [`CliArgs::load_str`] for `clear`.
    pub fn load_tokens<S: AsRef<str>>(&mut self, tokens: &[S], clear: bool) -> &mut Self {
        if clear {
            self.clear();
        }
        classify_into(&mut self.parsed, tokens, &self.prefixes);
        self
    }

    /// Copy another container's flags, options and arguments.
    ///
    /// Values are copied as-is rather than re-read from a rendering, so
    /// quoted or spaced values survive unchanged. Prefixes are not copied.
    /// Without `clear` the state is merged as in [`CliArgs::load_str`].
    pub fn load_copy(&mut self, other: &CliArgs, clear: bool) -> &mut Self {
        if clear {
            self.clear();
        }
        self.parsed.merge(&other.parsed);
        self
    }

    /// Remove all flags, options and arguments.
    pub fn clear(&mut self) -> &mut Self {
        self.parsed = Classified::default();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }

    // ---------------------------------------------------------------------
    // Flags
    // ---------------------------------------------------------------------

    pub fn has_flag(&self, name: &str) -> bool {
        self.parsed.has_flag(name)
    }

    /// True if any of the names is a set flag.
    pub fn has_any_flag<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|n| self.has_flag(n.as_ref()))
    }

    /// Alias for [`CliArgs::has_flag`].
    pub fn get_flag(&self, name: &str) -> bool {
        self.has_flag(name)
    }

    /// Set (`on = true`) or clear a flag.
    pub fn set_flag(&mut self, name: impl Into<String>, on: bool) -> &mut Self {
        let name = name.into();
        if on {
            self.parsed.insert_flag(name);
        } else {
            self.parsed.remove_flag(&name);
        }
        self
    }

    /// Flip a flag and return its previous state.
    pub fn toggle_flag(&mut self, name: &str) -> bool {
        let was = self.has_flag(name);
        self.set_flag(name, !was);
        was
    }

    /// Remove a flag, returning whether it was set.
    pub fn remove_flag(&mut self, name: &str) -> bool {
        self.parsed.remove_flag(name)
    }

    /// Remove every listed flag, returning whether any was set.
    pub fn remove_any_flag<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let mut removed = false;
        for name in names {
            removed |= self.remove_flag(name.as_ref());
        }
        removed
    }

    /// Replace all flags.
    pub fn set_flags<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed.clear_flags();
        for name in names {
            self.parsed.insert_flag(name.into());
        }
        self
    }

    /// All set flag names, in insertion order.
    pub fn flags(&self) -> Vec<String> {
        self.parsed.flags().to_vec()
    }

    pub fn count_flags(&self) -> usize {
        self.parsed.flags().len()
    }

    pub fn remove_flags(&mut self) -> &mut Self {
        self.parsed.clear_flags();
        self
    }

    // ---------------------------------------------------------------------
    // Options
    // ---------------------------------------------------------------------

    pub fn has_option(&self, name: &str) -> bool {
        self.parsed.option(name).is_some()
    }

    /// True if any of the names is a set option.
    pub fn has_any_option<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|n| self.has_option(n.as_ref()))
    }

    /// Set an option. Use [`OptionValue::Present`] for a valueless option.
    pub fn set_option(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> &mut Self {
        self.parsed.insert_option(name.into(), value.into());
        self
    }

    pub fn get_option(&self, name: &str) -> Option<&OptionValue> {
        self.parsed.option(name)
    }

    /// The option's value, or `default` when it is not set.
    pub fn get_option_or<'a>(&'a self, name: &str, default: &'a OptionValue) -> &'a OptionValue {
        self.get_option(name).unwrap_or(default)
    }

    /// The value of the first listed name that is set, in the given order.
    pub fn get_first_option<S: AsRef<str>>(&self, names: &[S]) -> Option<&OptionValue> {
        names.iter().find_map(|n| self.get_option(n.as_ref()))
    }

    /// Remove an option, returning whether it was set.
    pub fn remove_option(&mut self, name: &str) -> bool {
        self.parsed.remove_option(name)
    }

    /// Remove every listed option, returning whether any was set.
    pub fn remove_any_option<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let mut removed = false;
        for name in names {
            removed |= self.remove_option(name.as_ref());
        }
        removed
    }

    /// Replace all options.
    pub fn set_options<I, K, V>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.parsed.clear_options();
        for (name, value) in options {
            self.parsed.insert_option(name.into(), value.into());
        }
        self
    }

    /// All options as `(name, value)` pairs, in insertion order.
    pub fn options(&self) -> Vec<(String, OptionValue)> {
        self.parsed.options().to_vec()
    }

    pub fn count_options(&self) -> usize {
        self.parsed.options().len()
    }

    pub fn remove_options(&mut self) -> &mut Self {
        self.parsed.clear_options();
        self
    }

    // ---------------------------------------------------------------------
    // Arguments
    // ---------------------------------------------------------------------

    pub fn has_argument(&self, value: &str) -> bool {
        self.parsed.arguments().iter().any(|a| a == value)
    }

    /// Append an argument. Duplicates are kept.
    pub fn add_argument(&mut self, value: impl Into<String>) -> &mut Self {
        self.parsed.arguments_mut().push(value.into());
        self
    }

    /// Remove the first occurrence of `value`, or every occurrence with
    /// `all`. Returns how many were removed.
    pub fn remove_argument(&mut self, value: &str, all: bool) -> usize {
        let arguments = self.parsed.arguments_mut();
        if all {
            let before = arguments.len();
            arguments.retain(|a| a != value);
            return before - arguments.len();
        }

        match arguments.iter().position(|a| a == value) {
            Some(idx) => {
                arguments.remove(idx);
                1
            }
            None => 0,
        }
    }

    /// Replace all arguments.
    pub fn set_arguments<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.parsed.arguments_mut() = values.into_iter().map(Into::into).collect();
        self
    }

    /// The argument at `index`, or `None` past the end.
    pub fn get_argument(&self, index: usize) -> Option<&str> {
        self.parsed.arguments().get(index).map(String::as_str)
    }

    pub fn get_argument_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.get_argument(index).unwrap_or(default)
    }

    pub fn arguments(&self) -> &[String] {
        self.parsed.arguments()
    }

    pub fn count_arguments(&self) -> usize {
        self.parsed.arguments().len()
    }

    pub fn remove_arguments(&mut self) -> &mut Self {
        self.parsed.arguments_mut().clear();
        self
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Canonical token array: flags, options, then arguments.
    pub fn to_array(&self, quote: Quote) -> Vec<String> {
        serializer::to_array(&self.parsed, &self.prefixes, quote)
    }

    /// Canonical token array joined with single spaces.
    pub fn to_string_with(&self, quote: Quote) -> String {
        serializer::join(&self.to_array(quote))
    }
}

/// Reads an option by name. Panics if the option is not set, like
/// `HashMap` indexing; use [`CliArgs::get_option`] otherwise.
impl Index<&str> for CliArgs {
    type Output = OptionValue;

    fn index(&self, name: &str) -> &OptionValue {
        match self.get_option(name) {
            Some(value) => value,
            None => panic!("option not set: {name}"),
        }
    }
}

impl fmt::Display for CliArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(Quote::default()))
    }
}

impl FromStr for CliArgs {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for CliArgs {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Vec<String>> for CliArgs {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(&tokens)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CliArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let tokens: Vec<S> = iter.into_iter().collect();
        Self::from_tokens(&tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn reference() -> CliArgs {
        CliArgs::parse("-f1 -f2 --o1 x --o2 y foo bar")
    }

    #[test]
    fn test_basic() {
        let args = reference();

        assert!(args.has_flag("f1"));
        assert!(args.has_flag("f2"));
        assert!(!args.has_flag("f3"));

        assert_eq!(args.get_option("o1"), Some(&OptionValue::from("x")));
        assert_eq!(args.get_option("o2"), Some(&OptionValue::from("y")));
        assert_eq!(args.get_option("o3"), None);

        let default = OptionValue::from("o3");
        assert_eq!(args.get_option_or("o3", &default), &default);
        assert_eq!(args.arguments(), s(&["foo", "bar"]).as_slice());
    }

    #[test]
    fn test_key_lists() {
        let args = reference();

        assert!(args.has_any_flag(&["f3", "f2"]));
        assert!(!args.has_any_flag(&["f3", "f4"]));
        assert!(args.has_any_option(&["o3", "o1"]));
        assert!(!args.has_any_option::<&str>(&[]));
        assert_eq!(
            args.get_first_option(&["o3", "o1"]),
            Some(&OptionValue::from("x"))
        );
        assert_eq!(
            args.get_first_option(&["o2", "o1"]),
            Some(&OptionValue::from("y"))
        );
        assert_eq!(args.get_first_option(&["o3", "o4"]), None);
    }

    #[test]
    fn test_flag_mutation() {
        let mut args = CliArgs::new();
        args.set_flag("a", true).set_flag("b", true);
        assert_eq!(args.count_flags(), 2);

        assert!(!args.toggle_flag("c"));
        assert!(args.has_flag("c"));
        assert!(args.toggle_flag("c"));
        assert!(!args.get_flag("c"));

        args.set_flag("a", false);
        assert!(!args.has_flag("a"));
        assert!(args.remove_flag("b"));
        assert!(!args.remove_flag("b"));
        assert_eq!(args.count_flags(), 0);
    }

    #[test]
    fn test_remove_any_flag() {
        let mut args = CliArgs::parse("-a -b -c");
        assert!(args.remove_any_flag(&["a", "zz", "c"]));
        assert_eq!(args.flags(), s(&["b"]));
        assert!(!args.remove_any_flag(&["a", "c"]));
    }

    #[test]
    fn test_set_flags_replaces() {
        let mut args = CliArgs::parse("-a -b");
        args.set_flags(["x", "y", "x"]);
        assert_eq!(args.flags(), s(&["x", "y"]));
    }

    #[test]
    fn test_option_mutation() {
        let mut args = CliArgs::new();
        args.set_option("out", "a.txt").set_option("verbose", OptionValue::Present);
        assert_eq!(args.count_options(), 2);
        assert_eq!(args.get_option("verbose"), Some(&OptionValue::Present));

        args.set_option("out", "b.txt");
        assert_eq!(args.count_options(), 2);
        assert_eq!(args["out"], "b.txt");

        assert!(args.remove_option("out"));
        assert!(!args.remove_option("out"));
        assert!(args.remove_any_option(&["nope", "verbose"]));
        assert_eq!(args.count_options(), 0);
    }

    #[test]
    fn test_set_options_replaces() {
        let mut args = CliArgs::parse("--a=1 --b=2");
        args.set_options([("c", "3"), ("d", "4")]);
        assert_eq!(
            args.options(),
            vec![
                ("c".to_string(), OptionValue::from("3")),
                ("d".to_string(), OptionValue::from("4")),
            ]
        );
    }

    #[test]
    fn test_returned_collections_are_copies() {
        let args = reference();
        let mut flags = args.flags();
        flags.push("injected".to_string());
        let mut options = args.options();
        options.clear();

        assert!(!args.has_flag("injected"));
        assert_eq!(args.count_options(), 2);
    }

    #[test]
    #[should_panic(expected = "option not set: missing")]
    fn test_index_missing_panics() {
        let args = reference();
        let _ = &args["missing"];
    }

    #[test]
    fn test_arguments() {
        let mut args = CliArgs::new();
        args.add_argument("x").add_argument("y").add_argument("x");
        assert!(args.has_argument("y"));
        assert_eq!(args.count_arguments(), 3);

        assert_eq!(args.remove_argument("x", false), 1);
        assert_eq!(args.arguments(), s(&["y", "x"]).as_slice());

        args.add_argument("x").add_argument("x");
        assert_eq!(args.remove_argument("x", true), 3);
        assert_eq!(args.remove_argument("x", true), 0);
        assert_eq!(args.arguments(), s(&["y"]).as_slice());
    }

    #[test]
    fn test_get_argument() {
        let args = reference();
        assert_eq!(args.get_argument(0), Some("foo"));
        assert_eq!(args.get_argument(1), Some("bar"));
        assert_eq!(args.get_argument(2), None);
        assert_eq!(args.get_argument_or(5, "none"), "none");
    }

    #[test]
    fn test_set_and_remove_arguments() {
        let mut args = reference();
        args.set_arguments(["p", "q"]);
        assert_eq!(args.arguments(), s(&["p", "q"]).as_slice());
        args.remove_arguments();
        assert_eq!(args.count_arguments(), 0);
        assert_eq!(args.count_flags(), 2);
    }

    #[test]
    fn test_clear() {
        let mut args = reference();
        args.clear();
        assert!(args.is_empty());
    }

    #[test]
    fn test_load_str_replaces_by_default() {
        let mut args = reference();
        args.load_str("-z last", true);
        assert_eq!(args.flags(), s(&["z"]));
        assert_eq!(args.count_options(), 0);
        assert_eq!(args.arguments(), s(&["last"]).as_slice());
    }

    #[test]
    fn test_load_str_merge() {
        let mut args = reference();
        args.load_str("-f1 -f3 --o1 z baz", false);
        assert_eq!(args.flags(), s(&["f1", "f2", "f3"]));
        assert_eq!(args.get_option("o1"), Some(&OptionValue::from("z")));
        assert_eq!(args.get_option("o2"), Some(&OptionValue::from("y")));
        assert_eq!(args.arguments(), s(&["foo", "bar", "baz"]).as_slice());
    }

    #[test]
    fn test_load_copy_is_independent() {
        let original = reference();
        let mut copy = CliArgs::new();
        copy.load_copy(&original, true);
        assert_eq!(copy, original);

        copy.set_flag("extra", true);
        assert!(!original.has_flag("extra"));
    }

    #[test]
    fn test_load_copy_preserves_spaced_values() {
        let mut original = CliArgs::new();
        original.set_option("name", r#"John "JD" Doe"#);
        let mut copy = CliArgs::new();
        copy.load_copy(&original, true);
        assert_eq!(copy.get_option("name"), original.get_option("name"));
    }

    #[test]
    fn test_custom_prefixes() {
        let mut args = CliArgs::with_prefix_strings("/", "//").unwrap();
        args.load_str("/v //out file.txt //mode=fast -x", true);
        assert!(args.has_flag("v"));
        assert_eq!(args["out"], "file.txt");
        assert_eq!(args["mode"], "fast");
        assert_eq!(args.arguments(), s(&["-x"]).as_slice());
        assert_eq!(args.to_string(), "/v //out=file.txt //mode=fast -x");
    }

    #[test]
    fn test_with_prefix_strings_rejects_empty() {
        assert_eq!(
            CliArgs::with_prefix_strings("-", ""),
            Err(ConfigError::EmptyOptionPrefix)
        );
    }

    #[test]
    fn test_to_string_quote_modes() {
        let mut args = CliArgs::new();
        args.set_flag("v", true).set_option("name", "a b").add_argument("x");
        assert_eq!(args.to_string(), r#"-v --name="a b" x"#);
        assert_eq!(args.to_string_with(Quote::Wrap('\'')), "-v --name='a b' x");
        assert_eq!(args.to_string_with(Quote::Escape), r"-v --name=a\ b x");
    }

    #[test]
    fn test_conversions() {
        let from_str: CliArgs = "-a b".parse().unwrap();
        let from_ref = CliArgs::from("-a b");
        let from_vec = CliArgs::from(s(&["-a", "b"]));
        let collected: CliArgs = ["-a", "b"].into_iter().collect();

        assert_eq!(from_str, from_ref);
        assert_eq!(from_ref, from_vec);
        assert_eq!(from_vec, collected);
    }
}

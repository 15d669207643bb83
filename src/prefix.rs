//! Flag and option prefix configuration.

use crate::error::ConfigError;

/// Default prefix marking a flag (`-verbose`).
pub const DEFAULT_FLAG_PREFIX: &str = "-";

/// Default prefix marking an option (`--output=file.txt`).
pub const DEFAULT_OPTION_PREFIX: &str = "--";

/// Prefix strings used to recognise flags and options.
///
/// Every [`CliArgs`](crate::CliArgs) carries its own `Prefixes`, so two
/// containers configured differently never affect each other.
///
/// The two prefixes may overlap (the default `-` is a prefix of `--`).
/// When a token matches both, the longer prefix wins; see
/// [`classify_token`](crate::classify_token).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefixes {
    flag: String,
    option: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            flag: DEFAULT_FLAG_PREFIX.to_string(),
            option: DEFAULT_OPTION_PREFIX.to_string(),
        }
    }
}

impl Prefixes {
    /// Create prefixes, rejecting empty strings.
    ///
    /// # Errors
    ///
    /// - `EmptyFlagPrefix` if `flag` is empty
    /// - `EmptyOptionPrefix` if `option` is empty
    pub fn new(flag: impl Into<String>, option: impl Into<String>) -> Result<Self, ConfigError> {
        let flag = flag.into();
        let option = option.into();

        if flag.is_empty() {
            return Err(ConfigError::EmptyFlagPrefix);
        }
        if option.is_empty() {
            return Err(ConfigError::EmptyOptionPrefix);
        }

        Ok(Self { flag, option })
    }

    /// Replace the flag prefix.
    ///
    /// Not validated: passing an empty string makes every token a flag
    /// candidate. Use [`Prefixes::new`] for untrusted input.
    pub fn with_flag(mut self, prefix: impl Into<String>) -> Self {
        self.flag = prefix.into();
        self
    }

    /// Replace the option prefix. Not validated, see [`Prefixes::with_flag`].
    pub fn with_option(mut self, prefix: impl Into<String>) -> Self {
        self.option = prefix.into();
        self
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn option(&self) -> &str {
        &self.option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Prefixes::default();
        assert_eq!(p.flag(), "-");
        assert_eq!(p.option(), "--");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Prefixes::new("", "--"), Err(ConfigError::EmptyFlagPrefix));
        assert_eq!(Prefixes::new("-", ""), Err(ConfigError::EmptyOptionPrefix));
        // Flag is checked first
        assert_eq!(Prefixes::new("", ""), Err(ConfigError::EmptyFlagPrefix));
    }

    #[test]
    fn test_new_custom() {
        let p = Prefixes::new("/", "//").unwrap();
        assert_eq!(p.flag(), "/");
        assert_eq!(p.option(), "//");
    }

    #[test]
    fn test_builder_setters() {
        let p = Prefixes::default().with_flag("+").with_option("-");
        assert_eq!(p.flag(), "+");
        assert_eq!(p.option(), "-");
    }
}

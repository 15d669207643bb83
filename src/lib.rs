//! # cli_args
//!
//! A mutable model of a shell-like command line.
//!
//! `cli_args` splits a raw string into tokens, classifies each token as a
//! flag, an option or a positional argument, and renders the result back
//! into a canonical token array or string. Use it to build, inspect and
//! rewrite argument sets, for example before handing them to a subprocess.
//!
//! ## Quick Start
//!
//! ```rust
//! use cli_args::{CliArgs, OptionValue, Quote};
//!
//! let mut args = CliArgs::parse(r#"-f1 --out "my file.txt" --level=3 input.txt"#);
//!
//! assert!(args.has_flag("f1"));
//! assert_eq!(args.get_option("out"), Some(&OptionValue::from("my file.txt")));
//! assert_eq!(args["level"], "3");
//! assert_eq!(args.arguments(), ["input.txt"]);
//!
//! args.set_flag("v", true).remove_option("level");
//! assert_eq!(args.to_string(), r#"-f1 -v --out="my file.txt" input.txt"#);
//! assert_eq!(
//!     args.to_string_with(Quote::Escape),
//!     r"-f1 -v --out=my\ file.txt input.txt"
//! );
//! ```
//!
//! ## Grammar
//!
//! - **Tokens** are separated by unquoted, unescaped spaces. Single and
//!   double quotes group text; a backslash makes the next character literal.
//!   See [`tokenize`]
//! - **Flags** start with the flag prefix (`-`), **options** with the option
//!   prefix (`--`). When both match, the longer prefix wins, so `--x` is
//!   always an option. See [`classify_token`]
//! - An option takes its value inline (`--out=file`) or from the next token
//!   (`--out file`). An option at the very end has no value and becomes
//!   [`OptionValue::Present`], rendered as `--name=1`. A bare `--` is
//!   ignored
//!
//! There is no globbing, variable expansion, command substitution or piping.
//!
//! ## Prefixes
//!
//! Prefixes belong to each [`CliArgs`], not to the process, so containers
//! with different prefixes can be used side by side and across threads.

mod args;
mod classifier;
mod error;
mod prefix;
mod serializer;
mod tokenizer;
mod value;

// Public API
pub use args::CliArgs;
pub use classifier::{classify, classify_token, ArgKind, Classified};
pub use error::ConfigError;
pub use prefix::{Prefixes, DEFAULT_FLAG_PREFIX, DEFAULT_OPTION_PREFIX};
pub use serializer::{encode_value, Quote, PRESENT_TEXT};
pub use tokenizer::tokenize;
pub use value::OptionValue;

//! Shell-like tokenization of a raw argument string.
//!
//! Only quoting, escaping and space splitting are understood. There is no
//! globbing, expansion or substitution.

/// Split a raw string into tokens.
///
/// # Rules
///
/// - Tokens are separated by unquoted, unescaped spaces (U+0020 only; tabs
///   and newlines are ordinary characters)
/// - `'...'` and `"..."` group text containing spaces; the quote characters
///   themselves are dropped. Inside one kind of quote the other kind is
///   literal
/// - A backslash makes the next character literal, so `\ `, `\'`, `\"` and
///   `\\` yield a space, a quote and a backslash without splitting or
///   toggling. A lone backslash before an ordinary character is dropped
/// - Empty tokens are never produced (`''` alone yields nothing)
/// - An unterminated quote is not an error: the rest of the input is read
///   as if still quoted
///
/// Backslashes keep their escaping meaning inside quotes as well.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Length of the backslash run ending at the current character
    let mut escapes: usize = 0;
    let mut in_single = false;
    let mut in_double = false;

    for ch in raw.chars() {
        if ch == '\\' {
            escapes += 1;
        }
        let escaped = escapes % 2 == 1;

        let mut toggled = false;
        if !escaped {
            match ch {
                '\'' if !in_double => {
                    in_single = !in_single;
                    toggled = true;
                }
                '"' if !in_single => {
                    in_double = !in_double;
                    toggled = true;
                }
                _ => {}
            }
        }

        if !toggled {
            if ch == ' ' && !escaped && !in_single && !in_double {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else if ch != '\\' || !escaped {
                // An odd backslash is a pending escape, not content
                current.push(ch);
            }
        }

        if ch != '\\' {
            escapes = 0;
        }
    }

    if in_single || in_double {
        tracing::debug!(
            single = in_single,
            double = in_double,
            "Input ended inside an open quote"
        );
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

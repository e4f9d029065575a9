//! Environment and home expansion for path strings.
//!
//! [`expandpath`] expands a leading tilde and environment-variable references
//! and nothing else: no normalization, no absolutization, no filesystem
//! access. Relative paths stay relative, and references that cannot be
//! resolved are left as literal text, so the function is total over any
//! input.

use std::env;
use std::path::{is_separator, MAIN_SEPARATOR};

use crate::home::{userhome, userhome_for};

/// Expand `~` / `~user` and environment-variable references in `path`.
///
/// Tilde expansion runs first, then variable expansion (`$VAR` and `${VAR}`
/// everywhere, plus `%VAR%` on Windows hosts). Variables with no defined
/// value, and a tilde whose home cannot be resolved, are left as literal
/// text.
///
/// # Examples
///
/// ```
/// use pathkit::expandpath;
///
/// // no tilde, no variables: unchanged
/// assert_eq!(expandpath("foo"), "foo");
/// ```
///
/// ```no_run
/// use pathkit::{expandpath, userhome};
///
/// let expanded = expandpath("~/foo");
/// assert!(expanded.starts_with(userhome().unwrap().to_str().unwrap()));
/// ```
#[must_use]
pub fn expandpath(path: &str) -> String {
    let expanded = expand_tilde(path);
    expand_vars_styled(&expanded, cfg!(windows))
}

/// Expand a leading `~` or `~user` to the matching home directory.
///
/// The tilde must be the first character; the user part runs to the first
/// path separator. If the home directory cannot be resolved (unknown user,
/// no home, non-Unicode home) the path is returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }
    let split_at = path.find(is_separator).unwrap_or(path.len());
    let name = &path[1..split_at];
    let resolved = if name.is_empty() {
        userhome()
    } else {
        userhome_for(name)
    };
    let Ok(home_dpath) = resolved else {
        return path.to_string();
    };
    let Some(home_str) = home_dpath.to_str() else {
        return path.to_string();
    };

    let trimmed = home_str.trim_end_matches(is_separator);
    let rest = &path[split_at..];
    if trimmed.is_empty() && rest.is_empty() {
        // home was the root itself
        MAIN_SEPARATOR.to_string()
    } else {
        format!("{trimmed}{rest}")
    }
}

/// Expand environment-variable references in `path`.
///
/// `$VAR` and `${VAR}` are recognized on every host; `%VAR%` additionally on
/// Windows. Undefined variables, a bare `$`, and unterminated `${` / `%`
/// forms stay literal.
#[must_use]
pub fn expand_vars(path: &str) -> String {
    expand_vars_styled(path, cfg!(windows))
}

fn expand_vars_styled(path: &str, percent_style: bool) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(at) = rest.find(|c| c == '$' || (percent_style && c == '%')) {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];
        let consumed = if tail.starts_with('$') {
            expand_dollar(tail, &mut out)
        } else {
            expand_percent(tail, &mut out)
        };
        rest = &tail[consumed..];
    }
    out.push_str(rest);
    out
}

// Appends the expansion (or the literal text) of the reference starting
// `tail` to `out` and returns the number of bytes consumed.
fn expand_dollar(tail: &str, out: &mut String) -> usize {
    if let Some(braced) = tail.strip_prefix("${") {
        let Some(end) = braced.find('}') else {
            // unterminated: everything stays literal
            out.push_str(tail);
            return tail.len();
        };
        match env_value(&braced[..end]) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..end + 3]),
        }
        end + 3
    } else {
        let name_len = tail[1..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(tail.len() - 1);
        if name_len == 0 {
            out.push('$');
            return 1;
        }
        match env_value(&tail[1..=name_len]) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..=name_len]),
        }
        name_len + 1
    }
}

fn expand_percent(tail: &str, out: &mut String) -> usize {
    match tail[1..].find('%') {
        Some(end) if end > 0 => {
            match env_value(&tail[1..=end]) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&tail[..end + 2]),
            }
            end + 2
        }
        _ => {
            out.push('%');
            1
        }
    }
}

// Undefined and non-Unicode values both count as "no value": the reference
// stays literal.
fn env_value(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_expandpath_plain_relative_untouched() {
        assert_eq!(expandpath("foo"), "foo");
        assert_eq!(expandpath("a/b/c"), "a/b/c");
    }

    #[test]
    #[serial]
    fn test_expand_tilde_bare() {
        let home = userhome().unwrap();
        assert_eq!(expand_tilde("~"), home.to_str().unwrap());
    }

    #[test]
    #[serial]
    fn test_expand_tilde_with_remainder() {
        let home = userhome().unwrap();
        assert_eq!(
            expand_tilde("~/foo"),
            format!("{}/foo", home.to_str().unwrap())
        );
    }

    #[test]
    fn test_expand_tilde_unknown_user_left_literal() {
        let path = "~pathkit-does-not-exist-xyz/foo";
        assert_eq!(expand_tilde(path), path);
    }

    #[test]
    fn test_expand_tilde_not_leading() {
        assert_eq!(expand_tilde("foo/~"), "foo/~");
    }

    #[test]
    #[serial]
    fn test_expand_vars_defined() {
        std::env::set_var("PATHKIT_TEST_VAR", "value");
        assert_eq!(expand_vars_styled("$PATHKIT_TEST_VAR/x", false), "value/x");
        assert_eq!(
            expand_vars_styled("a/${PATHKIT_TEST_VAR}b", false),
            "a/valueb"
        );
        std::env::remove_var("PATHKIT_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_expand_vars_undefined_left_literal() {
        std::env::remove_var("PATHKIT_UNSET_VAR");
        assert_eq!(
            expand_vars_styled("$PATHKIT_UNSET_VAR/x", false),
            "$PATHKIT_UNSET_VAR/x"
        );
        assert_eq!(
            expand_vars_styled("${PATHKIT_UNSET_VAR}/x", false),
            "${PATHKIT_UNSET_VAR}/x"
        );
    }

    #[test]
    fn test_expand_vars_literal_dollar_forms() {
        assert_eq!(expand_vars_styled("100$", false), "100$");
        assert_eq!(expand_vars_styled("$/x", false), "$/x");
        assert_eq!(expand_vars_styled("${unterminated", false), "${unterminated");
        assert_eq!(expand_vars_styled("${}", false), "${}");
    }

    #[test]
    #[serial]
    fn test_expand_vars_percent_style() {
        std::env::set_var("PATHKIT_TEST_VAR", "value");
        assert_eq!(expand_vars_styled("%PATHKIT_TEST_VAR%\\x", true), "value\\x");
        // percent style off: stays literal
        assert_eq!(
            expand_vars_styled("%PATHKIT_TEST_VAR%", false),
            "%PATHKIT_TEST_VAR%"
        );
        std::env::remove_var("PATHKIT_TEST_VAR");
    }

    #[test]
    fn test_expand_vars_percent_unpaired() {
        assert_eq!(expand_vars_styled("100%", true), "100%");
        assert_eq!(expand_vars_styled("%%", true), "%%");
    }

    #[test]
    #[serial]
    fn test_expand_vars_adjacent_references() {
        std::env::set_var("PATHKIT_A", "1");
        std::env::set_var("PATHKIT_B", "2");
        assert_eq!(expand_vars_styled("$PATHKIT_A${PATHKIT_B}", false), "12");
        std::env::remove_var("PATHKIT_A");
        std::env::remove_var("PATHKIT_B");
    }
}

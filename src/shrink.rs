//! Home shrinking: the inverse of tilde expansion.
//!
//! [`shrinkuser`] replaces a home-directory prefix with a symbolic token.
//! The path is first normalized lexically by [`normpath`], which collapses
//! redundant separators and `.` / `..` segments without ever touching the
//! filesystem or absolutizing relative paths.

use std::path::{is_separator, Component, Path, MAIN_SEPARATOR};

use crate::home::userhome;

/// Normalize a path string lexically.
///
/// Collapses redundant separators, removes `.` segments, and resolves `..`
/// against preceding segments. A `..` at an absolute root collapses away;
/// leading `..` segments on relative paths are kept. The empty path
/// normalizes to `"."`.
///
/// Purely lexical: symlinks are not considered and the filesystem is never
/// consulted.
///
/// # Examples
///
/// ```
/// use pathkit::normpath;
///
/// assert_eq!(normpath("/a/./b//../c"), "/a/c");
/// assert_eq!(normpath("a/b/../../../c"), "../c");
/// assert_eq!(normpath("/.."), "/");
/// assert_eq!(normpath(""), ".");
/// ```
#[must_use]
pub fn normpath(path: &str) -> String {
    let mut prefix = String::new();
    let mut rooted = false;
    let mut parts: Vec<String> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last.as_str() != ".." => {
                    parts.pop();
                }
                _ if rooted => {} // ".." at the root collapses away
                _ => parts.push("..".to_string()),
            },
            Component::Normal(seg) => parts.push(seg.to_string_lossy().into_owned()),
        }
    }

    let mut out = prefix;
    if rooted {
        out.push(MAIN_SEPARATOR);
    }
    out.push_str(&parts.join(&MAIN_SEPARATOR.to_string()));
    if out.is_empty() {
        ".".to_string()
    } else {
        out
    }
}

/// Replace a home-directory prefix in `path` with `~`.
///
/// The inverse of tilde expansion. The path is normalized first; the home
/// prefix is only replaced when it is followed by a path separator (or is
/// the whole path), so `/home/user1` is never shrunk when the home is
/// `/home/user`.
///
/// Total over any input: if the home directory cannot be resolved the
/// normalized path is returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use pathkit::{shrinkuser, userhome};
///
/// let home = userhome().unwrap();
/// let home = home.to_str().unwrap();
/// assert_eq!(shrinkuser(home), "~");
/// assert_eq!(shrinkuser(&format!("{home}1")), format!("{home}1"));
/// assert_eq!(shrinkuser(&format!("{home}/1")), "~/1");
/// ```
#[must_use]
pub fn shrinkuser(path: &str) -> String {
    shrinkuser_with(path, "~")
}

/// [`shrinkuser`] with a caller-chosen symbolic token in place of `~`,
/// such as `"$HOME"` or `"%USERPROFILE%"`.
///
/// # Examples
///
/// ```no_run
/// use pathkit::{shrinkuser_with, userhome};
///
/// let home = userhome().unwrap();
/// let path = format!("{}/1", home.to_str().unwrap());
/// assert_eq!(shrinkuser_with(&path, "$HOME"), "$HOME/1");
/// ```
#[must_use]
pub fn shrinkuser_with(path: &str, home: &str) -> String {
    let normalized = normpath(path);
    let Ok(home_dpath) = userhome() else {
        return normalized;
    };
    let Some(home_str) = home_dpath.to_str() else {
        return normalized;
    };
    if normalized == home_str {
        return home.to_string();
    }
    if let Some(rest) = normalized.strip_prefix(home_str) {
        if rest.starts_with(is_separator) {
            return format!("{home}{rest}");
        }
    }
    normalized
}

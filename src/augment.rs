//! Path augmentation: decompose a path and recombine it with overrides.
//!
//! A path is broken down into components `(dpath, base, ext)` and recombined
//! as `(dpath, prefix, base, suffix, ext)` after replacing any component for
//! which an override was supplied. This creates variants of an existing path
//! without splitting it up and stitching it back together by hand at every
//! call site.

use std::path::{is_separator, MAIN_SEPARATOR};

/// Options for rewriting a path, with a builder-style API.
///
/// The `ext`, `base`, and `dpath` components are optional overrides: when
/// unset (the default), the component derived from the input path is kept.
/// `prefix` is inserted before the basename and `suffix` between the basename
/// and the extension.
///
/// # Examples
///
/// ```
/// use pathkit::Augment;
///
/// assert_eq!(Augment::new().apply("foo.bar"), "foo.bar");
/// assert_eq!(Augment::new().with_ext(".BAZ").apply("foo.bar"), "foo.BAZ");
/// assert_eq!(Augment::new().with_suffix("_").apply("foo.bar"), "foo_.bar");
/// assert_eq!(Augment::new().with_prefix("_").apply("foo.bar"), "_foo.bar");
/// assert_eq!(Augment::new().with_base("baz").apply("foo.bar"), "baz.bar");
/// ```
///
/// With `multidot`, the extension starts at the first dot of the filename
/// rather than the last:
///
/// ```
/// use pathkit::Augment;
///
/// let zipped = Augment::new().with_ext(".zip");
/// assert_eq!(zipped.with_multidot(true).apply("foo.tar.gz"), "foo.zip");
/// assert_eq!(zipped.with_multidot(false).apply("foo.tar.gz"), "foo.tar.zip");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Augment<'a> {
    suffix: &'a str,
    prefix: &'a str,
    ext: Option<&'a str>,
    base: Option<&'a str>,
    dpath: Option<&'a str>,
    multidot: bool,
}

impl<'a> Augment<'a> {
    /// Create an augmentation that keeps every component unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `suffix` between the basename and the extension.
    #[must_use]
    pub fn with_suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Insert `prefix` in front of the basename.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Replace the extension (include the leading dot, e.g. `".zip"`).
    #[must_use]
    pub fn with_ext(mut self, ext: &'a str) -> Self {
        self.ext = Some(ext);
        self
    }

    /// Replace the basename (the filename without its extension).
    #[must_use]
    pub fn with_base(mut self, base: &'a str) -> Self {
        self.base = Some(base);
        self
    }

    /// Replace the directory component.
    #[must_use]
    pub fn with_dpath(mut self, dpath: &'a str) -> Self {
        self.dpath = Some(dpath);
        self
    }

    /// Select extension-splitting mode: when `true`, everything after the
    /// first dot in the filename is the extension; when `false` (the
    /// default), only the part after the last dot is.
    #[must_use]
    pub fn with_multidot(mut self, multidot: bool) -> Self {
        self.multidot = multidot;
        self
    }

    /// Rewrite `path` with these options.
    ///
    /// Total over any input string: no errors, no filesystem access, no
    /// existence checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Augment;
    ///
    /// let renamed = Augment::new()
    ///     .with_prefix("pref_")
    ///     .with_suffix("_suff")
    ///     .with_ext(".baz")
    ///     .with_base("bar")
    ///     .apply("foo.bar");
    /// assert_eq!(renamed, "pref_bar_suff.baz");
    /// ```
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        let (orig_dpath, fname) = split_path(path);
        let (orig_base, orig_ext) = split_ext(fname, self.multidot);

        let dpath = self.dpath.unwrap_or(orig_dpath);
        let ext = self.ext.unwrap_or(orig_ext);
        let base = self.base.unwrap_or(orig_base);

        let new_fname = format!("{}{}{}{}", self.prefix, base, self.suffix, ext);
        join_filename(dpath, &new_fname)
    }
}

/// Split a path at its final separator into `(dpath, fname)`.
///
/// Trailing separators are trimmed from the directory part unless it consists
/// entirely of separators (a root). A path with no separator has an empty
/// directory part.
///
/// # Examples
///
/// ```
/// use pathkit::augment::split_path;
///
/// assert_eq!(split_path("a/b/c.txt"), ("a/b", "c.txt"));
/// assert_eq!(split_path("/c.txt"), ("/", "c.txt"));
/// assert_eq!(split_path("c.txt"), ("", "c.txt"));
/// assert_eq!(split_path("a/b/"), ("a/b", ""));
/// ```
#[must_use]
pub fn split_path(path: &str) -> (&str, &str) {
    let Some(at) = path.rfind(is_separator) else {
        return ("", path);
    };
    let fname = &path[at + 1..];
    let head = &path[..=at];
    let trimmed = head.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        // all separators: keep the root as-is
        (head, fname)
    } else {
        (trimmed, fname)
    }
}

/// Split a filename into `(base, ext)`.
///
/// Leading dots never start an extension in either mode, so dotfiles such as
/// `.bashrc` keep their whole name as the base. With `multidot` the split
/// happens at the first dot after the leading-dot run, otherwise at the last.
///
/// # Examples
///
/// ```
/// use pathkit::augment::split_ext;
///
/// assert_eq!(split_ext("foo.tar.gz", false), ("foo.tar", ".gz"));
/// assert_eq!(split_ext("foo.tar.gz", true), ("foo", ".tar.gz"));
/// assert_eq!(split_ext(".bashrc", false), (".bashrc", ""));
/// assert_eq!(split_ext(".bashrc", true), (".bashrc", ""));
/// ```
#[must_use]
pub fn split_ext(fname: &str, multidot: bool) -> (&str, &str) {
    let leading = fname.len() - fname.trim_start_matches('.').len();
    let rest = &fname[leading..];
    let dot = if multidot {
        rest.find('.')
    } else {
        rest.rfind('.')
    };
    match dot {
        Some(at) => {
            let cut = leading + at;
            (&fname[..cut], &fname[cut..])
        }
        None => (fname, ""),
    }
}

/// Join a directory part and a filename, inserting the platform separator
/// only when needed. An empty directory part yields the filename alone.
#[must_use]
pub fn join_filename(dpath: &str, fname: &str) -> String {
    if dpath.is_empty() {
        fname.to_string()
    } else if dpath.ends_with(is_separator) {
        format!("{dpath}{fname}")
    } else {
        format!("{dpath}{MAIN_SEPARATOR}{fname}")
    }
}

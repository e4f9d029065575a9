//! Error types for the pathkit library.
//!
//! Only home-directory resolution can fail; the string-rewriting functions
//! (`augpath`, `shrinkuser`, `expandpath`, `normpath`) are total over any
//! input and never return an error.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/home/user".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for home-directory resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// The current user's home directory could not be determined from any
    /// source (environment variables or the account database).
    #[error("cannot determine home directory: {reason}")]
    HomeResolution {
        /// Which sources were consulted and found empty.
        reason: String,
    },

    /// A named user does not exist on this system.
    #[error("unknown user: {username}")]
    UnknownUser {
        /// The username that could not be resolved.
        username: String,
    },
}

impl Error {
    /// Check if the error indicates an unknown user.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::UnknownUser { username: "nobody-here".to_string() };
    /// assert!(err.is_unknown_user());
    /// ```
    #[must_use]
    pub fn is_unknown_user(&self) -> bool {
        matches!(self, Self::UnknownUser { .. })
    }

    /// Check if the error indicates the current user's home could not be
    /// resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::HomeResolution { reason: "HOME is unset".to_string() };
    /// assert!(err.is_home_resolution());
    /// ```
    #[must_use]
    pub fn is_home_resolution(&self) -> bool {
        matches!(self, Self::HomeResolution { .. })
    }
}

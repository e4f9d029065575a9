//! Home-directory resolution for the current or a named user.
//!
//! Resolution consults the process environment first and falls back to the
//! platform account database (POSIX) or the profile environment variables
//! (Windows). The fallback chains are expressed over the [`HomeProbe`]
//! capability trait so unit tests can drive either platform's chain with a
//! fake probe instead of depending on real OS account state.
//!
//! # Examples
//!
//! ```no_run
//! use pathkit::home::userhome;
//!
//! let home = userhome().unwrap();
//! assert!(!home.as_os_str().is_empty());
//! ```

#[cfg(unix)]
mod account;
mod probe;
mod resolver;

pub use probe::{HomeProbe, SystemProbe};
pub use resolver::{HomeResolver, Platform};

use std::path::PathBuf;

use crate::error::Result;

/// Resolve the current user's home directory.
///
/// The `HOME` environment variable wins when set and non-empty; otherwise the
/// platform fallback chain applies (see [`HomeResolver::current_home`]).
///
/// # Errors
///
/// Returns [`Error::HomeResolution`](crate::Error::HomeResolution) if no
/// source yields a home directory.
pub fn userhome() -> Result<PathBuf> {
    HomeResolver::new().current_home()
}

/// Resolve the home directory of the named user.
///
/// On POSIX this is an account-database lookup. On Windows the sibling
/// directory of the current user's home is used; that layout is a heuristic,
/// not an OS contract, so an existence check guards the result.
///
/// # Errors
///
/// Returns [`Error::UnknownUser`](crate::Error::UnknownUser) if the user does
/// not exist, or [`Error::HomeResolution`](crate::Error::HomeResolution) if
/// the current user's home is needed as an anchor and cannot be determined.
pub fn userhome_for(username: &str) -> Result<PathBuf> {
    HomeResolver::new().named_home(username)
}

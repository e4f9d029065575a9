//! Capability trait over the process environment and the account database.
//!
//! The resolver logic in this crate is pure over a [`HomeProbe`]; the
//! [`SystemProbe`] implementation is the only code that actually touches the
//! process environment, the account database, or the filesystem.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Read-only access to the sources consulted during home resolution.
///
/// Implement this trait in tests to exercise the resolution chains without
/// touching real OS state.
pub trait HomeProbe {
    /// Look up an environment variable by name.
    fn env_var(&self, name: &str) -> Option<OsString>;

    /// Home directory recorded in the account database for the current user.
    fn current_account_home(&self) -> Option<PathBuf>;

    /// Home directory recorded in the account database for a named user.
    fn named_account_home(&self, username: &str) -> Option<PathBuf>;

    /// Whether `path` exists on the filesystem.
    fn path_exists(&self, path: &Path) -> bool;
}

/// The real process environment and account database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl HomeProbe for SystemProbe {
    fn env_var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    #[cfg(unix)]
    fn current_account_home(&self) -> Option<PathBuf> {
        super::account::current_user_home()
    }

    #[cfg(not(unix))]
    fn current_account_home(&self) -> Option<PathBuf> {
        None
    }

    #[cfg(unix)]
    fn named_account_home(&self, username: &str) -> Option<PathBuf> {
        super::account::named_user_home(username)
    }

    #[cfg(not(unix))]
    fn named_account_home(&self, _username: &str) -> Option<PathBuf> {
        None
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

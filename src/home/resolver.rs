//! Home-directory resolution chains for both supported platform families.
//!
//! Both chains are compiled on every host and selected by value, so tests can
//! drive the Windows chain on POSIX (and vice versa) through a fake probe.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::home::probe::{HomeProbe, SystemProbe};

/// Platform family governing the fallback chain after `HOME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// POSIX family: fall back to the account database.
    Posix,
    /// Windows family: fall back to profile environment variables, and use
    /// the sibling-directory heuristic for named users.
    Windows,
}

impl Platform {
    /// The platform family of the host this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

/// Resolves home directories through a [`HomeProbe`].
///
/// # Examples
///
/// ```no_run
/// use pathkit::home::HomeResolver;
///
/// let resolver = HomeResolver::new();
/// let home = resolver.current_home().unwrap();
/// assert!(!home.as_os_str().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct HomeResolver<P = SystemProbe> {
    probe: P,
    platform: Platform,
}

impl HomeResolver<SystemProbe> {
    /// Create a resolver backed by the real environment and account
    /// database, using the host platform's fallback chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            probe: SystemProbe,
            platform: Platform::host(),
        }
    }
}

impl Default for HomeResolver<SystemProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HomeProbe> HomeResolver<P> {
    /// Create a resolver over a custom probe and platform family.
    ///
    /// This is the injection seam for tests: supply a fake probe and pick
    /// either chain regardless of the host.
    pub const fn with_probe(probe: P, platform: Platform) -> Self {
        Self { probe, platform }
    }

    /// Resolve the current user's home directory.
    ///
    /// Order: `HOME` (set and non-empty) on both platforms, then
    /// `USERPROFILE` and `HOMEDRIVE` + `HOMEPATH` on Windows, or the account
    /// database entry for the current uid on POSIX.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeResolution`] if no source yields a value.
    pub fn current_home(&self) -> Result<PathBuf> {
        if let Some(home) = self.non_empty_var("HOME") {
            log::debug!("home directory resolved from HOME");
            return Ok(PathBuf::from(home));
        }
        match self.platform {
            Platform::Windows => self.windows_profile_fallback(),
            Platform::Posix => self.posix_account_fallback(),
        }
    }

    /// Resolve the home directory of a named user.
    ///
    /// POSIX consults the account database. Windows joins the parent of the
    /// current user's home with `username` and checks that the directory
    /// exists; sibling user directories sharing a parent is a heuristic, not
    /// an OS contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownUser`] if the user cannot be found, or
    /// [`Error::HomeResolution`] if the Windows chain cannot anchor itself on
    /// the current user's home.
    pub fn named_home(&self, username: &str) -> Result<PathBuf> {
        match self.platform {
            Platform::Windows => {
                let current = self.current_home()?;
                let users_dir = current.parent().ok_or_else(|| Error::UnknownUser {
                    username: username.to_string(),
                })?;
                let candidate = users_dir.join(username);
                if self.probe.path_exists(&candidate) {
                    Ok(candidate)
                } else {
                    Err(Error::UnknownUser {
                        username: username.to_string(),
                    })
                }
            }
            Platform::Posix => {
                self.probe
                    .named_account_home(username)
                    .ok_or_else(|| Error::UnknownUser {
                        username: username.to_string(),
                    })
            }
        }
    }

    fn non_empty_var(&self, name: &str) -> Option<OsString> {
        self.probe.env_var(name).filter(|value| !value.is_empty())
    }

    fn windows_profile_fallback(&self) -> Result<PathBuf> {
        if let Some(profile) = self.non_empty_var("USERPROFILE") {
            log::debug!("home directory resolved from USERPROFILE");
            return Ok(PathBuf::from(profile));
        }
        if let Some(homepath) = self.non_empty_var("HOMEPATH") {
            // HOMEDRIVE is "C:"-shaped, so plain concatenation is the join
            let mut joined = self.probe.env_var("HOMEDRIVE").unwrap_or_default();
            joined.push(&homepath);
            log::debug!("home directory resolved from HOMEDRIVE and HOMEPATH");
            return Ok(PathBuf::from(joined));
        }
        Err(Error::HomeResolution {
            reason: "HOME, USERPROFILE, and HOMEPATH are all unset".to_string(),
        })
    }

    fn posix_account_fallback(&self) -> Result<PathBuf> {
        log::debug!("HOME unset, consulting the account database");
        self.probe
            .current_account_home()
            .ok_or_else(|| Error::HomeResolution {
                reason: "HOME is unset and the account database has no entry for the current user"
                    .to_string(),
            })
    }
}

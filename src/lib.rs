#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Small, pure path-string utilities: decomposing and recombining paths,
//! collapsing a home-directory prefix into a symbolic marker, expanding
//! tilde and environment-variable references, and resolving home
//! directories cross-platform.
//!
//! There is no state and no I/O beyond environment and account-database
//! lookups. This is not a canonicalization or filesystem-access library:
//! the only filesystem touch is an existence check on the Windows
//! named-user path.
//!
//! ## Core Operations
//!
//! - [`Augment`]: rewrite a path's directory, basename, extension, prefix,
//!   and suffix in one step
//! - [`shrinkuser`] / [`shrinkuser_with`]: replace a home-directory prefix
//!   with `~` (or another token)
//! - [`expandpath`]: expand `~`, `~user`, and environment variables
//! - [`userhome`] / [`userhome_for`]: resolve a user's home directory
//!
//! ## Examples
//!
//! ```
//! use pathkit::Augment;
//!
//! let backup = Augment::new().with_suffix("_old").apply("notes.txt");
//! assert_eq!(backup, "notes_old.txt");
//!
//! let unpacked = Augment::new()
//!     .with_ext("")
//!     .with_multidot(true)
//!     .apply("archive.tar.gz");
//! assert_eq!(unpacked, "archive");
//! ```

pub mod augment;
pub mod error;
pub mod expand;
pub mod home;
pub mod shrink;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the public surface at the crate root
pub use augment::Augment;
pub use error::{Error, Result};
pub use expand::{expand_tilde, expand_vars, expandpath};
pub use home::{userhome, userhome_for, HomeProbe, HomeResolver, Platform, SystemProbe};
pub use shrink::{normpath, shrinkuser, shrinkuser_with};

//! Reusable core of `shed`, a per-project shell workspace manager.
//!
//! A workspace is a named collection of shell functions, environment files,
//! and configuration, stored under the user's config directory and bound to
//! the shell it was created with. This crate owns the on-disk store and the
//! construction of the shell command lines used to load and run workspace
//! functions; the function catalogs themselves come from `shed-parser`.

mod commands;
mod completion;
mod config;
mod error;
mod shells;
mod workspace;

pub use commands::{CommandRunner, ShellCommandRunner};
pub use completion::{find_envs, find_functions, find_workspaces};
pub use config::{StoreConfig, WorkspaceConfig};
pub use error::Error;
pub use shells::Shell;
pub use workspace::{StoreOptions, Workspace, WorkspaceStore};

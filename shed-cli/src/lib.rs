//! Crate for `shed`, a per-project shell workspace manager CLI.

#![allow(dead_code)]

/// Command-line argument definitions.
pub mod args;
mod productinfo;

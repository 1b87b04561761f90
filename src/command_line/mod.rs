#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The command-line layer of the binary.

/// The `cli` module defines the argument surface and the command handlers.
pub(crate) mod cli;

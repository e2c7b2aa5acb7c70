//! Subcommands of the `tictree` binary

pub mod build;
pub mod stats;
pub mod symmetry;

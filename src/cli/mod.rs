//! CLI infrastructure for the tictree binary
//!
//! Commands build the scenario DAG, print its statistics and explore board
//! symmetries.

pub mod commands;
pub mod config;
pub mod output;

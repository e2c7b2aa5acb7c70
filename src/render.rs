//! Output formats for a built tree: Graphviz DOT and JSON snapshots

pub mod dot;
pub mod snapshot;

pub use dot::{DotGraph, NodeStyle, RenderOptions, VisibleGraph};
pub use snapshot::{NodeRecord, TreeSnapshot};

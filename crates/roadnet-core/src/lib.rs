//! Roadnet Core Library
//!
//! Road network graph, the algorithms that run over it, and the snapshot,
//! configuration and logging plumbing shared with the `roadnet` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod snapshot;

//! Common types shared across the tabiso workspace.
//!
//! This crate provides the graph model consumed by the matching engine,
//! vertex identities, search configuration, and the text parsers that turn
//! exercise input into graphs.

mod config;
mod error;
mod graph;
pub mod parse;
mod vertex;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::graph::*;
pub use crate::vertex::*;

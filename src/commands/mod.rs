//! Command implementations for gmcollage CLI

pub mod completions;
pub mod merge;
pub mod split;
pub mod version;

//! Math Quest (workspace facade crate).
//!
//! Re-exports the workspace crates as `math_quest::{core, input, term, types}`
//! and adds the binary's startup configuration.

pub mod config;

pub use math_quest_core as core;
pub use math_quest_input as input;
pub use math_quest_term as term;
pub use math_quest_types as types;

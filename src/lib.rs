//! Falling blocks (workspace facade crate).
//!
//! Re-exports the member crates as `falling_blocks::{core,input,term,types}` and
//! hosts the command-line surface shared by the binary and its tests.

pub mod cli;

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;

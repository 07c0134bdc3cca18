//! Maze snake (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `maze_snake::{core,input,term,types}` and hosts the
//! terminal binary, the integration tests and the benches.

pub use maze_snake_core as core;
pub use maze_snake_input as input;
pub use maze_snake_term as term;
pub use maze_snake_types as types;

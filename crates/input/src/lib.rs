//! Terminal input module.
//!
//! This crate is independent of any UI framework beyond the crossterm event
//! types. It maps key events into [`crate::types::GameAction`]s and batches
//! them per frame for the game loop.

pub mod handler;
pub mod map;

pub use maze_snake_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};

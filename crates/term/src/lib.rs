//! Terminal renderer for the maze snake game.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! the game view paints solid coloured cells, and the renderer flushes only
//! what changed since the previous frame.
//!
//! - `core` stays deterministic and free of I/O
//! - grid cells are 2 columns wide to look roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use maze_snake_core as core;
pub use maze_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Placement, Viewport};
pub use renderer::{changed_runs, encode_diff, encode_full, Run, TerminalRenderer};

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the maze generator, the snake rules and the tick loop.
//! It does no I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces the same maze, spawn and food sequence
//! - **Testable**: Scenarios can be built cell by cell with [`GameState::from_parts`]
//! - **Portable**: Any frontend can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`union_find`]: disjoint sets (union by height, no path compression)
//! - [`maze`]: wall bitmap and randomized Kruskal generation
//! - [`snake`]: body segments in a deque, head first
//! - [`game_state`]: initialization, input buffering, pacing, movement and collisions
//! - [`rng`]: seedable LCG
//! - [`snapshot`]: read-only render view
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its current direction
//! - Turns are buffered; reversals and repeats of the current heading are dropped
//! - Hitting a wall, the border or its own body loses the game
//! - Eating food grows the snake by one; new food appears on a free cell
//!
//! # Example
//!
//! ```
//! use maze_snake_core::GameState;
//! use maze_snake_types::{Direction, GameAction, GameConfig, Phase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(GameAction::Turn(Direction::Up));
//!
//! // The first update after a start always fires.
//! assert!(game.update(0));
//! // The next one waits for the tick delay.
//! assert!(!game.update(10));
//! ```

pub mod game_state;
pub mod maze;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod union_find;

pub use maze_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use maze::{generate_maze, Maze, MazeLayout, WallGrid};
pub use rng::SimpleRng;
pub use snake::{Segment, Snake};
pub use snapshot::GameSnapshot;
pub use union_find::UnionFind;

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the core logic, the input mapping and the terminal renderer.
//!
//! # Grid Dimensions
//!
//! - **Movement grid**: 50 x 50 cells, `(0, 0)` is the top-left corner
//! - **Maze passages**: 3 cells wide (`MAZE_SIZE`)
//! - **Coarse maze**: `GRID_WIDTH / (2 * MAZE_SIZE)` = 8 cells per axis
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_DELAY_MS` | 150 | Minimum time between two snake steps |
//! | `FRAME_MS` | 16 | Input poll timeout per frame (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use maze_snake_types::{Direction, GameConfig, Point};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Point::new(3, 3).step(Direction::Left), Point::new(2, 3));
//!
//! let config = GameConfig::default();
//! assert!(config.is_valid());
//! assert_eq!(config.grid_width, 50);
//! ```

/// Movement grid width in cells
pub const GRID_WIDTH: u16 = 50;

/// Movement grid height in cells
pub const GRID_HEIGHT: u16 = 50;

/// Width of maze passages in cells
pub const MAZE_SIZE: u16 = 3;

/// Minimum delay between ticks in milliseconds
pub const TICK_DELAY_MS: u64 = 150;

/// Input poll timeout for one frame of the main loop
pub const FRAME_MS: u64 = 16;

/// Number of segments the snake spawns with (all stacked on the head cell)
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Integer coordinate on the movement grid.
///
/// Signed so that probing one step past the border yields a representable
/// (out-of-bounds) point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one cell away in `dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_snake_types::{Direction, Point};
    ///
    /// let p = Point::new(5, 5);
    /// assert_eq!(p.step(Direction::Up), Point::new(5, 4));
    /// assert_eq!(p.step(Direction::Down), Point::new(5, 6));
    /// assert_eq!(p.step(Direction::Right), Point::new(6, 5));
    /// ```
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Direction of snake travel.
///
/// Screen coordinates: `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in probing order (up, down, left, right).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse direction. Applying it twice yields the original.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset `(dx, dy)` for one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Whether a buffered turn toward `self` is meaningless while travelling
    /// in `current` (same direction, or a 180° reversal).
    pub fn is_redundant_turn(self, current: Direction) -> bool {
        self == current || self == current.opposite()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle phase of a game.
///
/// The game starts `Running`; `Lost` is only left through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Paused,
    Lost,
}

/// Discrete player inputs understood by the game state.
///
/// Quitting is handled by the frame loop, not the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Buffer a turn toward the given direction
    Turn(Direction),
    /// Toggle between running and paused
    Pause,
    /// Start a new game (only honoured after losing)
    Restart,
}

/// Grid geometry and pacing for one game.
///
/// `Default` gives the standard 50 x 50 board. Smaller configurations are
/// useful for tests and benches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub maze_size: u16,
    pub tick_delay_ms: u64,
    pub initial_length: usize,
}

impl GameConfig {
    /// True when the grid holds at least one coarse maze cell and the snake
    /// has at least one segment.
    ///
    /// ```
    /// use maze_snake_types::GameConfig;
    ///
    /// let tiny = GameConfig { grid_width: 4, ..GameConfig::default() };
    /// assert!(!tiny.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.maze_size > 0
            && self.initial_length > 0
            && self.grid_width >= 2 * self.maze_size
            && self.grid_height >= 2 * self.maze_size
    }

    /// Number of cells on the movement grid.
    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            maze_size: MAZE_SIZE,
            tick_delay_ms: TICK_DELAY_MS,
            initial_length: INITIAL_SNAKE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 50);
        assert_eq!(config.grid_height, 50);
        assert_eq!(config.maze_size, 3);
        assert_eq!(config.tick_delay_ms, 150);
        assert_eq!(config.initial_length, 4);
        assert_eq!(config.cell_count(), 2500);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn redundant_turns() {
        assert!(Direction::Right.is_redundant_turn(Direction::Right));
        assert!(Direction::Left.is_redundant_turn(Direction::Right));
        assert!(!Direction::Up.is_redundant_turn(Direction::Right));
        assert!(!Direction::Down.is_redundant_turn(Direction::Left));
    }

    #[test]
    fn step_moves_one_cell() {
        let origin = Point::new(0, 0);
        assert_eq!(origin.step(Direction::Up), Point::new(0, -1));
        assert_eq!(origin.step(Direction::Left), Point::new(-1, 0));
        for dir in Direction::ALL {
            assert_eq!(origin.step(dir).step(dir.opposite()), origin);
        }
    }

    #[test]
    fn config_validity() {
        assert!(GameConfig::default().is_valid());
        let smallest = GameConfig {
            grid_width: 6,
            grid_height: 6,
            ..GameConfig::default()
        };
        assert!(smallest.is_valid());
        let no_maze = GameConfig {
            maze_size: 0,
            ..GameConfig::default()
        };
        assert!(!no_maze.is_valid());
        let no_snake = GameConfig {
            initial_length: 0,
            ..GameConfig::default()
        };
        assert!(!no_snake.is_valid());
    }
}

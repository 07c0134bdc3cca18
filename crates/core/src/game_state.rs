//! Game state module - owns the whole game and advances it one tick at a time
//!
//! This module ties together the maze, the snake, the food and the buffered
//! turns. It handles initialization (maze, spawn placement, initial heading),
//! tick pacing, input filtering, movement, collisions and growth.

use std::collections::VecDeque;

use log::{debug, info};

use crate::maze::{generate_maze, MazeLayout, WallGrid};
use crate::rng::SimpleRng;
use crate::snake::{Segment, Snake};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Turns kept after one is consumed; older presses beyond this are dropped
/// so a burst of keys cannot queue up input lag.
const MAX_BUFFERED_TURNS: usize = 1;

/// Random spawn attempts per grid cell before falling back to a scan of the
/// remaining free cells.
const SPAWN_ATTEMPTS_PER_CELL: usize = 4;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    seed: u32,
    walls: WallGrid,
    snake: Snake,
    /// Current travel direction.
    direction: Direction,
    /// Turns pressed since the last tick, oldest first.
    pending: VecDeque<Direction>,
    food: Point,
    phase: Phase,
    /// The next `update` fires regardless of pacing (after start or pause).
    first_tick: bool,
    last_tick_ms: u64,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and initialize it.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut state = Self::empty(config, seed);
        state.init_game();
        state
    }

    /// Build a running game from explicit parts.
    ///
    /// No maze is generated; `walls` is used as-is. Useful for scripted
    /// scenarios, benches and tests.
    pub fn from_parts(
        config: GameConfig,
        walls: WallGrid,
        snake: Snake,
        direction: Direction,
        food: Point,
        seed: u32,
    ) -> Self {
        debug_assert_eq!(walls.width(), config.grid_width);
        debug_assert_eq!(walls.height(), config.grid_height);
        Self {
            walls,
            snake,
            direction,
            food,
            ..Self::empty(config, seed)
        }
    }

    fn empty(config: GameConfig, seed: u32) -> Self {
        Self {
            config,
            rng: SimpleRng::new(seed),
            seed,
            walls: WallGrid::filled(config.grid_width, config.grid_height),
            snake: Snake::new(),
            direction: Direction::Right,
            pending: VecDeque::new(),
            food: Point::default(),
            phase: Phase::Running,
            first_tick: true,
            last_tick_ms: 0,
            episode_id: 0,
        }
    }

    /// Reset everything and start a fresh game on a new maze.
    ///
    /// The RNG keeps its stream, so every restart produces a different maze.
    pub fn init_game(&mut self) {
        self.phase = Phase::Running;
        self.direction = Direction::Right;
        self.first_tick = true;
        self.pending.clear();
        self.snake.clear();

        let layout = MazeLayout::from_config(&self.config);
        self.walls = generate_maze(layout, &mut self.rng).walls;

        // The maze always has an open cell and the snake is empty here.
        self.food = self.random_free_cell(None).unwrap_or_default();

        let head = self
            .random_free_cell(Some(self.food))
            .unwrap_or(self.food);

        self.direction = self.longest_run_direction(head);
        self.snake = Snake::stacked(head, self.direction, self.config.initial_length);

        info!(
            "game {} started: seed={} head=({}, {}) heading={} food=({}, {})",
            self.episode_id,
            self.seed,
            head.x,
            head.y,
            self.direction.as_str(),
            self.food.x,
            self.food.y
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn pending_turns(&self) -> &VecDeque<Direction> {
        &self.pending
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            snake: &self.snake,
            food: self.food,
            walls: &self.walls,
            lost: self.is_lost(),
            paused: self.is_paused(),
        }
    }

    /// True if `(x, y)` is off the grid, a wall, or part of the snake.
    ///
    /// Linear in the snake length.
    pub fn check_collision(&self, x: i32, y: i32) -> bool {
        match self.walls.get(x, y) {
            None | Some(true) => true,
            Some(false) => self.snake.occupies(x, y),
        }
    }

    pub fn collides(&self, p: Point) -> bool {
        self.check_collision(p.x, p.y)
    }

    /// Pick a random cell that does not collide and is not `avoid`.
    ///
    /// Rejection sampling first; when the board is nearly full, choose
    /// among the remaining free cells. `None` if there are none.
    fn random_free_cell(&mut self, avoid: Option<Point>) -> Option<Point> {
        let (w, h) = (self.config.grid_width as u32, self.config.grid_height as u32);

        for _ in 0..self.config.cell_count() * SPAWN_ATTEMPTS_PER_CELL {
            let p = Point::new(self.rng.next_range(w) as i32, self.rng.next_range(h) as i32);
            if !self.collides(p) && Some(p) != avoid {
                return Some(p);
            }
        }

        let free: Vec<Point> = self
            .walls
            .open_cells()
            .filter(|p| !self.snake.occupies(p.x, p.y) && Some(*p) != avoid)
            .collect();
        if free.is_empty() {
            return None;
        }
        let i = self.rng.next_range(free.len() as u32) as usize;
        Some(free[i])
    }

    /// Distance from `from` to the first colliding cell in `dir`.
    fn free_run(&self, from: Point, dir: Direction) -> u32 {
        let mut p = from.step(dir);
        let mut dist = 1;
        while !self.collides(p) {
            p = p.step(dir);
            dist += 1;
        }
        dist
    }

    /// Direction with the longest unobstructed straight run from `head`.
    ///
    /// Evaluated up, down, left, right; only a strictly longer run replaces
    /// the current pick, so ties go to the earlier direction.
    pub fn longest_run_direction(&self, head: Point) -> Direction {
        let mut best = Direction::Up;
        let mut best_run = 0;
        for dir in Direction::ALL {
            let run = self.free_run(head, dir);
            if run > best_run {
                best = dir;
                best_run = run;
            }
        }
        best
    }

    /// Take the next meaningful turn from the buffer.
    fn consume_pending_turn(&mut self) {
        let current = self.direction;
        while self
            .pending
            .front()
            .is_some_and(|turn| turn.is_redundant_turn(current))
        {
            self.pending.pop_front();
        }
        if let Some(turn) = self.pending.pop_front() {
            self.direction = turn;
        }
        self.pending.truncate(MAX_BUFFERED_TURNS);
    }

    /// Advance the game by one step if it is due.
    ///
    /// `now_ms` is a monotonic clock in milliseconds. The first call after a
    /// start or a pause toggle fires immediately; later calls fire only once
    /// `tick_delay_ms` has passed since the last step. Returns true when a
    /// step was processed (including the one that loses the game).
    pub fn update(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        if self.first_tick {
            self.first_tick = false;
        } else if now_ms.saturating_sub(self.last_tick_ms) < self.config.tick_delay_ms {
            return false;
        }

        self.consume_pending_turn();

        let Some(head) = self.snake.head().copied() else {
            return false;
        };
        let next = Segment::new(head.pos.step(self.direction), self.direction);
        let eating = next.pos == self.food;

        // Move first, then check: the cell the tail leaves is free this tick.
        let tail = if eating { None } else { self.snake.pop_tail() };

        if self.collides(next.pos) {
            self.phase = Phase::Lost;
            if let Some(tail) = tail {
                self.snake.push_tail(tail);
            }
            info!(
                "game {} lost at ({}, {}) with length {}",
                self.episode_id,
                next.pos.x,
                next.pos.y,
                self.snake.len()
            );
            return true;
        }

        self.snake.push_head(next);

        if eating {
            // A full board keeps the old food cell; the next step then collides.
            if let Some(food) = self.random_free_cell(None) {
                self.food = food;
            }
            debug!(
                "food eaten, length {}, next food at ({}, {})",
                self.snake.len(),
                self.food.x,
                self.food.y
            );
        }

        self.last_tick_ms = now_ms;
        true
    }

    /// Apply a player input
    ///
    /// Returns false when the action was ignored in the current phase.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => {
                self.pending.push_back(dir);
                true
            }
            GameAction::Pause => {
                self.phase = match self.phase {
                    Phase::Running => Phase::Paused,
                    Phase::Paused => Phase::Running,
                    Phase::Lost => return false,
                };
                self.first_tick = true;
                info!("game {} {:?}", self.episode_id, self.phase);
                true
            }
            GameAction::Restart => {
                if self.phase != Phase::Lost {
                    return false;
                }
                self.episode_id = self.episode_id.wrapping_add(1);
                self.init_game();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

use crate::maze::WallGrid;
use crate::snake::{Segment, Snake};
use crate::types::Point;

/// Everything the renderer is allowed to see of a game.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub snake: &'a Snake,
    pub food: Point,
    pub walls: &'a WallGrid,
    pub lost: bool,
    pub paused: bool,
}

impl<'a> GameSnapshot<'a> {
    pub fn segments(&self) -> impl Iterator<Item = &'a Segment> + 'a {
        self.snake.iter()
    }

    pub fn playable(&self) -> bool {
        !self.lost && !self.paused
    }
}

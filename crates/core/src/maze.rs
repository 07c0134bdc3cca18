//! Maze module - wall bitmap and randomized Kruskal generation
//!
//! The movement grid is covered by a coarse grid of maze cells, each
//! `maze_size` cells wide and separated by `maze_size`-wide wall strips.
//! Generation shuffles every edge of the coarse grid and carves the ones that
//! join two still-disconnected cells, which yields a spanning tree: exactly
//! one path between any two coarse cells.
//!
//! Coarse cell `(cx, cy)` lives at half-cell `(2 * cx, 2 * cy)`; the odd
//! half-cell between two neighbours is the passage strip. Half-cell `h` maps
//! to the fine block whose top-left is `h * maze_size + offset`.

use log::debug;

use crate::rng::SimpleRng;
use crate::types::{GameConfig, Point};
use crate::union_find::UnionFind;

/// Impassable cells of the movement grid.
///
/// Flat row-major storage indexed `x + width * y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl WallGrid {
    /// Grid with every cell walled.
    pub fn filled(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![true; width as usize * height as usize],
        }
    }

    /// Grid with no walls at all.
    pub fn open(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(x as usize + self.width as usize * y as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Whether `(x, y)` is a wall. Out-of-bounds reads as `None`.
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Set a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, wall: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = wall;
                true
            }
            None => false,
        }
    }

    /// Clear a `w x h` block with top-left `(x, y)`, clipped to the grid.
    pub fn clear_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, false);
            }
        }
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&wall| !wall).count()
    }

    /// Iterate all open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &wall)| !wall)
            .map(move |(i, _)| Point::new((i % width) as i32, (i / width) as i32))
    }
}

/// Placement of the coarse maze on the movement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeLayout {
    pub grid_width: u16,
    pub grid_height: u16,
    pub maze_size: u16,
    pub maze_width: u16,
    pub maze_height: u16,
    pub offset_x: u16,
    pub offset_y: u16,
}

impl MazeLayout {
    /// Fit as many coarse cells as the grid allows and center them.
    ///
    /// Panics if the grid cannot hold a single coarse cell.
    pub fn new(grid_width: u16, grid_height: u16, maze_size: u16) -> Self {
        assert!(maze_size > 0, "maze passages must be at least one cell wide");
        let maze_width = grid_width / (maze_size * 2);
        let maze_height = grid_height / (maze_size * 2);
        assert!(
            maze_width > 0 && maze_height > 0,
            "{}x{} grid cannot hold a maze with {}-wide passages",
            grid_width,
            grid_height,
            maze_size
        );

        let offset_x = (grid_width - (maze_width * 2 - 1) * maze_size) / 2;
        let offset_y = (grid_height - (maze_height * 2 - 1) * maze_size) / 2;

        Self {
            grid_width,
            grid_height,
            maze_size,
            maze_width,
            maze_height,
            offset_x,
            offset_y,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid_width, config.grid_height, config.maze_size)
    }

    pub fn cell_count(&self) -> usize {
        self.maze_width as usize * self.maze_height as usize
    }

    /// Coarse cell id.
    #[inline(always)]
    pub fn cell_id(&self, x: u16, y: u16) -> usize {
        x as usize + self.maze_width as usize * y as usize
    }

    /// Coarse cell coordinate of an id.
    #[inline(always)]
    pub fn cell_point(&self, id: usize) -> Point {
        let w = self.maze_width as usize;
        Point::new((id % w) as i32, (id / w) as i32)
    }

    /// Top-left fine cell of a half-cell block.
    pub fn block_origin(&self, half: Point) -> Point {
        let size = self.maze_size as i32;
        Point::new(
            half.x * size + self.offset_x as i32,
            half.y * size + self.offset_y as i32,
        )
    }

    /// Every edge of the coarse grid: horizontal edges row by row, then
    /// vertical edges column by column.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let (w, h) = (self.maze_width, self.maze_height);
        let count = (w as usize - 1) * h as usize + (h as usize - 1) * w as usize;
        let mut edges = Vec::with_capacity(count);

        for row in 0..h {
            for col in 0..w - 1 {
                edges.push((self.cell_id(col, row), self.cell_id(col + 1, row)));
            }
        }
        for col in 0..w {
            for row in 0..h - 1 {
                edges.push((self.cell_id(col, row), self.cell_id(col, row + 1)));
            }
        }

        edges
    }
}

/// Generated maze: the wall bitmap plus the coarse edges that were carved.
#[derive(Debug, Clone)]
pub struct Maze {
    pub layout: MazeLayout,
    pub walls: WallGrid,
    pub passages: Vec<(usize, usize)>,
}

/// Build a perfect maze over `layout` using `rng` for the edge order.
///
/// Panics if the shuffled edges run out before the coarse grid is connected,
/// which would mean the edge enumeration is broken.
pub fn generate_maze(layout: MazeLayout, rng: &mut SimpleRng) -> Maze {
    let mut sets = UnionFind::new(layout.cell_count());
    let mut edges = layout.edges();
    rng.shuffle(&mut edges);

    let mut walls = WallGrid::filled(layout.grid_width, layout.grid_height);
    let mut passages = Vec::with_capacity(layout.cell_count().saturating_sub(1));

    if layout.cell_count() == 1 {
        clear_block(&layout, &mut walls, Point::new(0, 0));
    }

    for &(a, b) in &edges {
        if sets.set_count() == 1 {
            break;
        }
        if sets.find(a) == sets.find(b) {
            continue;
        }
        sets.union_of(a, b);
        carve_edge(&layout, &mut walls, layout.cell_point(a), layout.cell_point(b));
        passages.push((a, b));
    }

    assert_eq!(
        sets.set_count(),
        1,
        "maze edges exhausted with {} disconnected regions",
        sets.set_count()
    );

    debug!(
        "maze generated: {}x{} cells, {} passages, {} open tiles",
        layout.maze_width,
        layout.maze_height,
        passages.len(),
        walls.open_count()
    );

    Maze {
        layout,
        walls,
        passages,
    }
}

fn clear_block(layout: &MazeLayout, walls: &mut WallGrid, half: Point) {
    let origin = layout.block_origin(half);
    let size = layout.maze_size as i32;
    walls.clear_rect(origin.x, origin.y, size, size);
}

fn carve_edge(layout: &MazeLayout, walls: &mut WallGrid, a: Point, b: Point) {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    clear_block(layout, walls, Point::new(a.x * 2, a.y * 2));
    clear_block(layout, walls, Point::new(a.x * 2 + dx, a.y * 2 + dy));
    clear_block(layout, walls, Point::new(b.x * 2, b.y * 2));
}

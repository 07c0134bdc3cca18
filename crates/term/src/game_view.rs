//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Point;

pub const BACKGROUND: Rgb = Rgb::new(49, 48, 50);
pub const SNAKE: Rgb = Rgb::new(179, 229, 125);
pub const SNAKE_LOST: Rgb = Rgb::new(174, 187, 126);
pub const FOOD: Rgb = Rgb::new(248, 88, 62);
pub const WALL: Rgb = Rgb::new(102, 103, 119);

const SCREEN: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(230, 230, 230);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the play area lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Top-left of the padding frame.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left of grid cell (0, 0).
    pub grid_x: u16,
    pub grid_y: u16,
}

/// Draws the maze, snake and food as solid blocks.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    /// Padding frame thickness in grid cells.
    padding: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            padding: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, padding: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            padding,
        }
    }

    /// Screen placement for a grid of `grid_w x grid_h` cells, centered.
    pub fn placement(&self, grid_w: u16, grid_h: u16, viewport: Viewport) -> Placement {
        let pad_w = self.padding * self.cell_w;
        let pad_h = self.padding * self.cell_h;
        let frame_w = grid_w * self.cell_w + 2 * pad_w;
        let frame_h = grid_h * self.cell_h + 2 * pad_h;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Placement {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            grid_x: frame_x + pad_w,
            grid_y: frame_y + pad_h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::blank(SCREEN));

        let (grid_w, grid_h) = (snap.walls.width(), snap.walls.height());
        let at = self.placement(grid_w, grid_h, viewport);

        if at.frame_w > viewport.width || at.frame_h > viewport.height {
            self.draw_too_small(fb, &at, viewport);
            return;
        }

        // Padding frame in wall colour, then the play area on top.
        fb.paint_rect(at.frame_x, at.frame_y, at.frame_w, at.frame_h, WALL);
        fb.paint_rect(
            at.grid_x,
            at.grid_y,
            grid_w * self.cell_w,
            grid_h * self.cell_h,
            BACKGROUND,
        );

        let body = if snap.lost { SNAKE_LOST } else { SNAKE };
        for segment in snap.segments() {
            self.paint_cell(fb, &at, segment.pos, body);
        }

        self.paint_cell(fb, &at, snap.food, FOOD);

        for y in 0..grid_h as i32 {
            for x in 0..grid_w as i32 {
                if snap.walls.is_wall(x, y) {
                    self.paint_cell(fb, &at, Point::new(x, y), WALL);
                }
            }
        }

        self.draw_status(fb, snap, &at);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, at: &Placement, p: Point, color: Rgb) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        let (Ok(x), Ok(y)) = (u16::try_from(p.x), u16::try_from(p.y)) else {
            return;
        };
        fb.paint_rect(
            at.grid_x.saturating_add(x.saturating_mul(self.cell_w)),
            at.grid_y.saturating_add(y.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
            color,
        );
    }

    /// Shown instead of a clipped board.
    fn draw_too_small(&self, fb: &mut FrameBuffer, at: &Placement, viewport: Viewport) {
        let text = format!("terminal too small: need {}x{}", at.frame_w, at.frame_h);
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        fb.put_str(x, viewport.height / 2, &text, CellStyle::text(TEXT, SCREEN));
    }

    /// Overlay banner when the game is not running, key hints below the frame.
    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, at: &Placement) {
        let banner = if snap.playable() {
            None
        } else if snap.lost {
            Some("GAME OVER - R to restart")
        } else {
            Some("PAUSED")
        };
        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = at.frame_x + at.frame_w.saturating_sub(text_w) / 2;
            let y = at.frame_y + at.frame_h / 2;
            fb.put_str(x, y, text, CellStyle::text(TEXT, SCREEN));
        }

        let hint_y = at.frame_y.saturating_add(at.frame_h);
        if hint_y < fb.height() {
            let hint = format!(
                "length {}   arrows/WASD move   P pause   Esc quit",
                snap.snake.len()
            );
            fb.put_str(at.frame_x, hint_y, &hint, CellStyle::text(TEXT, SCREEN));
        }
    }
}

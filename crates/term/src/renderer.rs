//! TerminalRenderer: presents framebuffers on the real terminal.
//!
//! Frames are encoded into an in-memory byte buffer first and written with a
//! single flush. After the first frame only changed runs of cells are sent.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// A horizontal span of cells that differ from the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Owns the terminal session and the last presented frame.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did. Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next `present` to redraw everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame`, then hand back the previous frame's buffer in its place.
    ///
    /// Keep one framebuffer in the caller and pass it every frame; the two
    /// buffers ping-pong without cloning. The returned contents are stale and
    /// meant to be overwritten by the next render.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        match self.shown.as_ref() {
            Some(prev) if same_size(prev, frame) => encode_diff(prev, frame, &mut self.out)?,
            _ => encode_full(frame, &mut self.out)?,
        }
        self.flush()?;

        let mut prev = self
            .shown
            .take()
            .unwrap_or_else(|| FrameBuffer::new(frame.width(), frame.height()));
        mem::swap(&mut prev, frame);
        self.shown = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Clear the screen and write every cell of `frame`.
pub fn encode_full<W: Write>(frame: &FrameBuffer, out: &mut W) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in frame.row(y) {
            pen.print(out, cell.ch, cell.style)?;
        }
    }
    reset(out)
}

/// Write only the runs of `next` that differ from `prev`.
///
/// Both frames must have the same size.
pub fn encode_diff<W: Write>(prev: &FrameBuffer, next: &FrameBuffer, out: &mut W) -> Result<()> {
    let runs = changed_runs(prev, next);
    if runs.is_empty() {
        return Ok(());
    }
    let mut pen = Pen::default();
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        let row = next.row(run.y);
        for cell in &row[run.x as usize..(run.x + run.len) as usize] {
            pen.print(out, cell.ch, cell.style)?;
        }
    }
    reset(out)
}

/// Maximal runs of differing cells, row by row, left to right.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        let mut start: Option<usize> = None;
        for x in 0..new.len() {
            let dirty = old.get(x) != Some(&new[x]);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run {
                        x: s as u16,
                        y,
                        len: (x - s) as u16,
                    });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run {
                x: s as u16,
                y,
                len: (new.len() - s) as u16,
            });
        }
    }
    runs
}

/// Tracks the active terminal style so unchanged attributes are not resent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print<W: Write>(&mut self, out: &mut W, ch: char, style: CellStyle) -> Result<()> {
        if self.style != Some(style) {
            let prev = self.style;
            if prev.map(|p| p.bold) != Some(style.bold) {
                out.queue(SetAttribute(Attribute::Reset))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                // Attribute::Reset also drops colours.
                out.queue(SetForegroundColor(color(style.fg)))?
                    .queue(SetBackgroundColor(color(style.bg)))?;
            } else {
                if prev.map(|p| p.fg) != Some(style.fg) {
                    out.queue(SetForegroundColor(color(style.fg)))?;
                }
                if prev.map(|p| p.bg) != Some(style.bg) {
                    out.queue(SetBackgroundColor(color(style.bg)))?;
                }
            }
            self.style = Some(style);
        }
        out.queue(Print(ch))?;
        Ok(())
    }
}

fn reset<W: Write>(out: &mut W) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

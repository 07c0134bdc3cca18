//! Snake body: an ordered deque of segments, head at the front.

use std::collections::vec_deque::{self, VecDeque};

use crate::types::{Direction, Point};

/// One body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub pos: Point,
    /// Travel direction when this segment was the head.
    pub dir: Direction,
}

impl Segment {
    pub fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

/// Snake body.
///
/// Grows by pushing a head without popping the tail. Segments may share a
/// cell only while the spawn stack unfolds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Segment>,
}

impl Snake {
    pub fn new() -> Self {
        Self::default()
    }

    /// `len` segments stacked on `pos`, all facing `dir`.
    pub fn stacked(pos: Point, dir: Direction, len: usize) -> Self {
        Self {
            body: std::iter::repeat(Segment::new(pos, dir)).take(len).collect(),
        }
    }

    /// Build from segments listed head first.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            body: segments.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Option<&Segment> {
        self.body.front()
    }

    pub fn tail(&self) -> Option<&Segment> {
        self.body.back()
    }

    pub fn push_head(&mut self, segment: Segment) {
        self.body.push_front(segment);
    }

    pub fn pop_tail(&mut self) -> Option<Segment> {
        self.body.pop_back()
    }

    pub fn push_tail(&mut self, segment: Segment) {
        self.body.push_back(segment);
    }

    pub fn clear(&mut self) {
        self.body.clear();
    }

    pub fn occupies(&self, x: i32, y: i32) -> bool {
        self.body.iter().any(|s| s.pos.x == x && s.pos.y == y)
    }

    /// Segments from head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, Segment> {
        self.body.iter()
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a Segment;
    type IntoIter = vec_deque::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}

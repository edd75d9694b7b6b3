//! 位置模型：(行, 列) 坐标及其排序、归一化

use std::cmp::Ordering;
use std::fmt;

/// A `(line, col)` location. Columns count `char`s within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub const fn origin() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Returns `(start, end)` with `start <= end`.
    pub fn ordered(a: Position, b: Position) -> (Position, Position) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn with_col(self, col: usize) -> Self {
        Self { col, ..self }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.line, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/position.rs"]
mod tests;

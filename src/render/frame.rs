//! Frame model produced by each render tick

use serde::{Deserialize, Serialize};

use crate::state::Ability;

/// Screen position of one timer row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Fixed positions of the three timer rows, indexed by ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: [Position; 3],
}

impl Layout {
    /// Rows stacked vertically from `(x, y)`, `spacing` apart
    pub fn stacked(x: i32, y: i32, spacing: i32) -> Self {
        Self {
            rows: [0, 1, 2].map(|row| Position {
                x,
                y: y + row * spacing,
            }),
        }
    }

    pub fn position(&self, ability: Ability) -> Position {
        self.rows[ability.index()]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::stacked(100, 70, 80)
    }
}

/// One rendered timer row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerLine {
    pub label: String,
    pub text: String,
    pub armed: bool,
    pub x: i32,
    pub y: i32,
}

/// Everything the overlay shows for one tick, rows in `FS, NP, TSS` order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub timers: Vec<TimerLine>,
}

impl Frame {
    /// Whether `other` would draw the same text
    pub fn same_text(&self, other: &Frame) -> bool {
        self.timers.len() == other.timers.len()
            && self.timers.iter().zip(&other.timers).all(|(a, b)| a.text == b.text)
    }
}

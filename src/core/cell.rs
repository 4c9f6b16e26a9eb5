//! Board cells.
//!
//! Cells are numbered 1 (start) to 100 (goal) along a serpentine path:
//! the bottom row runs left to right, the row above right to left, and so on.

use serde::{Deserialize, Serialize};

/// Number of cells on a side of the board.
pub const BOARD_SIDE: u8 = 10;

/// A validated cell index in `[1, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Starting cell for every token.
    pub const START: Cell = Cell(1);
    /// Goal cell; landing here exactly wins.
    pub const GOAL: Cell = Cell(100);

    /// Create a cell, or `None` if `value` is outside `[1, 100]`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::START.0 && value <= Self::GOAL.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw cell number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Move forward by `steps`. `None` if that would pass the goal.
    ///
    /// ```
    /// use snakes_ladders::core::Cell;
    ///
    /// let cell = Cell::new(98).unwrap();
    /// assert_eq!(cell.advance(2), Some(Cell::GOAL));
    /// assert_eq!(cell.advance(5), None);
    /// ```
    #[must_use]
    pub fn advance(self, steps: u8) -> Option<Self> {
        self.0.checked_add(steps).and_then(Self::new)
    }

    /// Cells 2..=99 may host a snake or ladder endpoint; start and goal never do.
    #[must_use]
    pub const fn is_endpoint_candidate(self) -> bool {
        self.0 != Self::START.0 && self.0 != Self::GOAL.0
    }

    /// Whether this is the goal cell.
    #[must_use]
    pub const fn is_goal(self) -> bool {
        self.0 == Self::GOAL.0
    }

    /// `(row, column)` of this cell, row 0 at the bottom and column 0 on the left.
    ///
    /// ```
    /// use snakes_ladders::core::Cell;
    ///
    /// assert_eq!(Cell::START.grid(), (0, 0));
    /// assert_eq!(Cell::new(11).unwrap().grid(), (1, 9));
    /// assert_eq!(Cell::GOAL.grid(), (9, 0));
    /// ```
    #[must_use]
    pub const fn grid(self) -> (u8, u8) {
        let offset = self.0 - 1;
        let row = offset / BOARD_SIDE;
        let col = offset % BOARD_SIDE;
        if row % 2 == 1 {
            (row, BOARD_SIDE - 1 - col)
        } else {
            (row, col)
        }
    }

    /// Iterate over every cell from start to goal.
    pub fn all() -> impl Iterator<Item = Cell> {
        (Self::START.0..=Self::GOAL.0).map(Cell)
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("cell {} is outside 1-100", value))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Board layout: where the snakes and ladders are.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Cell};

/// Kind of board feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Moves a token down.
    Snake,
    /// Moves a token up.
    Ladder,
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureKind::Snake => write!(f, "snake"),
            FeatureKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// Immutable snake and ladder mappings.
///
/// Every endpoint (start or end of any feature) is distinct, lies in 2..=99,
/// snakes go down and ladders go up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    snakes: FxHashMap<Cell, Cell>,
    ladders: FxHashMap<Cell, Cell>,
}

impl Board {
    /// A board with no features.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from `(start, end)` pairs, checking every invariant.
    ///
    /// ```
    /// use snakes_ladders::board::Board;
    ///
    /// let board = Board::from_pairs(&[(17, 4)], &[(3, 22)]).unwrap();
    /// assert_eq!(board.feature_count(), 2);
    ///
    /// // 22 used twice
    /// assert!(Board::from_pairs(&[(40, 22)], &[(3, 22)]).is_err());
    /// ```
    pub fn from_pairs(snakes: &[(u8, u8)], ladders: &[(u8, u8)]) -> Result<Self, BoardError> {
        let cell = |v: u8| Cell::new(v).ok_or(BoardError::OutOfRange(v));
        let convert = |pairs: &[(u8, u8)]| -> Result<Vec<(Cell, Cell)>, BoardError> {
            pairs
                .iter()
                .map(|&(s, e)| -> Result<(Cell, Cell), BoardError> { Ok((cell(s)?, cell(e)?)) })
                .collect()
        };
        Self::new(convert(snakes)?, convert(ladders)?)
    }

    /// Build a board from cell pairs, checking every invariant.
    pub fn new(
        snakes: impl IntoIterator<Item = (Cell, Cell)>,
        ladders: impl IntoIterator<Item = (Cell, Cell)>,
    ) -> Result<Self, BoardError> {
        let mut used = FxHashSet::default();
        let mut claim = |cell: Cell| {
            if !cell.is_endpoint_candidate() {
                Err(BoardError::ReservedCell(cell))
            } else if !used.insert(cell) {
                Err(BoardError::SharedEndpoint(cell))
            } else {
                Ok(())
            }
        };

        let mut board = Self::empty();

        for (start, end) in snakes {
            if start <= end {
                return Err(BoardError::SnakeGoesUp { start, end });
            }
            claim(start)?;
            claim(end)?;
            board.snakes.insert(start, end);
        }

        for (start, end) in ladders {
            if start >= end {
                return Err(BoardError::LadderGoesDown { start, end });
            }
            claim(start)?;
            claim(end)?;
            board.ladders.insert(start, end);
        }

        Ok(board)
    }

    /// Where a snake starting at `cell` ends, if any.
    #[must_use]
    pub fn snake_at(&self, cell: Cell) -> Option<Cell> {
        self.snakes.get(&cell).copied()
    }

    /// Where a ladder starting at `cell` ends, if any.
    #[must_use]
    pub fn ladder_at(&self, cell: Cell) -> Option<Cell> {
        self.ladders.get(&cell).copied()
    }

    /// Final cell after landing on `cell`, and the feature taken to get there.
    #[must_use]
    pub fn resolve(&self, cell: Cell) -> (Cell, Option<FeatureKind>) {
        if let Some(end) = self.snake_at(cell) {
            (end, Some(FeatureKind::Snake))
        } else if let Some(end) = self.ladder_at(cell) {
            (end, Some(FeatureKind::Ladder))
        } else {
            (cell, None)
        }
    }

    /// Snakes as `(start, end)`, sorted by start.
    #[must_use]
    pub fn snakes(&self) -> Vec<(Cell, Cell)> {
        sorted(&self.snakes)
    }

    /// Ladders as `(start, end)`, sorted by start.
    #[must_use]
    pub fn ladders(&self) -> Vec<(Cell, Cell)> {
        sorted(&self.ladders)
    }

    /// Number of snakes on the board.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders on the board.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// Total snakes and ladders.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.snakes.len() + self.ladders.len()
    }

    /// The feature touching `cell` (at its start or end), if any.
    #[must_use]
    pub fn feature_touching(&self, cell: Cell) -> Option<FeatureKind> {
        let touches = |map: &FxHashMap<Cell, Cell>| {
            map.iter().any(|(&s, &e)| s == cell || e == cell)
        };
        if touches(&self.snakes) {
            Some(FeatureKind::Snake)
        } else if touches(&self.ladders) {
            Some(FeatureKind::Ladder)
        } else {
            None
        }
    }
}

fn sorted(map: &FxHashMap<Cell, Cell>) -> Vec<(Cell, Cell)> {
    let mut pairs: Vec<_> = map.iter().map(|(&s, &e)| (s, e)).collect();
    pairs.sort_unstable();
    pairs
}

/// Serialized form; deserializing re-checks the invariants.
#[derive(Serialize, Deserialize)]
struct RawBoard {
    snakes: Vec<(Cell, Cell)>,
    ladders: Vec<(Cell, Cell)>,
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self {
            snakes: board.snakes(),
            ladders: board.ladders(),
        }
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::new(raw.snakes, raw.ladders)
    }
}

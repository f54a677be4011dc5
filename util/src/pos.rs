use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
  pub row: i32,
  pub col: i32,
}

impl Pos {
  pub const fn new(row: i32, col: i32) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }

  /// `self` moved by `diff`, or `None` if either coordinate overflows.
  pub fn checked_add(self, diff: Diff) -> Option<Self> {
    Some(Self { row: self.row.checked_add(diff.row)?, col: self.col.checked_add(diff.col)? })
  }

  /// True iff `other` is one king move away. A position is never adjacent to
  /// itself.
  pub fn is_adjacent(&self, other: Pos) -> bool {
    *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub row: i32,
  pub col: i32,
}

impl Diff {
  /// The eight king-move offsets, row-major, skipping (0, 0).
  pub const KING_MOVES: [Diff; 8] = [
    Diff { row: -1, col: -1 },
    Diff { row: -1, col: 0 },
    Diff { row: -1, col: 1 },
    Diff { row: 0, col: -1 },
    Diff { row: 0, col: 1 },
    Diff { row: 1, col: -1 },
    Diff { row: 1, col: 0 },
    Diff { row: 1, col: 1 },
  ];
}

use std::fmt::Display;

use itertools::Itertools;
use util::{
  error::{WordGridError, WordGridResult},
  grid::{Grid, Gridlike},
  pos::Pos,
};

/// A letter bound to its board coordinates. `letter` is `None` until the board
/// has been filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
  letter: Option<char>,
  pos: Pos,
}

impl Cell {
  pub fn letter(&self) -> Option<char> {
    self.letter
  }

  pub fn pos(&self) -> Pos {
    self.pos
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterBoard {
  cells: Grid<Cell>,
}

impl LetterBoard {
  /// A `rows` x `cols` board with every cell unset.
  pub fn empty(rows: u32, cols: u32) -> Self {
    Self::from_fn(rows, cols, |_| None)
  }

  pub(crate) fn from_fn<F>(rows: u32, cols: u32, mut letter: F) -> Self
  where
    F: FnMut(Pos) -> Option<char>,
  {
    Self { cells: Grid::from_fn(rows, cols, |pos| Cell { letter: letter(pos), pos }) }
  }

  /// Builds a board from a rectangular letter matrix, upper-casing every
  /// letter.
  pub fn from_letters(letters: Vec<Vec<char>>) -> WordGridResult<Self> {
    let letters = Grid::from_rows(letters)?;
    Ok(Self::from_fn(letters.rows(), letters.cols(), |pos| {
      letters.get(pos).map(|c| c.to_ascii_uppercase())
    }))
  }

  /// Parses rows separated by newlines or `/`, e.g. `"cats/orex"`. Whitespace
  /// inside a row is ignored.
  pub fn parse(text: &str) -> WordGridResult<Self> {
    let rows = text
      .split(['\n', '/'])
      .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
      .filter(|row| !row.is_empty())
      .collect::<Vec<_>>();

    if let Some(&c) = rows.iter().flatten().find(|c| !c.is_ascii_alphabetic()) {
      return Err(WordGridError::Parse(format!("Unrecognized board character '{c}'")).into());
    }

    Self::from_letters(rows)
  }

  pub fn is_valid_position(&self, pos: Pos) -> bool {
    self.cells.in_bounds(pos)
  }

  /// The letter at `pos`, or `None` if `pos` is out of bounds or the cell is
  /// unset.
  pub fn letter_at(&self, pos: Pos) -> Option<char> {
    self.cells.get(pos).and_then(Cell::letter)
  }

  /// Concatenates the letters along `path`. Positions without a letter
  /// contribute nothing.
  pub fn word_from_path(&self, path: &[Pos]) -> String {
    path.iter().filter_map(|&pos| self.letter_at(pos)).collect()
  }

  /// Each row as a string, with `.` for unset cells.
  pub fn row_strings(&self) -> Vec<String> {
    (0..self.rows())
      .map(|row| {
        self
          .iter_row(row)
          .map(|cell| cell.letter.unwrap_or('.'))
          .collect()
      })
      .collect()
  }
}

impl Gridlike<Cell> for LetterBoard {
  fn rows(&self) -> u32 {
    self.cells.rows()
  }

  fn cols(&self) -> u32 {
    self.cells.cols()
  }

  fn get(&self, pos: Pos) -> Option<&Cell> {
    self.cells.get(pos)
  }
}

impl Display for LetterBoard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.row_strings().iter().try_fold((), |_, row| {
      writeln!(f, "{}", row.chars().join(" "))
    })
  }
}

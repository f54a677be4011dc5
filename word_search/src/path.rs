use std::{collections::HashSet, error::Error, fmt::Display};

use util::{grid::Gridlike, pos::Pos};

use crate::adjacency::{are_neighbors, is_position_in_path};

/// Why a path is not a legal selection. `index` is the offending position in
/// the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
  OutOfBounds { index: usize },
  NotAdjacent { index: usize },
  AlreadyUsed { index: usize },
}

impl PathError {
  pub fn reason(&self) -> &'static str {
    match self {
      PathError::OutOfBounds { .. } => "out_of_bounds",
      PathError::NotAdjacent { .. } => "not_adjacent",
      PathError::AlreadyUsed { .. } => "already_used",
    }
  }

  pub fn index(&self) -> usize {
    match *self {
      PathError::OutOfBounds { index }
      | PathError::NotAdjacent { index }
      | PathError::AlreadyUsed { index } => index,
    }
  }
}

impl Display for PathError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PathError::OutOfBounds { index } => write!(f, "Position {index} out of bounds"),
      PathError::NotAdjacent { index } => {
        write!(f, "Positions {} and {index} are not neighbors", index - 1)
      }
      PathError::AlreadyUsed { index } => write!(f, "Position {index} already used"),
    }
  }
}

impl Error for PathError {}

/// Checks that every position of `path` is in bounds, each step is a king
/// move, and no position repeats. Stops at the first violation.
pub fn validate_path<T>(grid: &impl Gridlike<T>, path: &[Pos]) -> Result<(), PathError> {
  let Some((&first, rest)) = path.split_first() else {
    return Ok(());
  };
  if !grid.in_bounds(first) {
    return Err(PathError::OutOfBounds { index: 0 });
  }

  let mut seen = HashSet::from([first]);
  rest
    .iter()
    .enumerate()
    .try_fold(first, |previous, (idx, &current)| {
      let index = idx + 1;
      if !grid.in_bounds(current) {
        return Err(PathError::OutOfBounds { index });
      }
      if !are_neighbors(previous, current) {
        return Err(PathError::NotAdjacent { index });
      }
      if !seen.insert(current) {
        return Err(PathError::AlreadyUsed { index });
      }
      Ok(current)
    })
    .map(|_| ())
}

/// Whether `candidate` may be appended to `path` as the next step of a live
/// selection.
pub fn can_add_to_path<T>(grid: &impl Gridlike<T>, path: &[Pos], candidate: Pos) -> bool {
  if !grid.in_bounds(candidate) {
    return false;
  }
  match path.last() {
    None => true,
    Some(&last) => are_neighbors(last, candidate) && !is_position_in_path(path, candidate),
  }
}

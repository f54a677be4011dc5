use std::fmt::Debug;

use crate::{
  error::{WordGridError, WordGridResult},
  pos::Pos,
};

pub trait Gridlike<T> {
  fn rows(&self) -> u32;
  fn cols(&self) -> u32;

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.row >= 0 && pos.row < self.rows() as i32 && pos.col >= 0 && pos.col < self.cols() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T>;

  fn iter_row<'a>(&'a self, row: u32) -> impl Iterator<Item = &'a T>
  where
    T: 'a,
  {
    let row = row as i32;
    (0..self.cols()).flat_map(move |col| self.get(Pos { row, col: col as i32 }))
  }

  /// All in-bounds positions in row-major order.
  fn positions(&self) -> impl Iterator<Item = Pos> {
    let cols = self.cols() as i32;
    (0..self.rows() as i32).flat_map(move |row| (0..cols).map(move |col| Pos { row, col }))
  }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
  grid: Vec<T>,
  rows: u32,
  cols: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, rows: u32, cols: u32) -> WordGridResult<Self> {
    let expected_size = rows as usize * cols as usize;
    if grid.len() != expected_size {
      return Err(
        WordGridError::Internal(format!(
          "Expected grid.len() == expected_size, {} != {expected_size}",
          grid.len()
        ))
        .into(),
      );
    }

    Ok(Self { grid, rows, cols })
  }

  /// Builds a grid from a list of equal-length rows. A grid with no columns
  /// collapses to 0 x 0.
  pub fn from_rows(rows: Vec<Vec<T>>) -> WordGridResult<Self> {
    let cols = rows.first().map(|row| row.len()).unwrap_or(0);
    if cols == 0 {
      if rows.iter().any(|row| !row.is_empty()) {
        return Err(WordGridError::Parse("Grid rows differ in length".to_owned()).into());
      }
      return Ok(Self { grid: vec![], rows: 0, cols: 0 });
    }

    let num_rows = rows.len() as u32;
    let grid = rows.into_iter().enumerate().try_fold(
      Vec::with_capacity(num_rows as usize * cols),
      |mut grid, (idx, row)| -> WordGridResult<_> {
        if row.len() != cols {
          return Err(
            WordGridError::Parse(format!(
              "Grid row {idx} has length {}, expected {cols}",
              row.len()
            ))
            .into(),
          );
        }
        grid.extend(row);
        Ok(grid)
      },
    )?;

    Self::from_vec(grid, num_rows, cols as u32)
  }

  /// Builds a grid by evaluating `f` at every position.
  pub fn from_fn<F>(rows: u32, cols: u32, mut f: F) -> Self
  where
    F: FnMut(Pos) -> T,
  {
    let (rows, cols) = if rows == 0 || cols == 0 { (0, 0) } else { (rows, cols) };
    let grid = (0..rows as i32)
      .flat_map(|row| (0..cols as i32).map(move |col| Pos { row, col }))
      .map(&mut f)
      .collect();
    Self { grid, rows, cols }
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    let row = pos.row as usize;
    let col = pos.col as usize;
    col + row * self.cols as usize
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn rows(&self) -> u32 {
    self.rows
  }

  fn cols(&self) -> u32 {
    self.cols
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self
      .in_bounds(pos)
      .then(|| self.grid.get(self.idx(pos)))
      .flatten()
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.rows).try_fold((), |_, row| {
      self.iter_row(row).try_fold((), |_, t| write!(f, "{t:?} "))?;
      writeln!(f)
    })
  }
}

impl<G, T> Gridlike<T> for &G
where
  G: Gridlike<T>,
{
  fn rows(&self) -> u32 {
    (**self).rows()
  }
  fn cols(&self) -> u32 {
    (**self).cols()
  }
  fn get(&self, pos: Pos) -> Option<&T> {
    (**self).get(pos)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use crate::pos::Pos;

  use super::{Grid, Gridlike};

  #[gtest]
  fn test_from_fn() {
    let grid = Grid::from_fn(2, 3, |pos| pos.row * 10 + pos.col);
    expect_that!(grid.rows(), eq(2));
    expect_that!(grid.cols(), eq(3));
    expect_that!(grid.get(Pos::new(1, 2)), some(eq(&12)));
  }

  #[gtest]
  fn test_empty_collapses() {
    let grid = Grid::from_fn(3, 0, |_| 0u32);
    expect_that!((grid.rows(), grid.cols()), eq((0u32, 0u32)));

    let grid = Grid::<u32>::from_rows(vec![vec![]]);
    assert_that!(grid, ok(anything()));
    let grid = grid.unwrap();
    expect_that!((grid.rows(), grid.cols()), eq((0u32, 0u32)));
  }

  #[gtest]
  fn test_from_rows_ragged() {
    let grid = Grid::from_rows(vec![vec![1, 2], vec![3]]);
    expect_that!(grid, err(anything()));
  }

  #[gtest]
  fn test_from_vec_length_mismatch() {
    expect_that!(Grid::from_vec(vec![1, 2, 3], 2, 2), err(anything()));
  }

  #[gtest]
  fn test_in_bounds() {
    let grid = Grid::from_fn(2, 3, |_| ());
    for row in -2..4 {
      for col in -2..5 {
        expect_eq!(
          grid.in_bounds(Pos::new(row, col)),
          (0..2).contains(&row) && (0..3).contains(&col)
        );
      }
    }
  }

  #[gtest]
  fn test_get_and_rows() {
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    expect_that!(grid.get(Pos::new(1, 0)), some(eq(&4)));
    expect_that!(grid.get(Pos::new(2, 0)), none());
    expect_that!(grid.get(Pos::new(0, -1)), none());
    expect_that!(grid.iter_row(1).cloned().collect::<Vec<_>>(), container_eq([4, 5, 6]));
    expect_that!(format!("{grid:?}"), eq("1 2 3 \n4 5 6 \n"));
  }

  #[gtest]
  fn test_positions_row_major() {
    let grid = Grid::from_fn(2, 2, |_| ());
    expect_that!(
      grid.positions().collect::<Vec<_>>(),
      container_eq([Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)])
    );
  }
}

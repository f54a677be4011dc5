use std::collections::BTreeSet;

use log::trace;
use util::{grid::Gridlike, pos::Pos};
use word_dict::{meets_length_requirement, Dictionary};

use crate::{
  adjacency::{is_position_in_path, neighbors},
  board::LetterBoard,
  config::FinderConfig,
};

/// Enumerates dictionary words spelled by king-move paths on a board, never
/// revisiting a cell within one word.
pub struct WordFinder<'a> {
  dict: &'a Dictionary,
  config: FinderConfig,
}

struct SearchState {
  path: Vec<Pos>,
  word: String,
  found: BTreeSet<String>,
}

impl<'a> WordFinder<'a> {
  pub fn new(dict: &'a Dictionary, config: FinderConfig) -> Self {
    Self { dict, config }
  }

  /// Every word discoverable from any starting cell, sorted and without
  /// duplicates. Unset cells are never part of a word.
  pub fn find_all_words(&self, board: &LetterBoard) -> Vec<String> {
    let mut state = SearchState { path: Vec::new(), word: String::new(), found: BTreeSet::new() };

    for pos in board.positions() {
      let Some(letter) = board.letter_at(pos) else {
        continue;
      };
      state.path.push(pos);
      state.word.push(letter);
      self.extend(board, &mut state);
      state.path.pop();
      state.word.pop();
    }

    trace!("Found {} words on {}x{} board", state.found.len(), board.rows(), board.cols());
    state.found.into_iter().collect()
  }

  pub fn count_words(&self, board: &LetterBoard) -> usize {
    self.find_all_words(board).len()
  }

  fn extend(&self, board: &LetterBoard, state: &mut SearchState) {
    // Length goes first so over-long branches never cost a prefix lookup.
    if state.path.len() > self.config.max_word_length {
      return;
    }
    // No extension of a non-prefix can become a word.
    if !self.dict.is_valid_prefix(&state.word) {
      return;
    }

    if meets_length_requirement(
      &state.word,
      self.config.min_word_length,
      Some(self.config.max_word_length),
    ) && self.dict.is_valid_word(&state.word)
    {
      state.found.insert(state.word.clone());
    }

    let Some(&last) = state.path.last() else {
      return;
    };
    for neighbor in neighbors(board, last) {
      if is_position_in_path(&state.path, neighbor) {
        continue;
      }
      let Some(letter) = board.letter_at(neighbor) else {
        continue;
      };

      state.path.push(neighbor);
      state.word.push(letter);
      self.extend(board, state);
      state.path.pop();
      state.word.pop();
    }
  }
}

pub fn find_all_words(board: &LetterBoard, dict: &Dictionary, config: FinderConfig) -> Vec<String> {
  WordFinder::new(dict, config).find_all_words(board)
}

pub fn count_words_in_grid(board: &LetterBoard, dict: &Dictionary, config: FinderConfig) -> usize {
  WordFinder::new(dict, config).count_words(board)
}

/// Finds some path spelling `word` (case-insensitive), or `None` if the board
/// has no such path. Guided only by the letters of `word`, so no dictionary is
/// needed.
pub fn find_word_in_grid(board: &LetterBoard, word: &str) -> Option<Vec<Pos>> {
  let target: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
  let &first = target.first()?;

  board
    .positions()
    .filter(|&pos| board.letter_at(pos) == Some(first))
    .find_map(|start| {
      let mut path = vec![start];
      trace_word(board, &target, &mut path).then_some(path)
    })
}

fn trace_word(board: &LetterBoard, target: &[char], path: &mut Vec<Pos>) -> bool {
  let Some(&next_letter) = target.get(path.len()) else {
    return true;
  };
  let Some(&last) = path.last() else {
    return false;
  };

  for neighbor in neighbors(board, last) {
    if is_position_in_path(path, neighbor) || board.letter_at(neighbor) != Some(next_letter) {
      continue;
    }
    path.push(neighbor);
    if trace_word(board, target, path) {
      return true;
    }
    path.pop();
  }
  false
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use googletest::matchers::is_empty as empty;
  use util::pos::Pos;
  use word_dict::Dictionary;

  use crate::{
    board::LetterBoard,
    config::FinderConfig,
    path::validate_path,
    test_util::{sample_board, test_dict},
  };

  use super::{count_words_in_grid, find_all_words, find_word_in_grid};

  const THREE_TO_FIVE: FinderConfig = FinderConfig { min_word_length: 3, max_word_length: 5 };

  #[gtest]
  fn test_sample_board() {
    let words = find_all_words(&sample_board(), &test_dict(), THREE_TO_FIVE);
    expect_that!(
      words,
      container_eq([
        "ATE", "CAT", "CATS", "CRATE", "EAR", "RAT", "RED", "ROWER", "SEAT", "TEA", "WORD"
      ]
      .map(str::to_owned))
    );
  }

  #[gtest]
  fn test_respects_length_bounds() {
    let words = find_all_words(&sample_board(), &test_dict(), THREE_TO_FIVE);
    expect_that!(words, contains(eq("CAT")));
    expect_that!(words, contains(eq("WORD")));
    expect_that!(words, contains(eq("SEAT")));
    expect_that!(words, not(contains(eq("AT"))));
    expect_that!(words, not(contains(eq("CRATER"))));
    expect_true!(words.iter().all(|word| (3..=5).contains(&word.len())));
  }

  #[gtest]
  fn test_default_config() {
    let words = find_all_words(&sample_board(), &test_dict(), FinderConfig::default());
    expect_that!(
      words,
      container_eq(["CATS", "CRATE", "CRATER", "ROWER", "SEAT", "WORD"].map(str::to_owned))
    );
  }

  #[gtest]
  fn test_no_revisits() {
    // "ABA" would need to reuse the only A.
    let board = LetterBoard::parse("ab").unwrap();
    let dict = Dictionary::new(["aba", "ab"]);
    let config = FinderConfig { min_word_length: 2, max_word_length: 3 };
    expect_that!(find_all_words(&board, &dict, config), container_eq(["AB".to_owned()]));
  }

  #[gtest]
  fn test_duplicate_paths_reported_once() {
    let board = LetterBoard::parse("aa/aa").unwrap();
    let dict = Dictionary::new(["aa"]);
    let config = FinderConfig { min_word_length: 2, max_word_length: 4 };
    expect_that!(find_all_words(&board, &dict, config), container_eq(["AA".to_owned()]));
  }

  #[gtest]
  fn test_empty_inputs() {
    let config = FinderConfig::default();
    expect_that!(find_all_words(&LetterBoard::empty(0, 0), &test_dict(), config), empty());
    expect_that!(find_all_words(&LetterBoard::empty(3, 3), &test_dict(), config), empty());
    let dict = Dictionary::new(Vec::<String>::new());
    expect_that!(find_all_words(&sample_board(), &dict, config), empty());
  }

  #[gtest]
  fn test_deterministic() {
    let board = sample_board();
    let dict = test_dict();
    expect_eq!(
      count_words_in_grid(&board, &dict, THREE_TO_FIVE),
      find_all_words(&board, &dict, THREE_TO_FIVE).len()
    );
    expect_that!(
      find_all_words(&board, &dict, THREE_TO_FIVE),
      container_eq(find_all_words(&board, &dict, THREE_TO_FIVE))
    );
  }

  #[gtest]
  fn test_find_word_backtracks() {
    let board = LetterBoard::parse("stox/xxox/xxpx").unwrap();
    expect_that!(
      find_word_in_grid(&board, "STOP"),
      some(container_eq([Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 2)]))
    );
  }

  #[gtest]
  fn test_find_word_case_insensitive() {
    let path = find_word_in_grid(&sample_board(), "word").unwrap();
    expect_that!(sample_board().word_from_path(&path), eq("WORD"));
  }

  #[gtest]
  fn test_find_word_missing() {
    let board = sample_board();
    expect_that!(find_word_in_grid(&board, "DOG"), none());
    expect_that!(find_word_in_grid(&board, "SAT"), none());
    expect_that!(find_word_in_grid(&board, ""), none());
    expect_that!(find_word_in_grid(&LetterBoard::empty(2, 2), "A"), none());
  }

  #[gtest]
  fn test_find_word_cannot_reuse_cell() {
    let board = LetterBoard::parse("ab").unwrap();
    expect_that!(find_word_in_grid(&board, "ABA"), none());
  }

  #[gtest]
  fn test_found_words_have_paths() {
    let board = sample_board();
    let dict = test_dict();
    let config = FinderConfig { min_word_length: 1, max_word_length: 8 };
    for word in find_all_words(&board, &dict, config) {
      let path = find_word_in_grid(&board, &word);
      assert_that!(path, some(anything()));
      let path = path.unwrap();
      expect_eq!(path.len(), word.len());
      expect_that!(board.word_from_path(&path), eq(&word));
      expect_true!(validate_path(&board, &path).is_ok());
    }
  }
}

use log::debug;
use rand::Rng;
use serde::Serialize;
use util::pos::Pos;
use word_dict::{meets_length_requirement, Dictionary};

use crate::{
  board::LetterBoard,
  config::GridConfig,
  finder::WordFinder,
  generator::generate_grid,
  path::{can_add_to_path, validate_path, PathError},
  scoring::{calculate_total_score, calculate_word_score},
};

/// A word the player has claimed, with the path that spelled it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FoundWord {
  pub word: String,
  pub path: Vec<Pos>,
  pub points: u32,
}

/// One board being played: the board and its word list stay fixed until
/// `new_game`, while found words and the live selection change as the player
/// plays.
pub struct GameSession<'a> {
  dict: &'a Dictionary,
  config: GridConfig,
  max_attempts: u32,
  board: LetterBoard,
  valid_words: Vec<String>,
  found_words: Vec<FoundWord>,
  current_path: Vec<Pos>,
  selecting: bool,
}

impl<'a> GameSession<'a> {
  pub fn new<R: Rng>(
    dict: &'a Dictionary,
    config: GridConfig,
    max_attempts: u32,
    rng: &mut R,
  ) -> Self {
    let generated = generate_grid(&config, dict, max_attempts, rng);
    Self::with_words(dict, config, max_attempts, generated.board, generated.words)
  }

  /// Plays a fixed board instead of a generated one.
  pub fn from_board(dict: &'a Dictionary, config: GridConfig, board: LetterBoard) -> Self {
    let valid_words = WordFinder::new(dict, config.finder_config()).find_all_words(&board);
    Self::with_words(dict, config, 0, board, valid_words)
  }

  fn with_words(
    dict: &'a Dictionary,
    config: GridConfig,
    max_attempts: u32,
    board: LetterBoard,
    valid_words: Vec<String>,
  ) -> Self {
    Self {
      dict,
      config,
      max_attempts,
      board,
      valid_words,
      found_words: Vec::new(),
      current_path: Vec::new(),
      selecting: false,
    }
  }

  pub fn config(&self) -> &GridConfig {
    &self.config
  }

  pub fn board(&self) -> &LetterBoard {
    &self.board
  }

  pub fn valid_words(&self) -> &[String] {
    &self.valid_words
  }

  pub fn found_words(&self) -> &[FoundWord] {
    &self.found_words
  }

  pub fn current_path(&self) -> &[Pos] {
    &self.current_path
  }

  pub fn is_selecting(&self) -> bool {
    self.selecting
  }

  pub fn score(&self) -> u32 {
    calculate_total_score(&self.found_words)
  }

  pub fn is_found(&self, word: &str) -> bool {
    self.found_words.iter().any(|found| found.word == word)
  }

  /// Valid words the player hasn't found yet.
  pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
    self
      .valid_words
      .iter()
      .map(String::as_str)
      .filter(|word| !self.is_found(word))
  }

  /// Starts a new selection at `pos`, discarding any selection in progress.
  /// Returns false and leaves the session untouched if `pos` is off the board.
  pub fn start_selection(&mut self, pos: Pos) -> bool {
    if !self.board.is_valid_position(pos) {
      return false;
    }
    self.current_path = vec![pos];
    self.selecting = true;
    true
  }

  /// Appends `pos` to the selection if it is a legal next step.
  pub fn extend_selection(&mut self, pos: Pos) -> bool {
    if !self.selecting || !can_add_to_path(&self.board, &self.current_path, pos) {
      return false;
    }
    self.current_path.push(pos);
    true
  }

  pub fn current_word(&self) -> String {
    self.board.word_from_path(&self.current_path)
  }

  pub fn current_word_is_valid(&self) -> bool {
    let word = self.current_word();
    meets_length_requirement(&word, self.config.min_word_length, None)
      && self.dict.is_valid_word(&word)
  }

  /// Finishes the selection. The word is recorded if it is long enough, in the
  /// dictionary, and not already found. The selection is cleared either way.
  pub fn end_selection(&mut self) -> Option<FoundWord> {
    let path = std::mem::take(&mut self.current_path);
    self.selecting = false;

    let word = self.board.word_from_path(&path);
    if !meets_length_requirement(&word, self.config.min_word_length, None)
      || !self.dict.is_valid_word(&word)
      || self.is_found(&word)
    {
      debug!("Rejected selection \"{word}\"");
      return None;
    }

    let points = calculate_word_score(word.chars().count(), self.config.min_word_length);
    debug!("Found \"{word}\" for {points} points");
    let found = FoundWord { word, path, points };
    self.found_words.push(found.clone());
    Some(found)
  }

  /// Plays a complete path in one go.
  pub fn submit_path(&mut self, path: &[Pos]) -> Result<Option<FoundWord>, PathError> {
    validate_path(&self.board, path)?;
    self.current_path = path.to_vec();
    self.selecting = true;
    Ok(self.end_selection())
  }

  /// Replaces the board with a freshly generated one and clears all progress.
  pub fn new_game<R: Rng>(&mut self, rng: &mut R) {
    let generated = generate_grid(&self.config, self.dict, self.max_attempts, rng);
    *self = Self::with_words(
      self.dict,
      self.config,
      self.max_attempts,
      generated.board,
      generated.words,
    );
  }

  /// Keeps the board but forgets found words and any selection.
  pub fn reset(&mut self) {
    self.found_words.clear();
    self.current_path.clear();
    self.selecting = false;
  }
}

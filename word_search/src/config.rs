use serde::{Deserialize, Serialize};
use util::error::{WordGridError, WordGridResult};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Parameters for generating one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
  pub rows: u32,
  pub cols: u32,
  pub min_words: usize,
  pub min_word_length: usize,
  pub max_word_length: usize,
}

impl GridConfig {
  pub fn validate(&self) -> WordGridResult {
    if self.rows == 0 || self.cols == 0 {
      return Err(
        WordGridError::Config(format!("Board must be non-empty, got {}x{}", self.rows, self.cols))
          .into(),
      );
    }
    if self.min_word_length == 0 {
      return Err(WordGridError::Config("Minimum word length must be positive".to_owned()).into());
    }
    if self.min_word_length > self.max_word_length {
      return Err(
        WordGridError::Config(format!(
          "Minimum word length {} exceeds maximum {}",
          self.min_word_length, self.max_word_length
        ))
        .into(),
      );
    }
    Ok(())
  }

  pub fn finder_config(&self) -> FinderConfig {
    FinderConfig { min_word_length: self.min_word_length, max_word_length: self.max_word_length }
  }
}

impl Default for GridConfig {
  fn default() -> Self {
    Self { rows: 4, cols: 4, min_words: 20, min_word_length: 4, max_word_length: 15 }
  }
}

/// Word length bounds for enumeration, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
  pub min_word_length: usize,
  pub max_word_length: usize,
}

impl Default for FinderConfig {
  fn default() -> Self {
    GridConfig::default().finder_config()
  }
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use word_search::config::{GridConfig, DEFAULT_MAX_ATTEMPTS};

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
  /// Generate a board and list every word on it.
  Generate,
  /// List every word on the board given by `--letters`.
  Solve,
  /// Play a generated board from stdin.
  Play,
  /// Compile a plain-text word list into a binary dictionary.
  CompileDict,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[arg(long, default_value = "generate")]
  pub mode: RunMode,

  /// Word list, one word per line, or a dictionary compiled with
  /// `--mode compile-dict` (`.bin`).
  #[arg(long)]
  pub dict: PathBuf,

  #[arg(long, default_value_t = 4)]
  pub rows: u32,

  #[arg(long, default_value_t = 4)]
  pub cols: u32,

  #[arg(long, default_value_t = 20)]
  pub min_words: usize,

  #[arg(long, default_value_t = 4)]
  pub min_len: usize,

  #[arg(long, default_value_t = 15)]
  pub max_len: usize,

  #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
  pub max_attempts: u32,

  /// Seed for reproducible boards.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Board rows separated by `/`, e.g. `cats/orex/word/seat`.
  #[arg(long)]
  pub letters: Option<String>,

  #[arg(long)]
  pub json: bool,

  #[arg(long, default_value = "dict.bin")]
  pub out: PathBuf,
}

impl Args {
  pub fn grid_config(&self) -> GridConfig {
    GridConfig {
      rows: self.rows,
      cols: self.cols,
      min_words: self.min_words,
      min_word_length: self.min_len,
      max_word_length: self.max_len,
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use clap::Parser;
  use googletest::prelude::*;
  use word_search::config::GridConfig;

  use super::{Args, RunMode};

  #[gtest]
  fn test_defaults_match_grid_config() {
    let args = Args::try_parse_from(["word-grid", "--dict", "words.txt"]).unwrap();
    expect_true!(matches!(args.mode, RunMode::Generate));
    expect_eq!(args.grid_config(), GridConfig::default());
    expect_that!(args.seed, none());
  }

  #[gtest]
  fn test_solve_args() {
    let args = Args::try_parse_from([
      "word-grid",
      "--dict",
      "words.bin",
      "--mode",
      "solve",
      "--letters",
      "cats/orex",
      "--min-len",
      "3",
      "--seed",
      "7",
    ])
    .unwrap();
    expect_true!(matches!(args.mode, RunMode::Solve));
    expect_that!(args.letters.as_deref(), some(eq("cats/orex")));
    expect_that!(args.grid_config().min_word_length, eq(3));
    expect_that!(args.seed, some(eq(7)));
  }

  #[gtest]
  fn test_rejects_unknown_mode() {
    expect_that!(
      Args::try_parse_from(["word-grid", "--dict", "words.txt", "--mode", "fly"]),
      err(anything())
    );
  }

  #[gtest]
  fn test_dict_is_required() {
    expect_that!(Args::try_parse_from(["word-grid"]), err(anything()));
    expect_that!(Args::try_parse_from(["word-grid", "--mode", "solve"]), err(anything()));
  }
}

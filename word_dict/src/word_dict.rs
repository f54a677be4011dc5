use std::collections::HashSet;

use bitcode::{Decode, Encode};
use itertools::Itertools;
use log::{debug, info};
use once_cell::sync::OnceCell;
use regex::Regex;
use util::error::{WordGridError, WordGridResult};

/// Lines of a word list that can appear on a board: ascii letters only.
const WORD_PATTERN: &str = "^[A-Za-z]+$";

#[derive(Encode, Decode)]
struct CompiledWords {
  words: Vec<String>,
}

/// A fixed word list supporting exact membership and prefix queries.
///
/// Words are stored lowercase, sorted and without duplicates. Queries are
/// case-insensitive. The exact-membership set is only built on the first
/// `is_valid_word` call.
#[derive(Debug)]
pub struct Dictionary {
  words: Vec<String>,
  word_set: OnceCell<HashSet<String>>,
}

impl Dictionary {
  fn canonicalize_word(word: &str) -> String {
    word.trim().to_ascii_lowercase()
  }

  pub fn new<S>(words: impl IntoIterator<Item = S>) -> Self
  where
    S: AsRef<str>,
  {
    let words = words
      .into_iter()
      .map(|word| Self::canonicalize_word(word.as_ref()))
      .filter(|word| !word.is_empty())
      .sorted()
      .dedup()
      .collect();
    Self { words, word_set: OnceCell::new() }
  }

  /// Parses a plain-text word list, one word per line. Blank lines and lines
  /// starting with `#` are skipped, as is anything that is not purely
  /// alphabetic.
  pub fn parse_word_list(text: &str) -> WordGridResult<Self> {
    let word_re = Regex::new(WORD_PATTERN)?;
    let (accepted, rejected): (Vec<_>, Vec<_>) = text
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
      .partition(|line| word_re.is_match(line));

    if !rejected.is_empty() {
      debug!("Skipped {} non-alphabetic word list entries", rejected.len());
    }

    let dict = Self::new(accepted);
    if dict.is_empty() {
      return Err(WordGridError::Parse("Word list contains no usable words".to_owned()).into());
    }

    info!("Loaded dictionary with {} words", dict.len());
    Ok(dict)
  }

  pub fn encode(&self) -> Vec<u8> {
    bitcode::encode(&CompiledWords { words: self.words.clone() })
  }

  pub fn decode(bytes: &[u8]) -> WordGridResult<Self> {
    let CompiledWords { words } = bitcode::decode(bytes)?;
    let dict = Self::new(words);
    info!("Loaded compiled dictionary with {} words", dict.len());
    Ok(dict)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// All words, lowercase and sorted.
  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(String::as_str)
  }

  fn word_set(&self) -> &HashSet<String> {
    self.word_set.get_or_init(|| {
      debug!("Building membership set for {} words", self.words.len());
      self.words.iter().map(|word| word.to_ascii_uppercase()).collect()
    })
  }

  pub fn is_valid_word(&self, word: &str) -> bool {
    self.word_set().contains(&word.to_ascii_uppercase())
  }

  /// True iff some word in the dictionary starts with `prefix`. The empty
  /// prefix is always valid.
  pub fn is_valid_prefix(&self, prefix: &str) -> bool {
    if prefix.is_empty() {
      return true;
    }

    let target = prefix.to_ascii_lowercase();
    // The first word not less than `target` is the only candidate: anything
    // carrying the prefix sorts at or after it, and before any word that
    // doesn't.
    let idx = self.words.partition_point(|word| word.as_str() < target.as_str());
    self
      .words
      .get(idx)
      .is_some_and(|word| word.starts_with(&target))
  }
}

/// Whether `word` has at least `min_length` letters and, if given, at most
/// `max_length`.
pub fn meets_length_requirement(word: &str, min_length: usize, max_length: Option<usize>) -> bool {
  let len = word.chars().count();
  len >= min_length && max_length.map_or(true, |max_length| len <= max_length)
}

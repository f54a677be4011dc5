#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use word_dict::Dictionary;

use crate::board::LetterBoard;

/// C A T S
/// O R E X
/// W O R D
/// S E A T
pub const SAMPLE_BOARD: &str = "cats/orex/word/seat";

pub fn sample_board() -> LetterBoard {
  LetterBoard::parse(SAMPLE_BOARD).unwrap()
}

pub fn test_dict() -> Dictionary {
  Dictionary::new([
    "at", "or", "ate", "cat", "cats", "crate", "crater", "dog", "ear", "rat", "red", "rod",
    "rower", "sat", "seat", "tea", "word", "zebra",
  ])
}

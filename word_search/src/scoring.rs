use crate::session::FoundWord;

/// Points by `word_length - min_length`. Longer words score the last entry.
pub const SCORING_TABLE: [u32; 10] = [5, 8, 13, 21, 34, 55, 89, 144, 233, 377];

pub fn calculate_word_score(word_length: usize, min_length: usize) -> u32 {
  word_length
    .checked_sub(min_length)
    .map(|idx| SCORING_TABLE[idx.min(SCORING_TABLE.len() - 1)])
    .unwrap_or(0)
}

pub fn calculate_total_score(found_words: &[FoundWord]) -> u32 {
  found_words.iter().map(|found| found.points).sum()
}

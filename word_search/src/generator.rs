use log::{debug, info, warn};
use rand::Rng;
use util::grid::Gridlike;
use word_dict::Dictionary;

use crate::{board::LetterBoard, config::GridConfig, finder::WordFinder};

/// Relative letter weights, roughly English letter frequency. Iteration order
/// matters for the draw in `random_letter`.
pub const LETTER_WEIGHTS: [(char, f64); 26] = [
  ('E', 12.7),
  ('T', 9.1),
  ('A', 8.2),
  ('O', 7.5),
  ('I', 7.0),
  ('N', 6.7),
  ('S', 6.3),
  ('H', 6.1),
  ('R', 6.0),
  ('D', 4.3),
  ('L', 4.0),
  ('C', 2.8),
  ('U', 2.8),
  ('M', 2.4),
  ('W', 2.4),
  ('F', 2.2),
  ('G', 2.0),
  ('Y', 2.0),
  ('P', 1.9),
  ('B', 1.5),
  ('V', 1.0),
  ('K', 0.8),
  ('J', 0.2),
  ('X', 0.2),
  ('Q', 0.1),
  ('Z', 0.1),
];

fn total_weight() -> f64 {
  LETTER_WEIGHTS.iter().map(|&(_, weight)| weight).sum()
}

/// Draws a letter with probability proportional to its weight in
/// `LETTER_WEIGHTS`.
pub fn random_letter<R: Rng>(rng: &mut R) -> char {
  let mut remainder = rng.random_range(0.0..total_weight());
  for &(letter, weight) in &LETTER_WEIGHTS {
    remainder -= weight;
    if remainder <= 0.0 {
      return letter;
    }
  }
  // Only reachable through float rounding on the final subtraction.
  'E'
}

/// A copy of `board` with every cell replaced by a random letter.
pub fn fill_with_random_letters<R: Rng>(board: &LetterBoard, rng: &mut R) -> LetterBoard {
  LetterBoard::from_fn(board.rows(), board.cols(), |_| Some(random_letter(&mut *rng)))
}

#[derive(Clone, Debug)]
pub struct GeneratedBoard {
  pub board: LetterBoard,
  /// Every word on `board`, sorted.
  pub words: Vec<String>,
  pub attempts: u32,
  /// False if no attempt reached `min_words` and `board` is only the last try.
  pub accepted: bool,
}

/// Fills random boards until one holds at least `config.min_words` words. After
/// `max_attempts` failures the last board is returned anyway, with `accepted`
/// unset. At least one attempt is always made.
pub fn generate_grid<R: Rng>(
  config: &GridConfig,
  dict: &Dictionary,
  max_attempts: u32,
  rng: &mut R,
) -> GeneratedBoard {
  let finder = WordFinder::new(dict, config.finder_config());
  let max_attempts = max_attempts.max(1);
  let empty = LetterBoard::empty(config.rows, config.cols);

  let mut attempts = 0;
  loop {
    attempts += 1;
    let board = fill_with_random_letters(&empty, rng);
    let words = finder.find_all_words(&board);

    if words.len() >= config.min_words {
      info!("Accepted board with {} words after {attempts} attempt(s)", words.len());
      return GeneratedBoard { board, words, attempts, accepted: true };
    }
    if attempts >= max_attempts {
      warn!(
        "No board reached {} words in {max_attempts} attempts, keeping one with {}",
        config.min_words,
        words.len()
      );
      return GeneratedBoard { board, words, attempts, accepted: false };
    }
    debug!("Attempt {attempts}: {} words, need {}", words.len(), config.min_words);
  }
}

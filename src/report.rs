use serde::Serialize;
use util::{error::WordGridResult, pos::Pos};
use word_search::{
  board::LetterBoard, config::GridConfig, finder::find_word_in_grid,
  scoring::calculate_word_score,
};

#[derive(Serialize)]
struct WordEntry {
  word: String,
  points: u32,
  path: Option<Vec<Pos>>,
}

/// Everything known about one board, for printing.
#[derive(Serialize)]
pub struct BoardReport {
  config: GridConfig,
  board: Vec<String>,
  attempts: Option<u32>,
  accepted: Option<bool>,
  words: Vec<WordEntry>,
  total_points: u32,
}

impl BoardReport {
  pub fn new(config: GridConfig, board: &LetterBoard, words: &[String]) -> Self {
    let words: Vec<_> = words
      .iter()
      .map(|word| WordEntry {
        word: word.clone(),
        points: calculate_word_score(word.chars().count(), config.min_word_length),
        path: find_word_in_grid(board, word),
      })
      .collect();
    let total_points = words.iter().map(|entry| entry.points).sum();

    Self {
      config,
      board: board.row_strings(),
      attempts: None,
      accepted: None,
      words,
      total_points,
    }
  }

  pub fn with_generation(self, attempts: u32, accepted: bool) -> Self {
    Self { attempts: Some(attempts), accepted: Some(accepted), ..self }
  }

  pub fn to_json(&self) -> WordGridResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  pub fn to_text(&self) -> String {
    let mut text: String = self.board.iter().map(|row| format!("{row}\n")).collect();
    if let (Some(attempts), Some(accepted)) = (self.attempts, self.accepted) {
      let status = if accepted { "accepted" } else { "best effort" };
      text += &format!("\n{attempts} attempt(s), {status}\n");
    }
    text += &format!("\n{} words, {} points available\n", self.words.len(), self.total_points);
    for entry in &self.words {
      text += &format!("{:>5}  {}\n", entry.points, entry.word);
    }
    text
  }
}

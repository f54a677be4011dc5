use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;
use rand::Rng;
use util::{
  error::{WordGridError, WordGridResult},
  pos::Pos,
};
use word_search::{finder::find_word_in_grid, session::GameSession};

const HELP: &str = "Enter a word, or a path as `row,col row,col ...`.
Commands: board, words, score, reset, new, help, quit";

enum Command {
  Board,
  Words,
  Score,
  Reset,
  NewGame,
  Help,
  Quit,
  Word(String),
  Path(Vec<Pos>),
}

fn parse_pos(token: &str) -> WordGridResult<Pos> {
  let (row, col) = token
    .split_once(',')
    .ok_or_else(|| WordGridError::Parse(format!("Expected `row,col`, got \"{token}\"")))?;
  Ok(Pos::new(row.trim().parse()?, col.trim().parse()?))
}

fn parse_command(line: &str) -> WordGridResult<Command> {
  Ok(match line {
    "board" => Command::Board,
    "words" => Command::Words,
    "score" => Command::Score,
    "reset" => Command::Reset,
    "new" => Command::NewGame,
    "help" | "?" => Command::Help,
    "quit" | "q" => Command::Quit,
    _ if line.chars().all(|c| c.is_ascii_alphabetic()) => Command::Word(line.to_owned()),
    _ => Command::Path(line.split_whitespace().map(parse_pos).collect::<WordGridResult<_>>()?),
  })
}

fn play_path(session: &mut GameSession, path: &[Pos], out: &mut impl Write) -> WordGridResult {
  match session.submit_path(path) {
    Ok(Some(found)) => {
      writeln!(out, "{}: +{} ({} total)", found.word, found.points, session.score())?
    }
    Ok(None) => {
      let word = session.board().word_from_path(path);
      if session.is_found(&word) {
        writeln!(out, "{word}: already found")?
      } else {
        writeln!(out, "{word}: not a word")?
      }
    }
    Err(err) => writeln!(out, "Invalid path ({}): {err}", err.reason())?,
  }
  Ok(())
}

/// Runs one interactive game, reading commands from `input` until it ends or
/// `quit` is entered.
pub fn run_play<R: Rng>(
  session: &mut GameSession,
  rng: &mut R,
  input: impl BufRead,
  mut out: impl Write,
) -> WordGridResult {
  writeln!(out, "{}\n{HELP}", session.board())?;

  for line in input.lines() {
    let line = line?;
    let line = line.trim();
    if line.is_empty() {
      continue;
    }

    let command = match parse_command(line) {
      Ok(command) => command,
      Err(err) => {
        writeln!(out, "{err}")?;
        continue;
      }
    };

    match command {
      Command::Board => writeln!(out, "{}", session.board())?,
      Command::Words => writeln!(out, "{}", session.remaining_words().join(" "))?,
      Command::Score => writeln!(
        out,
        "{} points, {}/{} words",
        session.score(),
        session.found_words().len(),
        session.valid_words().len()
      )?,
      Command::Reset => {
        session.reset();
        writeln!(out, "Progress cleared")?;
      }
      Command::NewGame => {
        session.new_game(rng);
        writeln!(out, "{}", session.board())?;
      }
      Command::Help => writeln!(out, "{HELP}")?,
      Command::Quit => break,
      Command::Word(word) => match find_word_in_grid(session.board(), &word) {
        Some(path) => play_path(session, &path, &mut out)?,
        None => writeln!(out, "{}: not on the board", word.to_ascii_uppercase())?,
      },
      Command::Path(path) => play_path(session, &path, &mut out)?,
    }
  }

  debug!("Game over with {} points", session.score());
  writeln!(out, "Final score: {}", session.score())?;
  Ok(())
}

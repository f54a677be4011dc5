#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod play;
mod report;

use std::{
  fs::{self, File},
  io::{self, Write},
  path::Path,
};

use args::{Args, RunMode};
use clap::Parser;
use log::info;
use play::run_play;
use rand::{rngs::StdRng, SeedableRng};
use report::BoardReport;
use util::{
  error::{WordGridError, WordGridResult},
  time::time_fn,
};
use word_dict::Dictionary;
use word_search::{
  board::LetterBoard, finder::find_all_words, generator::generate_grid, session::GameSession,
};

fn read_dict(path: &Path) -> WordGridResult<Dictionary> {
  if path.extension().is_some_and(|ext| ext == "bin") {
    Dictionary::decode(&fs::read(path)?)
  } else {
    Dictionary::parse_word_list(&fs::read_to_string(path)?)
  }
}

fn compile_dict(dict: &Dictionary, out_path: &Path) -> WordGridResult {
  let mut file = File::create(out_path)?;
  file.write_all(&dict.encode())?;
  info!("Wrote {} words to {}", dict.len(), out_path.display());
  Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  }
}

fn print_report(report: &BoardReport, json: bool) -> WordGridResult {
  if json {
    println!("{}", report.to_json()?);
  } else {
    print!("{}", report.to_text());
  }
  Ok(())
}

fn main() -> WordGridResult {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let config = args.grid_config();
  let dict = read_dict(&args.dict)?;
  let mut rng = make_rng(args.seed);

  match args.mode {
    RunMode::Generate => {
      config.validate()?;
      let (time, generated) =
        time_fn(|| generate_grid(&config, &dict, args.max_attempts, &mut rng));
      info!("Generation took {}s", time.as_secs_f32());
      let report = BoardReport::new(config, &generated.board, &generated.words)
        .with_generation(generated.attempts, generated.accepted);
      print_report(&report, args.json)
    }
    RunMode::Solve => {
      let letters = args
        .letters
        .as_deref()
        .ok_or_else(|| WordGridError::Config("--letters is required to solve".to_owned()))?;
      let board = LetterBoard::parse(letters)?;
      let (time, words) = time_fn(|| find_all_words(&board, &dict, config.finder_config()));
      info!("Search took {}s", time.as_secs_f32());
      print_report(&BoardReport::new(config, &board, &words), args.json)
    }
    RunMode::Play => {
      config.validate()?;
      let mut session = GameSession::new(&dict, config, args.max_attempts, &mut rng);
      run_play(&mut session, &mut rng, io::stdin().lock(), io::stdout().lock())
    }
    RunMode::CompileDict => compile_dict(&dict, &args.out),
  }
}

use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum WordGridError {
  Internal(String),
  Parse(String),
  Config(String),
}

impl Display for WordGridError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WordGridError::Internal(msg) => write!(f, "Internal error: {msg}"),
      WordGridError::Parse(msg) => write!(f, "Parse error: {msg}"),
      WordGridError::Config(msg) => write!(f, "Config error: {msg}"),
    }
  }
}

impl Error for WordGridError {}

pub type WordGridResult<T = ()> = Result<T, Box<dyn Error>>;

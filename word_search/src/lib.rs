pub mod adjacency;
pub mod board;
pub mod config;
pub mod finder;
pub mod generator;
pub mod path;
pub mod scoring;
pub mod session;

#[cfg(test)]
pub(crate) mod test_util;

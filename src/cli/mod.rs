pub mod commands;
pub mod eval;
pub mod parse;

pub use commands::{Cli, Commands};

pub mod commands;
pub mod serve;
pub mod ask;

pub use commands::{Cli, Commands};

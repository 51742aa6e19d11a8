//! Command-line interface module.

mod args;
pub mod check;
pub mod fix;

pub use args::{Cli, Commands, RunArgs};

//! Command-line interface module.

mod args;
pub mod build;
pub mod deploy;
pub mod serve;

pub use args::{Cli, Commands};

//! CLI argument parsing and user prompts for tipcalc.

mod args;
mod prompts;

pub use args::{CliConfig, StartValues, VERSION};
pub use prompts::prompt_value;

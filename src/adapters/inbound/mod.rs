/// Inbound adapters - Drive the views from user input
pub mod repl;

pub use repl::{parse_command, run_interactive, settle};

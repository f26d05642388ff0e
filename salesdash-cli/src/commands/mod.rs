pub mod ask;
pub mod reps;

pub use ask::handle_ask_command;
pub use reps::handle_reps_command;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

mod ask;
mod help;
mod reps;

pub use ask::AskView;
pub use help::HelpView;
pub use reps::RepsView;

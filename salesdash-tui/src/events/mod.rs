mod handler;
mod input;

pub use handler::{Action, AppEvent, EventHandler, InputMode};
pub use input::TextInput;

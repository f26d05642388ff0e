mod loader;

pub use loader::{DataLoader, LoadingState};

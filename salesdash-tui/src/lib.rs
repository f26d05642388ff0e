pub mod app;
pub mod data;
pub mod events;
pub mod theme;
pub mod ui;

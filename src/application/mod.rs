pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod tui;

pub use app::*;
pub use cli::*;
pub use config::*;
pub use controller::*;
pub use tui::*;

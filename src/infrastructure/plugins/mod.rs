pub mod selection_log;

pub use selection_log::*;

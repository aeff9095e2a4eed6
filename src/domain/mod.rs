pub mod calendar_model;
pub mod day_cell;
pub mod error;
pub mod month_grid;
pub mod month_key;
pub mod selection;

pub use calendar_model::*;
pub use day_cell::*;
pub use error::*;
pub use month_grid::*;
pub use month_key::*;
pub use selection::*;

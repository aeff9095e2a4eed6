pub mod month_view;
pub mod text;
pub mod theme;

pub use month_view::*;
pub use text::*;
pub use theme::*;

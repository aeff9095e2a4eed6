pub mod clock;
pub mod listeners;
pub mod plugins;
pub mod renderer;

#[cfg(test)]
pub mod test_utils;

pub use clock::*;
pub use listeners::*;
pub use plugins::*;
pub use renderer::*;

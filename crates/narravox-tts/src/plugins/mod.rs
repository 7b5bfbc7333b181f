//! Built-in synthesis engines that need no neural dependencies

pub mod mock;
pub mod sine;

pub use mock::{MockSynthesisEngine, MockSynthesisConfig};
pub use sine::SineSynthesisEngine;

//! Interactive console adapter: line prompts in, screens out.

pub mod display;
pub mod prompt;

pub use prompt::{Console, Input};

//! Interactive menu over the product gateway.

pub mod console;
pub mod prompt;

pub use console::Console;

//! Use Cases

pub mod switchboard;

pub use switchboard::{FormatterStatus, SwitchboardController, VariantInfo};

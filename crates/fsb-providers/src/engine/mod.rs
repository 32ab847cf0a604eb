//! Formatting engine implementations
//!
//! Engines register themselves in `FORMATTING_ENGINES` and are resolved by
//! the name in `FormatterConfig::engine`.

pub mod null;
pub mod whitespace;

pub use null::NullFormattingEngine;
pub use whitespace::WhitespaceFormattingEngine;

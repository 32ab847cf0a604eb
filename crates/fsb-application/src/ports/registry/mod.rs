//! Override and Engine Registries
//!
//! Compile-time registration of override variants and formatting engines
//! via `linkme` distributed slices.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     Registration Flow                            │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  1. fsb-providers:  #[linkme::distributed_slice(FORMATTER_OVERRIDES)] │
//! │                     static ENTRY: FormatterOverrideEntry = ...   │
//! │                              ↓                                   │
//! │  2. Selector:       highest priority entry whose required host   │
//! │                     symbol is present                            │
//! │                              ↓                                   │
//! │  3. Override:       resolve_formatting_engine(config.engine)     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering an engine (in fsb-providers)
//!
//! ```ignore
//! use fsb_application::ports::registry::{FormattingEngineEntry, FORMATTING_ENGINES};
//!
//! #[linkme::distributed_slice(FORMATTING_ENGINES)]
//! static NULL_ENGINE: FormattingEngineEntry = FormattingEngineEntry {
//!     name: "null",
//!     description: "Returns text unchanged",
//!     factory: |_config| Ok(Arc::new(NullFormattingEngine)),
//! };
//! ```

pub mod engines;
pub mod overrides;

pub use engines::{
    FORMATTING_ENGINES, FormattingEngineEntry, list_formatting_engines, resolve_formatting_engine,
};
pub use overrides::{
    FORMATTER_OVERRIDES, FormatterOverrideEntry, OverrideFactory, list_formatter_overrides,
};

//! Domain Port Interfaces
//!
//! Traits at the seams between the switchboard, the host and the
//! formatting engine.

pub mod capability;
pub mod code_style;
pub mod engine;

pub use capability::CapabilityProbe;
pub use code_style::{CodeStyleOverride, CodeStyleService, OverrideVariant, StyleOperation};
pub use engine::FormattingEngine;

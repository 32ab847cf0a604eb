//! Application Ports
//!
//! - [`host`]: the host's mutable service registry and its slot values
//! - [`registry`]: linkme slices where override variants and engines register

pub mod host;
pub mod registry;

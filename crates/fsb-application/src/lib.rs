//! # Formatter Switchboard - Application Layer
//!
//! Swaps a host session's code style service for a delegating proxy backed
//! by an alternate formatting engine, and restores the host service on demand.
//!
//! ## Flow
//!
//! ```text
//! change_formatter_to(session, config)
//!   → uninstall: Switchboard(proxy) slot → re-register proxy.original()
//!   → install:   CapabilitySelector → CodeStyleOverride
//!                DelegatingProxyFactory → CodeStyleProxy
//!                registry.register_instance(Switchboard(proxy))
//! ```

/// Proxy construction and capability selection
pub mod domain_services;
/// Host-facing ports and compile-time registries
pub mod ports;
/// Install/uninstall orchestration
pub mod use_cases;

pub use domain_services::{CapabilitySelector, CodeStyleProxy, DelegatingProxyFactory};
pub use ports::host::{ServiceKey, ServiceRegistry, ServiceSlot};
pub use use_cases::{FormatterStatus, SwitchboardController, VariantInfo};

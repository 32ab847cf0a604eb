//! # Formatter Switchboard
//!
//! Lets a host's code style service be replaced, per session, by a
//! delegating proxy that sends formatting requests to an alternate
//! formatting engine and everything else to the host's own service.
//!
//! ## Example
//!
//! ```
//! use fsb::{FormatterConfig, Session, init_switchboard};
//! use fsb::infrastructure::AppConfig;
//! use fsb::providers::InMemoryServiceRegistry;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(InMemoryServiceRegistry::new());
//! let session = Session::new("project");
//! let context = init_switchboard(AppConfig::default(), registry).unwrap();
//!
//! // No code style service is registered for the session yet
//! let alternate = FormatterConfig::alternate("whitespace");
//! assert!(context.controller().change_formatter_to(&session, Some(&alternate)).is_err());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability interface, override and engine ports, value objects, errors
//! - `application` - proxy, capability selector, switchboard controller
//! - `providers` - override variants, formatting engines, in-memory registry
//! - `infrastructure` - configuration, logging, composition root

/// Domain layer - ports, value objects and errors
pub mod domain {
    pub use fsb_domain::*;
}

/// Application layer - proxy construction and install/uninstall orchestration
pub mod application {
    pub use fsb_application::*;
}

/// Providers - override variants, formatting engines, registries
pub mod providers {
    pub use fsb_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use fsb_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the switchboard entry points at the crate root
pub use application::{
    CapabilitySelector, CodeStyleProxy, DelegatingProxyFactory, FormatterStatus, ServiceKey,
    ServiceRegistry, ServiceSlot, SwitchboardController,
};
pub use infrastructure::{AppContext, ConfigLoader, init_switchboard};

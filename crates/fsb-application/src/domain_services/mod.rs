//! Domain Services
//!
//! Stateless building blocks used by the switchboard controller.

pub mod capability;
pub mod proxy;

pub use capability::{CapabilitySelector, select_entry};
pub use proxy::{CodeStyleProxy, DelegatingProxyFactory};

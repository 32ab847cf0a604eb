//! Composition root
//!
//! - [`bootstrap`]: builds the controller from [`crate::config::AppConfig`]
//! - [`resolver`]: lists the override variants and engines linked in

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, init_switchboard};
pub use resolver::{AvailableComponents, list_available_components};

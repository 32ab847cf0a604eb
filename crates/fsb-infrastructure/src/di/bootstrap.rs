//! Switchboard Bootstrap
//!
//! Wires configuration, the host registry and the linkme registries into a
//! ready [`SwitchboardController`].
//!
//! ```text
//! AppConfig.host      → HostCapabilities probe → CapabilitySelector
//! AppConfig.formatter → engine check (fail fast)
//! ServiceRegistry     → SwitchboardController
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_switchboard(config, registry)?;
//! context.apply_configured_formatter(&session)?;
//! ```

use crate::config::AppConfig;
use crate::di::resolver::{AvailableComponents, list_available_components};
use fsb_application::ports::registry::resolve_formatting_engine;
use fsb_application::{
    CapabilitySelector, FormatterStatus, ServiceRegistry, SwitchboardController,
};
use fsb_domain::error::Result;
use fsb_domain::value_objects::Session;
use std::sync::Arc;
use tracing::{info, warn};

/// Application context holding the configured controller
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    registry: Arc<dyn ServiceRegistry>,
    controller: Arc<SwitchboardController>,
}

impl AppContext {
    /// The host registry the controller mutates
    pub fn registry(&self) -> Arc<dyn ServiceRegistry> {
        Arc::clone(&self.registry)
    }

    /// The switchboard controller
    pub fn controller(&self) -> Arc<SwitchboardController> {
        Arc::clone(&self.controller)
    }

    /// Switch `session` to the formatter named in the configuration
    pub fn apply_configured_formatter(&self, session: &Session) -> Result<()> {
        self.controller
            .change_formatter_to(session, Some(&self.config.formatter))
    }

    /// Put the host formatter back for `session`
    pub fn restore_host_formatter(&self, session: &Session) -> Result<()> {
        self.controller.change_formatter_to(session, None)
    }

    /// What currently serves `session`
    pub fn formatter_status(&self, session: &Session) -> Result<FormatterStatus> {
        self.controller.current_formatter(session)
    }

    /// Override variants and engines linked into this build
    pub fn available_components(&self) -> AvailableComponents {
        list_available_components()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

/// Build the switchboard from configuration
///
/// # Errors
/// `Error::UnsupportedCapability` if the configuration selects the alternate
/// formatter with an engine no linked provider registers.
pub fn init_switchboard(
    config: AppConfig,
    registry: Arc<dyn ServiceRegistry>,
) -> Result<AppContext> {
    let probe = Arc::new(config.host.clone());
    let selector = CapabilitySelector::new(probe);

    match selector.compatible_entry() {
        Some(entry) => info!(
            variant = %entry.variant,
            api_version = config.host.api_version.as_deref().unwrap_or("unknown"),
            "Code style override variant available"
        ),
        None => warn!(
            api_version = config.host.api_version.as_deref().unwrap_or("unknown"),
            "No code style override variant is compatible with this host"
        ),
    }

    if config.formatter.selects_alternate() {
        let engine = resolve_formatting_engine(&config.formatter)?;
        info!(engine = engine.engine_name(), "Alternate formatter configured");
    }

    let controller = Arc::new(SwitchboardController::new(Arc::clone(&registry), selector));
    Ok(AppContext {
        config: Arc::new(config),
        registry,
        controller,
    })
}

//! Switchboard Controller
//!
//! Switches a session's code style service to the alternate formatter and
//! back.
//!
//! ## Pattern
//!
//! ```text
//! change_formatter_to(session, config)
//!   ├─ uninstall  (always): Switchboard(proxy) → Native(proxy.original())
//!   └─ install    (alternate only):
//!        Native(original)  → select override → wrap → Switchboard(proxy)
//!        Switchboard(_)    → already installed, skip
//!        Foreign { owner } → Error::RegistryConflict
//! ```
//!
//! The uninstall step only ever touches our own proxies, so a failed
//! install leaves the session on the host's own service.

use crate::domain_services::{CapabilitySelector, DelegatingProxyFactory};
use crate::ports::host::{ServiceKey, ServiceRegistry, ServiceSlot};
use dashmap::DashMap;
use fsb_domain::error::{Error, Result};
use fsb_domain::ports::OverrideVariant;
use fsb_domain::value_objects::{FormatterConfig, Session, SessionId};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// What currently serves a session's code style slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterStatus {
    /// Nothing is registered under the key
    Unregistered,
    /// The host's own service
    Native {
        /// Service name
        service: String,
    },
    /// Our proxy
    Switchboard {
        /// Installed override variant
        variant: OverrideVariant,
        /// Name of the wrapped host service
        original: String,
    },
    /// Another extension's service
    Foreign {
        /// Owning extension
        owner: String,
    },
}

/// Override variant information for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInfo {
    /// Variant name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Host symbol the variant needs
    pub requires_symbol: Option<String>,
    /// True if the running host satisfies the requirement
    pub compatible: bool,
}

/// Installs and uninstalls the switchboard proxy per session
pub struct SwitchboardController {
    registry: Arc<dyn ServiceRegistry>,
    selector: CapabilitySelector,
    key: ServiceKey,
    session_locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl SwitchboardController {
    /// Create a controller for the code style slot
    pub fn new(registry: Arc<dyn ServiceRegistry>, selector: CapabilitySelector) -> Self {
        Self {
            registry,
            selector,
            key: ServiceKey::code_style(),
            session_locks: DashMap::new(),
        }
    }

    /// The registry this controller mutates
    pub fn registry(&self) -> &Arc<dyn ServiceRegistry> {
        &self.registry
    }

    /// The capability selector
    pub fn selector(&self) -> &CapabilitySelector {
        &self.selector
    }

    /// Switch `session` to `config`, or back to the host formatter for `None`
    ///
    /// Any installed proxy is removed first; a new one is installed only if
    /// `config` selects the alternate formatter.
    ///
    /// # Errors
    /// * `Error::RegistryConflict` - another extension owns the slot
    /// * `Error::UnsupportedCapability` - no variant or engine fits
    /// * `Error::ConstructionFailure` - the proxy could not be built
    /// * `Error::NotFound` - the session has no code style service at all
    pub fn change_formatter_to(
        &self,
        session: &Session,
        config: Option<&FormatterConfig>,
    ) -> Result<()> {
        let lock = self.session_lock(&session.id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        self.uninstall_locked(session)?;
        if let Some(config) = config.filter(|config| config.selects_alternate()) {
            self.install_locked(session, config)?;
        }
        Ok(())
    }

    /// Restore the host service if our proxy is installed
    ///
    /// Returns `true` if a proxy was removed. Never fails when nothing is
    /// installed.
    pub fn uninstall(&self, session: &Session) -> Result<bool> {
        let lock = self.session_lock(&session.id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.uninstall_locked(session)
    }

    /// Describe what serves `session` right now
    pub fn current_formatter(&self, session: &Session) -> Result<FormatterStatus> {
        let status = match self.registry.get(&session.id, &self.key)? {
            None => FormatterStatus::Unregistered,
            Some(ServiceSlot::Native(service)) => FormatterStatus::Native {
                service: service.service_name().to_string(),
            },
            Some(ServiceSlot::Switchboard(proxy)) => FormatterStatus::Switchboard {
                variant: proxy.variant(),
                original: proxy.original().service_name().to_string(),
            },
            Some(ServiceSlot::Foreign { owner, .. }) => FormatterStatus::Foreign { owner },
        };
        Ok(status)
    }

    /// Registered override variants and whether the host supports them
    pub fn list_variants(&self) -> Vec<VariantInfo> {
        self.selector
            .entries()
            .iter()
            .map(|entry| VariantInfo {
                name: entry.variant.as_str().to_string(),
                description: entry.description.to_string(),
                requires_symbol: entry.requires_symbol.map(str::to_string),
                compatible: self.selector.is_compatible(entry),
            })
            .collect()
    }

    /// Drop bookkeeping for a session the host has closed
    pub fn forget_session(&self, session: &SessionId) {
        self.session_locks.remove(session);
    }

    fn session_lock(&self, session: &SessionId) -> Arc<Mutex<()>> {
        Arc::clone(
            self.session_locks
                .entry(session.clone())
                .or_default()
                .value(),
        )
    }

    fn uninstall_locked(&self, session: &Session) -> Result<bool> {
        let Some(ServiceSlot::Switchboard(proxy)) = self.registry.get(&session.id, &self.key)?
        else {
            debug!(session = %session.name, "No switchboard proxy installed");
            return Ok(false);
        };

        let original = ServiceSlot::Native(Arc::clone(proxy.original()));
        self.register(session, original)?;
        Ok(true)
    }

    fn install_locked(&self, session: &Session, config: &FormatterConfig) -> Result<()> {
        let slot = self
            .registry
            .get(&session.id, &self.key)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "{} service for session '{}'",
                    self.key, session.name
                ))
            })?;

        let original = match &slot {
            ServiceSlot::Native(service) => Arc::clone(service),
            ServiceSlot::Switchboard(_) => {
                debug!(session = %session.name, "Switchboard proxy already installed");
                return Ok(());
            }
            ServiceSlot::Foreign { owner, .. } => {
                return Err(Error::registry_conflict(session.name.clone(), owner.clone()));
            }
        };

        let overriding = self.selector.select(original, config)?;
        let proxy = DelegatingProxyFactory::wrap(&slot, overriding)?;
        self.register(session, ServiceSlot::Switchboard(Arc::new(proxy)))
    }

    fn register(&self, session: &Session, slot: ServiceSlot) -> Result<()> {
        info!(
            session = %session.name,
            key = %self.key,
            service = %slot,
            "Registering code style service"
        );

        let previous = self.registry.unregister(&session.id, &self.key)?;
        if let Err(err) = self.registry.register_instance(&session.id, &self.key, slot) {
            if let Some(previous) = previous {
                if let Err(restore_err) =
                    self.registry
                        .register_instance(&session.id, &self.key, previous)
                {
                    warn!(
                        session = %session.name,
                        error = %restore_err,
                        "Failed to restore previous code style service"
                    );
                }
            }
            return Err(err);
        }
        Ok(())
    }
}

impl std::fmt::Debug for SwitchboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchboardController")
            .field("key", &self.key)
            .field("sessions", &self.session_locks.len())
            .finish_non_exhaustive()
    }
}

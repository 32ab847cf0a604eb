//! Host Service Registry Port
//!
//! The host owns a keyed, mutable component store per session. The
//! switchboard never enumerates it; it only reads and replaces the single
//! code style slot.
//!
//! Slot values are a sum type instead of bare service objects, so telling
//! our proxy apart from the host's own service (or a third party's) is a
//! `match`, not a type probe.

use crate::domain_services::CodeStyleProxy;
use fsb_domain::constants::CODE_STYLE_SERVICE_KEY;
use fsb_domain::error::Result;
use fsb_domain::ports::CodeStyleService;
use fsb_domain::value_objects::SessionId;
use std::fmt;
use std::sync::Arc;

/// Well-known registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceKey(&'static str);

impl ServiceKey {
    /// Create a key from a static identifier
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Key of the code style service slot
    pub const fn code_style() -> Self {
        Self(CODE_STYLE_SERVICE_KEY)
    }

    /// Raw key string
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// What currently occupies a registry slot
#[derive(Debug, Clone)]
pub enum ServiceSlot {
    /// The host's own implementation
    Native(Arc<dyn CodeStyleService>),
    /// A proxy installed by the switchboard
    Switchboard(Arc<CodeStyleProxy>),
    /// A service registered by some other extension
    Foreign {
        /// Identity of the extension that owns the slot
        owner: String,
        /// The service it registered
        service: Arc<dyn CodeStyleService>,
    },
}

impl ServiceSlot {
    /// The capability object host consumers should call
    pub fn service(&self) -> Arc<dyn CodeStyleService> {
        match self {
            Self::Native(service) | Self::Foreign { service, .. } => Arc::clone(service),
            Self::Switchboard(proxy) => Arc::clone(proxy) as Arc<dyn CodeStyleService>,
        }
    }

    /// True if the slot holds one of our proxies
    pub fn is_switchboard(&self) -> bool {
        matches!(self, Self::Switchboard(_))
    }

    /// The installed proxy, if any
    pub fn as_proxy(&self) -> Option<&Arc<CodeStyleProxy>> {
        match self {
            Self::Switchboard(proxy) => Some(proxy),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(service) => write!(f, "native '{}'", service.service_name()),
            Self::Switchboard(proxy) => write!(
                f,
                "switchboard proxy ({}) over '{}'",
                proxy.variant(),
                proxy.original().service_name()
            ),
            Self::Foreign { owner, .. } => write!(f, "foreign '{owner}'"),
        }
    }
}

/// The host's mutable service registry
///
/// Implementations must be safe to share, but the switchboard serializes
/// its own read-check-replace sequence per session.
pub trait ServiceRegistry: Send + Sync + fmt::Debug {
    /// Current occupant of `key` in `session`
    fn get(&self, session: &SessionId, key: &ServiceKey) -> Result<Option<ServiceSlot>>;

    /// Remove the occupant of `key` in `session`, returning it
    fn unregister(&self, session: &SessionId, key: &ServiceKey) -> Result<Option<ServiceSlot>>;

    /// Place `slot` under `key` in `session`
    fn register_instance(&self, session: &SessionId, key: &ServiceKey, slot: ServiceSlot)
    -> Result<()>;
}

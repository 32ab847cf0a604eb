//! In-memory service registry
//!
//! A keyed, per-session component store for embedders that do not bring
//! their own registry, and for tests.

use dashmap::DashMap;
use fsb_application::ports::host::{ServiceKey, ServiceRegistry, ServiceSlot};
use fsb_domain::error::Result;
use fsb_domain::ports::CodeStyleService;
use fsb_domain::value_objects::SessionId;
use std::sync::Arc;
use tracing::debug;

/// Concurrent in-memory registry keyed by (session, key)
///
/// # Example
///
/// ```ignore
/// let registry = InMemoryServiceRegistry::new();
/// registry.register_native(&SessionId::new("project"), Arc::new(HostStyleService::default()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryServiceRegistry {
    slots: DashMap<(SessionId, ServiceKey), ServiceSlot>,
}

impl InMemoryServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the host's own code style service for `session`
    pub fn register_native(&self, session: &SessionId, service: Arc<dyn CodeStyleService>) {
        self.slots.insert(
            (session.clone(), ServiceKey::code_style()),
            ServiceSlot::Native(service),
        );
    }

    /// Drop every slot of `session`
    pub fn close_session(&self, session: &SessionId) {
        self.slots.retain(|(owner, _), _| owner != session);
        debug!(session = %session, "Closed registry session");
    }

    /// Number of occupied slots across all sessions
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl ServiceRegistry for InMemoryServiceRegistry {
    fn get(&self, session: &SessionId, key: &ServiceKey) -> Result<Option<ServiceSlot>> {
        Ok(self
            .slots
            .get(&(session.clone(), *key))
            .map(|slot| slot.value().clone()))
    }

    fn unregister(&self, session: &SessionId, key: &ServiceKey) -> Result<Option<ServiceSlot>> {
        Ok(self
            .slots
            .remove(&(session.clone(), *key))
            .map(|(_, slot)| slot))
    }

    fn register_instance(
        &self,
        session: &SessionId,
        key: &ServiceKey,
        slot: ServiceSlot,
    ) -> Result<()> {
        self.slots.insert((session.clone(), *key), slot);
        Ok(())
    }
}

//! Tests for the in-memory service registry

use crate::host_stub::HostStyleService;
use fsb_application::ports::host::{ServiceKey, ServiceRegistry, ServiceSlot};
use fsb_domain::value_objects::SessionId;
use fsb_providers::InMemoryServiceRegistry;

#[test]
fn test_register_get_unregister() {
    let registry = InMemoryServiceRegistry::new();
    let session = SessionId::new("project");
    let key = ServiceKey::code_style();

    assert!(registry.get(&session, &key).expect("get").is_none());

    registry.register_native(&session, HostStyleService::shared());
    let slot = registry.get(&session, &key).expect("get").expect("slot");
    assert!(matches!(slot, ServiceSlot::Native(_)));
    assert_eq!(slot.to_string(), "native 'host-style'");

    let removed = registry.unregister(&session, &key).expect("unregister");
    assert!(removed.is_some());
    assert!(registry.is_empty());
}

#[test]
fn test_keys_and_sessions_are_isolated() {
    let registry = InMemoryServiceRegistry::new();
    let first = SessionId::new("a");
    let second = SessionId::new("b");
    let other_key = ServiceKey::new("other-service");

    registry.register_native(&first, HostStyleService::shared());
    registry
        .register_instance(&first, &other_key, ServiceSlot::Native(HostStyleService::shared()))
        .expect("register");

    assert!(registry.get(&second, &ServiceKey::code_style()).expect("get").is_none());
    assert_eq!(registry.len(), 2);

    registry.close_session(&first);
    assert!(registry.is_empty());
}

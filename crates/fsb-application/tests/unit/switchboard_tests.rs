//! Tests for install/uninstall orchestration

use crate::test_utils::{
    FakeRegistry, RecordingOverride, RecordingService, ScriptedRegistry, legacy_host, ranged_host,
    sample_file, test_selector,
};
use fsb_application::domain_services::DelegatingProxyFactory;
use fsb_application::ports::host::ServiceSlot;
use fsb_application::use_cases::{FormatterStatus, SwitchboardController};
use fsb_domain::Error;
use fsb_domain::ports::{CodeStyleService, OverrideVariant, StyleOperation};
use fsb_domain::value_objects::{ChangedRanges, FormatterConfig, Session};
use std::sync::Arc;

struct Fixture {
    session: Session,
    original: Arc<RecordingService>,
    registry: Arc<FakeRegistry>,
    controller: SwitchboardController,
}

fn fixture_with(host: Arc<fsb_domain::value_objects::HostCapabilities>) -> Fixture {
    let session = Session::new("project-1").with_name("Project One");
    let original = RecordingService::new("host");
    let registry = FakeRegistry::with_slot(&session.id, ServiceSlot::Native(original.clone()));
    let controller = SwitchboardController::new(registry.clone(), test_selector(host));
    Fixture {
        session,
        original,
        registry,
        controller,
    }
}

fn fixture() -> Fixture {
    fixture_with(legacy_host())
}

fn alternate() -> FormatterConfig {
    FormatterConfig::alternate("null").with_style("X")
}

fn assert_native_is_original(fx: &Fixture) {
    let original: Arc<dyn CodeStyleService> = fx.original.clone();
    match fx.registry.slot(&fx.session.id) {
        Some(ServiceSlot::Native(service)) => assert!(Arc::ptr_eq(&service, &original)),
        other => panic!("Expected the original native service, got {other:?}"),
    }
}

#[test]
fn test_uninstall_without_proxy_is_noop() {
    let fx = fixture();

    assert!(!fx.controller.uninstall(&fx.session).expect("uninstall"));
    fx.controller
        .change_formatter_to(&fx.session, None)
        .expect("revert");

    assert_eq!(fx.registry.mutations(), 0);
    assert_native_is_original(&fx);
}

#[test]
fn test_install_registers_marked_proxy_over_original() {
    let fx = fixture();

    fx.controller
        .change_formatter_to(&fx.session, Some(&alternate()))
        .expect("install");

    let slot = fx.registry.slot(&fx.session.id).expect("slot");
    let proxy = slot.as_proxy().expect("switchboard proxy");
    let original: Arc<dyn CodeStyleService> = fx.original.clone();
    assert!(Arc::ptr_eq(proxy.original(), &original));
    assert_eq!(proxy.variant(), OverrideVariant::Legacy);
    // one unregister + one register
    assert_eq!(fx.registry.mutations(), 2);
}

#[test]
fn test_install_twice_never_double_wraps() {
    let fx = fixture();
    let config = alternate();

    fx.controller
        .change_formatter_to(&fx.session, Some(&config))
        .expect("first install");
    fx.controller
        .change_formatter_to(&fx.session, Some(&config))
        .expect("second install");

    let slot = fx.registry.slot(&fx.session.id).expect("slot");
    let proxy = slot.as_proxy().expect("switchboard proxy");
    let original: Arc<dyn CodeStyleService> = fx.original.clone();
    assert!(Arc::ptr_eq(proxy.original(), &original));
}

#[test]
fn test_round_trip_restores_identical_service() {
    let fx = fixture();

    fx.controller
        .change_formatter_to(&fx.session, Some(&alternate()))
        .expect("install");
    fx.controller
        .change_formatter_to(&fx.session, None)
        .expect("revert");

    assert_native_is_original(&fx);
}

#[test]
fn test_host_native_config_reverts() {
    let fx = fixture();

    fx.controller
        .change_formatter_to(&fx.session, Some(&alternate()))
        .expect("install");
    fx.controller
        .change_formatter_to(&fx.session, Some(&FormatterConfig::host_native()))
        .expect("revert");

    assert_native_is_original(&fx);
}

#[test]
fn test_foreign_occupant_is_conflict_and_left_untouched() {
    let session = Session::new("project-2");
    let foreign = RecordingService::new("acme");
    let registry = FakeRegistry::with_slot(
        &session.id,
        ServiceSlot::Foreign {
            owner: "acme-formatter".to_string(),
            service: foreign.clone(),
        },
    );
    let controller = SwitchboardController::new(registry.clone(), test_selector(legacy_host()));

    let err = controller
        .change_formatter_to(&session, Some(&alternate()))
        .expect_err("conflict");

    match err {
        Error::RegistryConflict { found, .. } => assert_eq!(found, "acme-formatter"),
        other => panic!("Expected RegistryConflict, got {other:?}"),
    }
    assert_eq!(registry.mutations(), 0);
    let foreign: Arc<dyn CodeStyleService> = foreign;
    match registry.slot(&session.id) {
        Some(ServiceSlot::Foreign { service, .. }) => assert!(Arc::ptr_eq(&service, &foreign)),
        other => panic!("Expected foreign slot, got {other:?}"),
    }
}

#[test]
fn test_foreign_occupant_survives_revert() {
    let session = Session::new("project-3");
    let registry = FakeRegistry::with_slot(
        &session.id,
        ServiceSlot::Foreign {
            owner: "acme-formatter".to_string(),
            service: RecordingService::new("acme"),
        },
    );
    let controller = SwitchboardController::new(registry.clone(), test_selector(legacy_host()));

    controller.change_formatter_to(&session, None).expect("revert");

    assert_eq!(registry.mutations(), 0);
    assert!(matches!(
        registry.slot(&session.id),
        Some(ServiceSlot::Foreign { .. })
    ));
}

#[test]
fn test_missing_slot_is_not_found() {
    let session = Session::new("empty");
    let registry = Arc::new(FakeRegistry::default());
    let controller = SwitchboardController::new(registry.clone(), test_selector(legacy_host()));

    controller
        .change_formatter_to(&session, None)
        .expect("revert is always safe");
    let err = controller
        .change_formatter_to(&session, Some(&alternate()))
        .expect_err("nothing to wrap");

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(
        controller.current_formatter(&session).expect("status"),
        FormatterStatus::Unregistered
    );
}

#[test]
fn test_registry_failure_restores_previous_slot() {
    let fx = fixture();
    fx.registry.fail_next_register();

    let err = fx
        .controller
        .change_formatter_to(&fx.session, Some(&alternate()))
        .expect_err("register fails");

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert_native_is_original(&fx);
}

#[test]
fn test_installed_proxy_dispatches_by_variant() {
    let fx = fixture_with(ranged_host());
    fx.controller
        .change_formatter_to(&fx.session, Some(&alternate()))
        .expect("install");

    let service = fx.registry.slot(&fx.session.id).expect("slot").service();
    let file = sample_file();
    let changed = service
        .reformat_changed_ranges(&file, &ChangedRanges::default())
        .expect("changed ranges");
    let imports = service.optimize_imports(&file).expect("imports");

    assert_eq!(changed, "override:ReformatChangedRanges");
    assert_eq!(imports, "host:OptimizeImports");
    assert_eq!(fx.original.log.count(StyleOperation::ReformatChangedRanges), 0);
}

#[test]
fn test_current_formatter_reports_transitions() {
    let fx = fixture();

    assert_eq!(
        fx.controller.current_formatter(&fx.session).expect("status"),
        FormatterStatus::Native {
            service: "host".to_string()
        }
    );

    fx.controller
        .change_formatter_to(&fx.session, Some(&alternate()))
        .expect("install");

    assert_eq!(
        fx.controller.current_formatter(&fx.session).expect("status"),
        FormatterStatus::Switchboard {
            variant: OverrideVariant::Legacy,
            original: "host".to_string(),
        }
    );
}

#[test]
fn test_list_variants_reports_compatibility() {
    let fx = fixture();
    let variants = fx.controller.list_variants();

    assert_eq!(variants.len(), 2);
    let legacy = variants.iter().find(|v| v.name == "legacy").expect("legacy");
    let ranged = variants
        .iter()
        .find(|v| v.name == "changed-ranges")
        .expect("changed-ranges");
    assert!(legacy.compatible);
    assert!(!ranged.compatible);
    assert_eq!(ranged.requires_symbol.as_deref(), Some("ChangedRangesInfo"));
}

#[test]
fn test_sessions_are_independent() {
    let first = Session::new("a");
    let second = Session::new("b");
    let first_original = RecordingService::new("host-a");
    let registry = FakeRegistry::with_slot(&first.id, ServiceSlot::Native(first_original));
    let controller = SwitchboardController::new(registry.clone(), test_selector(legacy_host()));
    {
        use fsb_application::ports::host::{ServiceKey, ServiceRegistry};
        registry
            .register_instance(
                &second.id,
                &ServiceKey::code_style(),
                ServiceSlot::Native(RecordingService::new("host-b")),
            )
            .expect("seed second session");
    }

    controller
        .change_formatter_to(&first, Some(&alternate()))
        .expect("install");

    assert!(registry.slot(&first.id).expect("first").is_switchboard());
    assert!(!registry.slot(&second.id).expect("second").is_switchboard());
    controller.forget_session(&first.id);
}

#[test]
fn test_concurrent_installs_leave_single_proxy() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 50;

    let fx = fixture();
    let config = alternate();

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    fx.controller
                        .change_formatter_to(&fx.session, Some(&config))
                        .expect("install");
                }
            });
        }
    });

    let slot = fx.registry.slot(&fx.session.id).expect("slot");
    let proxy = slot.as_proxy().expect("switchboard proxy");
    let original: Arc<dyn CodeStyleService> = fx.original.clone();
    assert!(Arc::ptr_eq(proxy.original(), &original));
    // first install: 2 mutations, every later call uninstalls (2) then installs (2)
    let calls = THREADS * ROUNDS;
    assert_eq!(fx.registry.mutations(), 2 + (calls - 1) * 4);
}

#[test]
fn test_install_skips_when_proxy_appears_after_uninstall() {
    let session = Session::new("project-1").with_name("Project One");
    let original: Arc<dyn CodeStyleService> = RecordingService::new("host");
    let overriding = RecordingOverride::new(
        OverrideVariant::Legacy,
        original.clone(),
        &[StyleOperation::Reformat],
    );
    let proxy = DelegatingProxyFactory::wrap(&ServiceSlot::Native(original.clone()), overriding)
        .expect("proxy");
    // uninstall sees the host service, install then finds a proxy already present
    let registry = ScriptedRegistry::new(vec![
        Some(ServiceSlot::Native(original)),
        Some(ServiceSlot::Switchboard(Arc::new(proxy))),
    ]);
    let controller = SwitchboardController::new(registry.clone(), test_selector(legacy_host()));

    controller
        .change_formatter_to(&session, Some(&alternate()))
        .expect("install is skipped");

    assert_eq!(registry.remaining(), 0);
    assert_eq!(registry.mutations(), 0);
}

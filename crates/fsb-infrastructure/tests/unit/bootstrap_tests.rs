//! Full-stack switchboard scenarios over the in-memory registry

use crate::host_stub::HostStyleService;
use fsb_application::ports::host::{ServiceKey, ServiceRegistry, ServiceSlot};
use fsb_application::FormatterStatus;
use fsb_domain::Error;
use fsb_domain::constants::CHANGED_RANGES_SYMBOL;
use fsb_domain::ports::{CodeStyleService, OverrideVariant};
use fsb_domain::value_objects::{
    ChangedRanges, FormatterConfig, HostCapabilities, Session, SourceFile, TextRange,
};
use fsb_infrastructure::config::AppConfig;
use fsb_infrastructure::di::{AppContext, init_switchboard};
use fsb_providers::InMemoryServiceRegistry;
use std::sync::Arc;

struct Fixture {
    context: AppContext,
    registry: Arc<InMemoryServiceRegistry>,
    native: Arc<dyn CodeStyleService>,
    session: Session,
}

fn fixture(host: HostCapabilities, formatter: FormatterConfig) -> Fixture {
    let registry = Arc::new(InMemoryServiceRegistry::new());
    let native: Arc<dyn CodeStyleService> = Arc::new(HostStyleService);
    let session = Session::new("demo-project").with_name("Demo");
    registry.register_native(&session.id, Arc::clone(&native));

    let config = AppConfig {
        host,
        formatter,
        ..AppConfig::default()
    };
    let context = init_switchboard(config, registry.clone()).expect("bootstrap");

    Fixture {
        context,
        registry,
        native,
        session,
    }
}

fn slot(fixture: &Fixture) -> ServiceSlot {
    fixture
        .registry
        .get(&fixture.session.id, &ServiceKey::code_style())
        .expect("get")
        .expect("slot")
}

fn modern_host() -> HostCapabilities {
    HostCapabilities::new()
        .with_api_version("2016.3")
        .with_symbol(CHANGED_RANGES_SYMBOL)
}

#[test]
fn test_configured_formatter_round_trip() {
    let fx = fixture(
        modern_host(),
        FormatterConfig::alternate("whitespace").with_style("X"),
    );

    fx.context.apply_configured_formatter(&fx.session).expect("install");

    assert_eq!(
        fx.context.formatter_status(&fx.session).expect("status"),
        FormatterStatus::Switchboard {
            variant: OverrideVariant::ChangedRanges,
            original: "host-style".to_string(),
        }
    );
    let service = slot(&fx).service();
    let file = SourceFile::new("src/main.rs", "rust", "fn main() {}  \n");
    assert_eq!(service.reformat(&file).expect("reformat"), "fn main() {}\n");
    assert_eq!(
        service.optimize_imports(&file).expect("imports"),
        "host:optimize_imports"
    );

    fx.context.restore_host_formatter(&fx.session).expect("restore");

    match slot(&fx) {
        ServiceSlot::Native(service) => assert!(Arc::ptr_eq(&service, &fx.native)),
        other => panic!("expected the native service back, got {other}"),
    }
}

#[test]
fn test_reapplying_keeps_a_single_proxy() {
    let fx = fixture(modern_host(), FormatterConfig::alternate("null"));

    fx.context.apply_configured_formatter(&fx.session).expect("first");
    fx.context.apply_configured_formatter(&fx.session).expect("second");

    let ServiceSlot::Switchboard(proxy) = slot(&fx) else {
        panic!("expected a switchboard proxy");
    };
    assert!(Arc::ptr_eq(proxy.original(), &fx.native));
    assert_eq!(fx.registry.len(), 1);
}

#[test]
fn test_legacy_host_gets_legacy_variant() {
    let fx = fixture(
        HostCapabilities::new().with_api_version("2016.2"),
        FormatterConfig::alternate("whitespace"),
    );

    fx.context.apply_configured_formatter(&fx.session).expect("install");

    let service = slot(&fx).service();
    let file = SourceFile::new("src/lib.rs", "rust", "x  \n");
    let changes = ChangedRanges::new(vec![TextRange::new(0, 1).expect("range")], Vec::new());
    assert_eq!(
        service.reformat_changed_ranges(&file, &changes).expect("changed"),
        "host:reformat_changed_ranges"
    );
    assert_eq!(service.reformat(&file).expect("reformat"), "x\n");
}

#[test]
fn test_host_native_config_leaves_host_service() {
    let fx = fixture(modern_host(), FormatterConfig::host_native());

    fx.context.apply_configured_formatter(&fx.session).expect("apply");

    assert_eq!(
        fx.context.formatter_status(&fx.session).expect("status"),
        FormatterStatus::Native {
            service: "host-style".to_string()
        }
    );
}

#[test]
fn test_foreign_owner_is_a_conflict() {
    let fx = fixture(modern_host(), FormatterConfig::alternate("whitespace"));
    fx.registry
        .register_instance(
            &fx.session.id,
            &ServiceKey::code_style(),
            ServiceSlot::Foreign {
                owner: "other-formatter-plugin".to_string(),
                service: Arc::new(HostStyleService),
            },
        )
        .expect("register");

    let err = fx
        .context
        .apply_configured_formatter(&fx.session)
        .expect_err("conflict");

    assert!(err.is_conflict());
    assert!(err.to_string().contains("Demo"));
    assert!(matches!(slot(&fx), ServiceSlot::Foreign { .. }));
}

#[test]
fn test_unknown_engine_fails_bootstrap() {
    let registry = Arc::new(InMemoryServiceRegistry::new());
    let config = AppConfig {
        formatter: FormatterConfig::alternate("clang-format"),
        ..AppConfig::default()
    };

    let result = init_switchboard(config, registry);

    assert!(matches!(result, Err(Error::UnsupportedCapability { .. })));
}

#[test]
fn test_available_components_lists_providers() {
    let fx = fixture(modern_host(), FormatterConfig::host_native());
    let components = fx.context.available_components();

    let overrides: Vec<&str> = components.overrides.iter().map(|(name, _)| *name).collect();
    assert!(overrides.contains(&"legacy"));
    assert!(overrides.contains(&"changed-ranges"));
    assert!(components.has_engine("null"));
    assert!(components.has_engine("whitespace"));

    let variants = fx.context.controller().list_variants();
    assert!(variants.iter().all(|variant| variant.compatible));
}

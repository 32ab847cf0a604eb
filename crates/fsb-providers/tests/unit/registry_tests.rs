//! Tests for linkme registration of overrides and engines
//!
//! Linking fsb_providers is what fills the slices.

use crate::host_stub::HostStyleService;
use fsb_application::domain_services::CapabilitySelector;
use fsb_application::ports::registry::{
    list_formatter_overrides, list_formatting_engines, resolve_formatting_engine,
};
use fsb_domain::Error;
use fsb_domain::constants::CHANGED_RANGES_SYMBOL;
use fsb_domain::ports::OverrideVariant;
use fsb_domain::value_objects::{FormatterConfig, HostCapabilities};
use std::sync::Arc;

#[test]
fn test_both_override_variants_registered() {
    let overrides = list_formatter_overrides();
    let names: Vec<&str> = overrides.iter().map(|(name, _)| *name).collect();
    assert!(names.contains(&"legacy"), "Available: {names:?}");
    assert!(names.contains(&"changed-ranges"), "Available: {names:?}");
}

#[test]
fn test_engines_registered_with_descriptions() {
    let engines = list_formatting_engines();
    assert!(engines.iter().any(|(name, _)| *name == "null"));
    assert!(engines.iter().any(|(name, _)| *name == "whitespace"));
    for (name, description) in &engines {
        assert!(!description.is_empty(), "Engine '{name}' should have a description");
    }
}

#[test]
fn test_resolve_unknown_engine_lists_available() {
    let result = resolve_formatting_engine(&FormatterConfig::alternate("nonexistent_engine_xyz"));
    match result {
        Err(Error::UnsupportedCapability { message }) => {
            assert!(message.contains("nonexistent_engine_xyz"));
            assert!(message.contains("whitespace"));
        }
        Err(other) => panic!("Expected UnsupportedCapability, got {other:?}"),
        Ok(_) => panic!("Expected error for unknown engine"),
    }
}

#[test]
fn test_registered_selector_follows_host_symbols() {
    let legacy = CapabilitySelector::new(Arc::new(HostCapabilities::new()));
    let ranged = CapabilitySelector::new(Arc::new(
        HostCapabilities::new().with_symbol(CHANGED_RANGES_SYMBOL),
    ));
    let config = FormatterConfig::alternate("null");

    let from_legacy = legacy
        .select(HostStyleService::shared(), &config)
        .expect("legacy host");
    let from_ranged = ranged
        .select(HostStyleService::shared(), &config)
        .expect("newer host");

    assert_eq!(from_legacy.variant(), OverrideVariant::Legacy);
    assert_eq!(from_ranged.variant(), OverrideVariant::ChangedRanges);
}

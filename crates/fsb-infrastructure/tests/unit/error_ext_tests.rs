//! Error Extension Tests

use fsb_domain::error::{Error, Result};
use fsb_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result = not_found().config_context("cannot load fsb.toml");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_context_and_with_context() {
    let eager = not_found().context("eager");
    assert!(matches!(eager, Err(Error::Infrastructure { ref message, .. }) if message.starts_with("eager: ")));

    let lazy = not_found().with_context(|| format!("lazy {}", 42));
    assert!(matches!(lazy, Err(Error::Infrastructure { ref message, .. }) if message.starts_with("lazy 42: ")));
}

#[test]
fn test_ok_passes_through() {
    let value: io::Result<u8> = Ok(7);
    assert_eq!(value.context("unused").unwrap(), 7);
}

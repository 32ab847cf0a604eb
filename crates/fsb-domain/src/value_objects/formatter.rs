//! Formatter selection value objects

use crate::constants::DEFAULT_ENGINE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which formatter should serve a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatterKind {
    /// Leave the host's own code style service in place
    #[default]
    HostNative,
    /// Route formatting through the alternate engine
    Alternate,
}

/// Desired formatting behavior for a session
///
/// Engine settings are opaque to the switchboard; they are handed to the
/// engine factory untouched.
///
/// # Example
///
/// ```
/// use fsb_domain::value_objects::FormatterConfig;
///
/// let config = FormatterConfig::alternate("whitespace")
///     .with_style("X")
///     .with_language("rust")
///     .with_setting("indent", "spaces");
/// assert!(config.selects_alternate());
/// assert!(config.enables_language("rust"));
/// assert!(!config.enables_language("java"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Host-native or alternate engine
    pub formatter: FormatterKind,
    /// Registered engine name (e.g. "whitespace", "null")
    pub engine: String,
    /// Named style profile understood by the engine
    pub style: Option<String>,
    /// Languages handled by the engine; empty means every language
    pub languages: Vec<String>,
    /// Additional engine-specific settings
    pub settings: BTreeMap<String, String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            formatter: FormatterKind::HostNative,
            engine: DEFAULT_ENGINE.to_string(),
            style: None,
            languages: Vec::new(),
            settings: BTreeMap::new(),
        }
    }
}

impl FormatterConfig {
    /// Config that keeps the host formatter
    pub fn host_native() -> Self {
        Self::default()
    }

    /// Config that selects the alternate formatter backed by `engine`
    pub fn alternate(engine: impl Into<String>) -> Self {
        Self {
            formatter: FormatterKind::Alternate,
            engine: engine.into(),
            ..Self::default()
        }
    }

    /// Set the style profile
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Enable the engine for one more language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Add an engine-specific setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// True if this config asks for the alternate engine
    pub fn selects_alternate(&self) -> bool {
        self.formatter == FormatterKind::Alternate
    }

    /// True if files of `language` should go through the engine
    pub fn enables_language(&self, language: &str) -> bool {
        self.languages.is_empty()
            || self
                .languages
                .iter()
                .any(|enabled| enabled.eq_ignore_ascii_case(language))
    }

    /// Look up an engine setting
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}

//! Main application configuration

use super::logging::LoggingConfig;
use fsb_domain::value_objects::{FormatterConfig, HostCapabilities};
use serde::{Deserialize, Serialize};

/// Everything the switchboard reads at startup
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [host]
/// api_version = "2016.3"
/// symbols = ["ChangedRangesInfo"]
///
/// [formatter]
/// formatter = "alternate"
/// engine = "whitespace"
/// languages = ["rust"]
///
/// [formatter.settings]
/// indent = "spaces"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Capabilities of the running host
    pub host: HostCapabilities,
    /// Formatter applied to sessions by default
    pub formatter: FormatterConfig,
}

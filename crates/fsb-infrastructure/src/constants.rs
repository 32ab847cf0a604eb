//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fsb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fsb";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "FSB";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "FSB_LOG";

/// Maximum number of rotated log files kept
pub const LOG_MAX_FILES: usize = 5;

/// Log file stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "fsb";

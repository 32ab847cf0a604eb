//! Provider constants

/// Engine setting: "spaces" expands leading tabs, "tabs" leaves them
pub const SETTING_INDENT: &str = "indent";

/// Engine setting: width of one expanded tab
pub const SETTING_INDENT_SIZE: &str = "indent_size";

/// Engine setting: "true" makes whole-file formatting end with a newline
pub const SETTING_FINAL_NEWLINE: &str = "final_newline";

/// Priority of the legacy override variant
pub const LEGACY_PRIORITY: u32 = 0;

/// Priority of the changed-ranges override variant
pub const CHANGED_RANGES_PRIORITY: u32 = 10;

//! Domain layer constants
//!
//! Identifiers shared between the host boundary and the switchboard core.

/// Well-known registry key of the code style service slot
pub const CODE_STYLE_SERVICE_KEY: &str = "code-style-manager";

/// Host symbol that only exists from the changed-ranges API onward
pub const CHANGED_RANGES_SYMBOL: &str = "ChangedRangesInfo";

/// Default engine used when a config selects the alternate formatter without naming one
pub const DEFAULT_ENGINE: &str = "whitespace";

/// Default indentation width for engines that expand tabs
pub const DEFAULT_INDENT_SIZE: usize = 4;

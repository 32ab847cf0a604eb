//! Component Resolver
//!
//! Lists what the linkme registries hold in this build, for diagnostics and
//! configuration help.

use fsb_application::ports::registry::{list_formatter_overrides, list_formatting_engines};

/// List every registered override variant and formatting engine
pub fn list_available_components() -> AvailableComponents {
    AvailableComponents {
        overrides: list_formatter_overrides(),
        engines: list_formatting_engines(),
    }
}

/// Registered components by category
#[derive(Debug, Clone)]
pub struct AvailableComponents {
    /// Override variants (name, description)
    pub overrides: Vec<(&'static str, &'static str)>,
    /// Formatting engines (name, description)
    pub engines: Vec<(&'static str, &'static str)>,
}

impl AvailableComponents {
    /// True if an engine with `name` is registered
    pub fn has_engine(&self, name: &str) -> bool {
        self.engines.iter().any(|(engine, _)| *engine == name)
    }
}

impl std::fmt::Display for AvailableComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Available Components:")?;
        writeln!(f)?;

        writeln!(f, "Override Variants:")?;
        for (name, desc) in &self.overrides {
            writeln!(f, "  - {name}: {desc}")?;
        }
        writeln!(f)?;

        writeln!(f, "Formatting Engines:")?;
        for (name, desc) in &self.engines {
            writeln!(f, "  - {name}: {desc}")?;
        }

        Ok(())
    }
}

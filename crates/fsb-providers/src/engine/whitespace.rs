//! Whitespace formatting engine
//!
//! A small line-oriented engine: strips trailing whitespace, optionally
//! expands leading tabs and ensures a final newline. Only lines touching
//! the requested ranges are rewritten.

use crate::constants::{SETTING_FINAL_NEWLINE, SETTING_INDENT, SETTING_INDENT_SIZE};
use fsb_domain::constants::DEFAULT_INDENT_SIZE;
use fsb_domain::error::{Error, Result};
use fsb_domain::ports::FormattingEngine;
use fsb_domain::value_objects::{FormatterConfig, SourceFile, TextRange};
use std::sync::Arc;

/// Line-oriented whitespace normalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitespaceFormattingEngine {
    expand_tabs: bool,
    indent_size: usize,
    final_newline: bool,
}

impl Default for WhitespaceFormattingEngine {
    fn default() -> Self {
        Self {
            expand_tabs: false,
            indent_size: DEFAULT_INDENT_SIZE,
            final_newline: true,
        }
    }
}

impl WhitespaceFormattingEngine {
    /// Build the engine from the config's engine settings
    ///
    /// # Errors
    /// `Error::Configuration` for unparseable settings.
    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        let mut engine = Self::default();

        if let Some(indent) = config.setting(SETTING_INDENT) {
            engine.expand_tabs = match indent {
                "spaces" => true,
                "tabs" => false,
                other => {
                    return Err(Error::configuration(format!(
                        "Invalid {SETTING_INDENT} '{other}'. Use spaces or tabs"
                    )));
                }
            };
        }
        if let Some(size) = config.setting(SETTING_INDENT_SIZE) {
            engine.indent_size = size
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    Error::configuration(format!("Invalid {SETTING_INDENT_SIZE} '{size}'"))
                })?;
        }
        if let Some(flag) = config.setting(SETTING_FINAL_NEWLINE) {
            engine.final_newline = flag.parse::<bool>().map_err(|e| {
                Error::configuration_with_source(format!("Invalid {SETTING_FINAL_NEWLINE} '{flag}'"), e)
            })?;
        }
        Ok(engine)
    }

    /// Expand leading tabs into spaces
    ///
    /// An `indent_size` of 0 is treated as 1.
    pub fn with_expand_tabs(mut self, indent_size: usize) -> Self {
        self.expand_tabs = true;
        self.indent_size = indent_size.max(1);
        self
    }

    fn rewrite_line(&self, body: &str, out: &mut String) {
        let trimmed = body.trim_end_matches([' ', '\t']);
        if !self.expand_tabs {
            out.push_str(trimmed);
            return;
        }
        let indent_end = trimmed
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(trimmed.len());
        let mut column = 0;
        for c in trimmed[..indent_end].chars() {
            if c == '\t' {
                let width = self.indent_size - column % self.indent_size;
                out.extend(std::iter::repeat_n(' ', width));
                column += width;
            } else {
                out.push(c);
                column += 1;
            }
        }
        out.push_str(&trimmed[indent_end..]);
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

impl FormattingEngine for WhitespaceFormattingEngine {
    fn engine_name(&self) -> &str {
        "whitespace"
    }

    fn format(&self, file: &SourceFile, ranges: &[TextRange]) -> Result<String> {
        let whole_file = ranges.is_empty();
        let mut out = String::with_capacity(file.text.len());
        let mut offset = 0;

        for line in file.text.split_inclusive('\n') {
            let (body, ending) = split_line_ending(line);
            let line_end = offset + body.len();
            if whole_file || ranges.iter().any(|range| range.touches(offset, line_end)) {
                self.rewrite_line(body, &mut out);
            } else {
                out.push_str(body);
            }
            out.push_str(ending);
            offset += line.len();
        }

        if whole_file && self.final_newline && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use fsb_application::ports::registry::{FORMATTING_ENGINES, FormattingEngineEntry};

fn whitespace_engine_factory(config: &FormatterConfig) -> Result<Arc<dyn FormattingEngine>> {
    Ok(Arc::new(WhitespaceFormattingEngine::from_config(config)?))
}

#[linkme::distributed_slice(FORMATTING_ENGINES)]
static WHITESPACE_ENGINE: FormattingEngineEntry = FormattingEngineEntry {
    name: "whitespace",
    description: "Whitespace engine (trailing whitespace, tab expansion, final newline)",
    factory: whitespace_engine_factory,
};

//! Source text value objects

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file handed to the code style service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file inside the session
    pub path: PathBuf,
    /// Language identifier (e.g. "rust", "java")
    pub language: String,
    /// Current file contents
    pub text: String,
}

impl SourceFile {
    /// Create a source file
    pub fn new(path: impl Into<PathBuf>, language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            text: text.into(),
        }
    }

    /// Range covering the whole file
    pub fn full_range(&self) -> TextRange {
        TextRange {
            start: 0,
            end: self.text.len(),
        }
    }

    /// Ensure `range` addresses valid character boundaries of this file
    pub fn check_range(&self, range: TextRange) -> Result<()> {
        if range.end > self.text.len() {
            return Err(Error::invalid_argument(format!(
                "range {range} exceeds length {} of {}",
                self.text.len(),
                self.path.display()
            )));
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return Err(Error::invalid_argument(format!(
                "range {range} splits a character in {}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

/// Half-open byte range `[start, end)` within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextRange {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl TextRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_argument(format!(
                "range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length range
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if the range touches `[start, end]`
    ///
    /// Touching counts so that an empty range at a line boundary still
    /// selects that line.
    pub fn touches(&self, start: usize, end: usize) -> bool {
        self.start <= end && start <= self.end
    }
}

impl std::fmt::Display for TextRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Ranges changed by the user since the file was last saved
///
/// Newer hosts hand this to the formatter so that "reformat changed code"
/// only touches what the user actually inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedRanges {
    /// Ranges of freshly inserted text
    pub inserted: Vec<TextRange>,
    /// Every range that differs from the saved copy
    pub changed: Vec<TextRange>,
}

impl ChangedRanges {
    /// Create a changed-ranges descriptor
    pub fn new(inserted: Vec<TextRange>, changed: Vec<TextRange>) -> Self {
        Self { inserted, changed }
    }

    /// Union of inserted and changed ranges, sorted and de-duplicated
    pub fn all(&self) -> Vec<TextRange> {
        let mut ranges: Vec<TextRange> = self
            .inserted
            .iter()
            .chain(self.changed.iter())
            .copied()
            .collect();
        ranges.sort_unstable();
        ranges.dedup();
        ranges
    }
}

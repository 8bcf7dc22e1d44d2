//! Class-name tables.
//!
//! A class table maps a class id (the argmax index of a row's scores) to a
//! human-readable name. The table is optional everywhere: callers pass
//! `Option<&ClassTable>`, and [`resolve_label`] falls back to
//! [`UNKNOWN_LABEL`] rather than failing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DetectError;

/// Label used when no name can be resolved for a class id.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// An ordered, immutable list of class names. Index = class id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTable {
    names: Vec<String>,
}

impl ClassTable {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parses a names file: one class per line.
    ///
    /// Trailing newlines are dropped, and `\r\n` line endings are accepted.
    /// Interior blank lines are kept as empty names so later ids do not
    /// shift.
    pub fn from_names_str(content: &str) -> Self {
        let trimmed = content.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return Self::default();
        }

        let names = trimmed
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { names }
    }

    /// Reads a names file from disk.
    ///
    /// # Errors
    /// Returns [`DetectError::ClassTableRead`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, DetectError> {
        let content = fs::read_to_string(path).map_err(|source| DetectError::ClassTableRead {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_names_str(&content);
        debug!(path = %path.display(), classes = table.len(), "loaded class table");
        Ok(table)
    }

    /// Name for `class_id`, if it is in range.
    pub fn get(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Resolves the label for a class id.
///
/// Returns the table entry when a table is present, the id is in range and
/// the name is non-empty; [`UNKNOWN_LABEL`] otherwise.
pub fn resolve_label(table: Option<&ClassTable>, class_id: usize) -> &str {
    table
        .and_then(|t| t.get(class_id))
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coco_head() -> ClassTable {
        ClassTable::from_names_str("person\nbicycle\ncar\n")
    }

    #[test]
    fn parses_one_name_per_line() {
        let table = coco_head();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("person"));
        assert_eq!(table.get(2), Some("car"));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn strips_trailing_newlines_and_carriage_returns() {
        let table = ClassTable::from_names_str("dog\r\ncat\r\n\n\n");
        assert_eq!(table.names(), &["dog".to_string(), "cat".to_string()]);
    }

    #[test]
    fn keeps_interior_blank_lines() {
        let table = ClassTable::from_names_str("a\n\nc");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(1), Some(""));
    }

    #[test]
    fn empty_content_gives_empty_table() {
        assert!(ClassTable::from_names_str("").is_empty());
        assert!(ClassTable::from_names_str("\n\n").is_empty());
    }

    #[test]
    fn resolves_names_in_range() {
        let table = coco_head();
        assert_eq!(resolve_label(Some(&table), 1), "bicycle");
    }

    #[test]
    fn falls_back_when_absent_or_out_of_range() {
        let table = coco_head();
        assert_eq!(resolve_label(None, 0), UNKNOWN_LABEL);
        assert_eq!(resolve_label(Some(&table), 3), UNKNOWN_LABEL);
        assert_eq!(resolve_label(Some(&table), usize::MAX), UNKNOWN_LABEL);
    }

    #[test]
    fn falls_back_for_empty_names() {
        let table = ClassTable::from_names_str("a\n\nc");
        assert_eq!(resolve_label(Some(&table), 1), UNKNOWN_LABEL);
    }
}

//! `[[menu]]` configuration.
//!
//! Entries are rendered as site navigation in the order they are declared.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About me"
//! path = "/pages/about"
//! ```

use crate::config::{ConfigDiagnostics, Constraint, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A single navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    fn label_at(index: usize) -> FieldPath {
        FieldPath::owned(format!("menu[{index}].label"))
    }

    fn path_at(index: usize) -> FieldPath {
        FieldPath::owned(format!("menu[{index}].path"))
    }
}

/// Validate menu entries.
///
/// # Checks
/// - every entry has a non-empty `label` and `path`
/// - duplicate paths are reported as warnings
pub fn validate_menu(menu: &[MenuItem], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (index, item) in menu.iter().enumerate() {
        if item.label.trim().is_empty() {
            diag.error(
                MenuItem::label_at(index),
                Constraint::Required,
                "menu entry has no label",
            );
        }

        if item.path.trim().is_empty() {
            diag.error_with_hint(
                MenuItem::path_at(index),
                Constraint::Required,
                "menu entry has no path",
                "e.g.: path = \"/\"",
            );
        } else if !seen.insert(item.path.as_str()) {
            diag.warn(
                MenuItem::path_at(index),
                format!("'{}' already appears earlier in the menu", item.path),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_menu() {
        let menu = vec![MenuItem::new("Articles", "/"), MenuItem::new("About", "/about")];
        let mut diag = ConfigDiagnostics::new();
        validate_menu(&menu, &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_missing_label_and_path() {
        let menu = vec![
            MenuItem::new("Articles", "/"),
            MenuItem::new("", "/about"),
            MenuItem::new("Contact", ""),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_menu(&menu, &mut diag);

        assert_eq!(diag.len(), 2);
        assert!(diag.find("menu[1].label").is_some());
        assert!(diag.find("menu[2].path").is_some());
    }

    #[test]
    fn test_duplicate_path_is_only_a_warning() {
        let menu = vec![MenuItem::new("Articles", "/"), MenuItem::new("Home", "/")];
        let mut diag = ConfigDiagnostics::new();
        validate_menu(&menu, &mut diag);

        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0, "menu[1].path");
    }
}

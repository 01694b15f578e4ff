//! `[author]` configuration.
//!
//! # Example
//!
//! ```toml
//! [author]
//! name = "Alice"
//! photo = "/photo.jpg"
//! bio = "Writes about compilers."
//!
//! [author.contacts]
//! github = "alice"
//! ```

use super::Contacts;
use crate::config::{ConfigDiagnostics, Constraint, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The site author and their contact handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorInfo {
    /// Display name.
    pub name: String,

    /// Avatar path relative to the static-asset root (e.g., "/photo.jpg").
    pub photo: String,

    /// Short biography shown in the sidebar.
    pub bio: String,

    /// Social contact handles.
    pub contacts: Contacts,
}

pub struct AuthorFields {
    pub name: FieldPath,
    pub photo: FieldPath,
}

impl AuthorInfo {
    pub const FIELDS: AuthorFields = AuthorFields {
        name: FieldPath::new("author.name"),
        photo: FieldPath::new("author.photo"),
    };

    /// Location of the avatar inside `static_root`, or `None` when no photo is set.
    pub fn photo_path(&self, static_root: &Path) -> Option<PathBuf> {
        if self.photo.is_empty() {
            return None;
        }
        Some(static_root.join(self.photo.trim_start_matches('/')))
    }

    /// Validate author configuration.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `photo`, when set, must be a relative asset path that stays under the
    ///   static-asset root (no scheme, no `..` segment)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                Constraint::Required,
                "author name must not be empty",
                "e.g.: [author] name = \"Alice\"",
            );
        }

        if !self.photo.is_empty() {
            if url::Url::parse(&self.photo).is_ok() {
                diag.error_with_hint(
                    Self::FIELDS.photo,
                    Constraint::AssetPath,
                    format!("'{}' is a URL, expected a path under the static root", self.photo),
                    "put the image in the static directory and use e.g. \"/photo.jpg\"",
                );
            } else if self.photo.split(['/', '\\']).any(|segment| segment == "..") {
                diag.error_with_hint(
                    Self::FIELDS.photo,
                    Constraint::AssetPath,
                    format!("'{}' escapes the static root", self.photo),
                    "remove `..` segments from the path",
                );
            }
        }
    }
}

//! Config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field as it is spelled in `lumen.toml`.
///
/// Static paths are declared as constants next to the section they belong to.
/// Paths that carry an index or a user-supplied key (`menu[2].label`,
/// `author.contacts.mastodon`) are built at runtime with [`FieldPath::owned`].
///
/// # Example
///
/// ```ignore
/// diag.error(SiteConfig::FIELDS.title, Constraint::Required, "must not be empty");
/// diag.error(MenuItem::label_at(2), Constraint::Required, "must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

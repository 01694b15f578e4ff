//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error (json)")]
    Json(#[from] serde_json::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Validation(ConfigDiagnostics),

    #[error("site config is already initialized")]
    AlreadyInitialized,
}

// ============================================================================
// Constraint
// ============================================================================

/// The rule a config field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Field must be present and non-empty.
    Required,
    /// Field must be an absolute `http`/`https` URL with a host.
    AbsoluteUrl,
    /// Field must be a URL path starting with `/`.
    PathPrefix,
    /// Field must be an integer greater than zero.
    PositiveInteger,
    /// Field must be a path resolving under the static-asset root.
    AssetPath,
    /// Key must be one of the known contact platforms.
    KnownPlatform,
}

impl Constraint {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::AbsoluteUrl => "absolute url",
            Self::PathPrefix => "path prefix",
            Self::PositiveInteger => "positive integer",
            Self::AssetPath => "asset path",
            Self::KnownPlatform => "known platform",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// ConfigValidationError
// ============================================================================

/// A single violated constraint on a config field.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Config field path (e.g., "author.name")
    pub field: FieldPath,
    /// Violated rule
    pub constraint: Constraint,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigValidationError {
    pub fn new(field: FieldPath, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field,
            constraint,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            format_args!("({})", self.constraint).dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigValidationError {}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collects every validation failure of one load, plus non-fatal warnings.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigValidationError>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, constraint: Constraint, message: impl Into<String>) {
        self.errors
            .push(ConfigValidationError::new(field, constraint, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        constraint: Constraint,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigValidationError::new(field, constraint, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display, never fails the load).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "config warnings:");
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// First error reported for `field`, if any.
    pub fn find(&self, field: &str) -> Option<&ConfigValidationError> {
        self.errors.iter().find(|e| e.field.as_str() == field)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

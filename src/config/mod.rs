//! Site configuration management for `lumen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [author], [author.contacts], [[menu]]
//! ├── types/         # ConfigError, diagnostics, field paths, global handle
//! ├── source.rs      # ConfigSource, ConfigFormat, ConfigOverrides
//! ├── template.rs    # starter lumen.toml
//! └── mod.rs         # SiteConfig + loader (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! url = "https://example.com"
//! pathPrefix = "/"
//! title = "My Blog"
//! postsPerPage = 4
//!
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [author]
//! name = "Alice"
//!
//! [author.contacts]
//! github = "alice"
//! ```
//!
//! The record is loaded once at startup, validated as a whole, and then only
//! read. Key names match what the external site build expects, so they are
//! camelCase rather than snake_case.

pub mod section;
mod source;
mod template;
pub mod types;
mod util;

pub use section::{AuthorInfo, Contacts, MenuItem, Platform, UnknownPlatform};
pub use source::{ConfigFormat, ConfigOverrides, ConfigSource};
pub use template::{CONFIG_FILE, generate_config_template};
pub use types::{
    CONFIG, ConfigDiagnostics, ConfigError, ConfigHandle, ConfigValidationError, Constraint,
    FieldPath, cfg, init_config, try_cfg,
};
pub use util::{find_config_file, find_config_file_from, join_url_path};

use crate::{cli::Cli, debug};
use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::path::{Path, PathBuf};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing lumen.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Canonical site origin (e.g., "https://example.com").
    pub url: String,

    /// URL path the site is served under.
    pub path_prefix: String,

    /// Site title.
    pub title: String,

    pub subtitle: String,

    pub copyright: String,

    /// Disqus shortname; empty disables comments.
    pub disqus_shortname: String,

    /// Pagination page size.
    #[serde(deserialize_with = "integral")]
    pub posts_per_page: i64,

    /// Google Analytics tracking id; empty disables analytics.
    pub google_analytics_id: String,

    /// Enable KaTeX math rendering.
    pub use_katex: bool,

    /// Navigation entries in display order.
    pub menu: Vec<MenuItem>,

    pub author: AuthorInfo,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            url: String::new(),
            path_prefix: "/".into(),
            title: String::new(),
            subtitle: String::new(),
            copyright: String::new(),
            disqus_shortname: String::new(),
            posts_per_page: 4,
            google_analytics_id: String::new(),
            use_katex: false,
            menu: Vec::new(),
            author: AuthorInfo::default(),
        }
    }
}

/// An integer, also accepting floats with no fractional part (`4.0`).
///
/// JSON emitters often write whole numbers as floats; `3.5` stays a type error.
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Number::Float(f) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
    }
}

pub struct SiteFields {
    pub url: FieldPath,
    pub path_prefix: FieldPath,
    pub title: FieldPath,
    pub posts_per_page: FieldPath,
}

// ============================================================================
// loading
// ============================================================================

/// Load and validate a site config from `source`.
///
/// All validation failures are collected and returned together as
/// [`ConfigError::Validation`]; nothing is partially accepted.
pub fn load_config(source: &ConfigSource) -> Result<SiteConfig, ConfigError> {
    load_config_with(source, &ConfigOverrides::default())
}

/// Like [`load_config`], applying `overrides` before validation.
pub fn load_config_with(
    source: &ConfigSource,
    overrides: &ConfigOverrides,
) -> Result<SiteConfig, ConfigError> {
    load_config_report(source, overrides).map(|(config, _)| config)
}

/// Like [`load_config_with`], also returning the non-fatal warnings
/// (unknown keys, duplicate menu paths) instead of dropping them.
///
/// Nothing is printed; callers decide how to surface the warnings.
pub fn load_config_report(
    source: &ConfigSource,
    overrides: &ConfigOverrides,
) -> Result<(SiteConfig, ConfigDiagnostics), ConfigError> {
    let (content, format) = source.read()?;
    let (mut config, ignored) = SiteConfig::parse_with_ignored(&content, format)?;

    if let Some(path) = source.path() {
        config.config_path = util::normalize_path(path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
    }

    config.apply_overrides(overrides);
    let warnings = config.finish(&ignored)?;
    Ok((config, warnings))
}

impl SiteConfig {
    pub const FIELDS: SiteFields = SiteFields {
        url: FieldPath::new("url"),
        path_prefix: FieldPath::new("pathPrefix"),
        title: FieldPath::new("title"),
        posts_per_page: FieldPath::new("postsPerPage"),
    };

    /// Load configuration for the CLI.
    ///
    /// Searches upward from cwd for the config file named by `--config`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let expanded = shellexpand::tilde(&cli.config.to_string_lossy()).into_owned();
        let Some(config_path) = find_config_file(Path::new(&expanded)) else {
            bail!(
                "config file '{}' not found. Run 'lumen init' to create one.",
                cli.config.display()
            );
        };

        debug!("config"; "using {}", config_path.display());
        let (config, warnings) =
            load_config_report(&ConfigSource::File(config_path), &cli.overrides())?;

        warnings.print_warnings();
        debug!("config"; "loaded site config '{}'", config.title);
        Ok(config)
    }

    /// Parse and validate a TOML config.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        load_config(&ConfigSource::Toml(content.to_string()))
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        load_config(&ConfigSource::Json(content.to_string()))
    }

    /// Load and validate a config file (TOML or JSON by extension).
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        load_config(&ConfigSource::File(path.into()))
    }

    /// Parse content, collecting any unknown keys as dotted paths.
    fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut track = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, &mut track)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, &mut track)?;
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Update config option if an override value is provided.
    fn update_option<T: Clone>(config_option: &mut T, override_option: Option<&T>) {
        if let Some(option) = override_option {
            *config_option = option.clone();
        }
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        Self::update_option(&mut self.url, overrides.site_url.as_ref());
        Self::update_option(&mut self.path_prefix, overrides.path_prefix.as_ref());
    }

    /// Validate, failing on any error; the returned diagnostics hold
    /// only warnings.
    fn finish(&self, ignored: &[String]) -> Result<ConfigDiagnostics, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        report_unknown_keys(ignored, &mut diag);
        self.check(&mut diag);

        if diag.has_errors() {
            Err(ConfigError::Validation(diag))
        } else {
            Ok(diag)
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.check(&mut diag);
        diag.into_result()
    }

    fn check(&self, diag: &mut ConfigDiagnostics) {
        self.validate_url(diag);

        if let Some(problem) = util::path_prefix_problem(&self.path_prefix) {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                Constraint::PathPrefix,
                format!("'{}' {}", self.path_prefix, problem),
                "use \"/\" or a path like \"/blog\"",
            );
        }

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                Constraint::Required,
                "site title must not be empty",
                "e.g.: title = \"My Blog\"",
            );
        }

        if self.posts_per_page <= 0 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                Constraint::PositiveInteger,
                format!("must be greater than 0, got {}", self.posts_per_page),
                "e.g.: postsPerPage = 4",
            );
        }

        section::validate_menu(&self.menu, diag);
        self.author.validate(diag);
    }

    /// `url` must be an absolute http(s) URL with a host.
    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        const HINT: &str = "use format like https://example.com";

        if self.url.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                Constraint::Required,
                "site url must not be empty",
                HINT,
            );
            return;
        }
        if self.url.trim() != self.url {
            diag.error_with_hint(
                Self::FIELDS.url,
                Constraint::AbsoluteUrl,
                "URL must not have leading or trailing whitespace",
                HINT,
            );
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        Constraint::AbsoluteUrl,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        HINT,
                    );
                } else if !has_authority(&self.url, parsed.scheme()) {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        Constraint::AbsoluteUrl,
                        "URL must be written as scheme://host",
                        HINT,
                    );
                } else if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        Constraint::AbsoluteUrl,
                        "URL must have a valid host",
                        HINT,
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    Constraint::AbsoluteUrl,
                    format!("invalid URL: {}", e),
                    HINT,
                );
            }
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Whether the comment widget should be rendered.
    pub fn comments_enabled(&self) -> bool {
        !self.disqus_shortname.is_empty()
    }

    /// Whether the analytics snippet should be rendered.
    pub fn analytics_enabled(&self) -> bool {
        !self.google_analytics_id.is_empty()
    }

    /// Number of index pages needed for `total_posts` posts (at least one).
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = usize::try_from(self.posts_per_page).unwrap_or(1).max(1);
        total_posts.div_ceil(per_page).max(1)
    }

    /// Site-relative path of the index page at `index` (0 is the front page).
    ///
    /// ```ignore
    /// config.page_path(0) -> "/"
    /// config.page_path(2) -> "/page/2"
    /// ```
    pub fn page_path(&self, index: usize) -> String {
        if index == 0 {
            join_url_path(&self.path_prefix, "")
        } else {
            join_url_path(&self.path_prefix, &format!("page/{index}"))
        }
    }

    /// Absolute URL of a site path: origin, then `pathPrefix`, then `path`.
    pub fn canonical_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.url.trim_end_matches('/'),
            join_url_path(&self.path_prefix, path)
        )
    }

    /// Location of the author photo under `static_root`.
    pub fn photo_path(&self, static_root: &Path) -> Option<PathBuf> {
        self.author.photo_path(static_root)
    }
}

/// Unknown keys under `[author.contacts]` are errors; anywhere else they are
/// ignored with a warning.
fn report_unknown_keys(ignored: &[String], diag: &mut ConfigDiagnostics) {
    let contacts_prefix = format!("{}.", Contacts::PATH);

    for path in ignored {
        match path.strip_prefix(&contacts_prefix) {
            Some(key) => diag.error_with_hint(
                FieldPath::owned(path.clone()),
                Constraint::KnownPlatform,
                format!("unknown contact platform '{key}'"),
                format!("known platforms: {}", Platform::known_keys()),
            ),
            None => diag.warn(FieldPath::owned(path.clone()), "unknown key, ignored"),
        }
    }
}

/// Whether `url` spells out `scheme://` followed directly by the host.
///
/// The URL parser accepts `https:example.com` and `https:///example.com`,
/// but the raw string is what ends up in canonical links.
fn has_authority(url: &str, scheme: &str) -> bool {
    url.split_once("://").is_some_and(|(written, rest)| {
        written.eq_ignore_ascii_case(scheme) && !rest.starts_with(['/', '\\'])
    })
}

// ============================================================================
// Test Helpers
// ============================================================================

#[cfg(test)]
pub const TEST_CONFIG: &str = r#"
url = "https://lumen.netlify.com"
pathPrefix = "/"
title = "Kowshik Sundararajan"
subtitle = "Software Engineer, animal rights activist and avid cyclist."
copyright = "© All rights reserved."
disqusShortname = ""
postsPerPage = 4
googleAnalyticsId = "UA-73379983-2"
useKatex = false

[[menu]]
label = "Articles"
path = "/"

[author]
name = "John Doe"
photo = "/photo.jpg"
bio = "Pellentesque odio nisi, euismod in, pharetra a, ultricies in, diam. Sed arcu."

[author.contacts]
email = "kowshik.sundararajan@gmail.com"
github = "kowshik-sundararajan"
linkedin = "kowshik-sundararajan"
telegram = "crueltyfreekow"
facebook = "activistkow"
instagram = "itshappykow"
twitter = ""
rss = ""
vkontakte = ""
line = ""
gitlab = ""
weibo = ""
codepen = ""
youtube = ""
soundcloud = ""
"#;

/// A valid config parsed from [`TEST_CONFIG`].
#[cfg(test)]
pub fn test_config() -> SiteConfig {
    SiteConfig::from_str(TEST_CONFIG).unwrap()
}

// ============================================================================
// tests
// ============================================================================

//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/static/images/  ← cwd
/// /home/user/blog/lumen.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` until a directory containing `config_name` is found.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to the path as-is when absolute, or joined with cwd.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Describe what is wrong with a `pathPrefix` value, if anything.
///
/// A valid prefix starts with `/` and is made of plain segments:
/// `/`, `/blog`, `/blog/` and `/a/b` are fine; `blog`, `/a//b`, `/a/../b`,
/// `/a?b` are not.
pub fn path_prefix_problem(prefix: &str) -> Option<&'static str> {
    if !prefix.starts_with('/') {
        return Some("must start with `/`");
    }
    if prefix.chars().any(char::is_whitespace) {
        return Some("must not contain whitespace");
    }
    if prefix.contains(['?', '#', '\\']) {
        return Some("must not contain `?`, `#` or `\\`");
    }

    if prefix.contains("//") {
        return Some("must not contain empty segments");
    }
    prefix
        .split('/')
        .any(|segment| matches!(segment, "." | ".."))
        .then_some("must not contain `.` or `..` segments")
}

/// Join a path prefix and a site path with exactly one `/` between parts.
///
/// The result always starts with `/`; a trailing `/` on `path` is kept.
///
/// # Examples
/// ```ignore
/// join_url_path("/", "/posts/hello")     -> "/posts/hello"
/// join_url_path("/blog", "posts/hello")  -> "/blog/posts/hello"
/// join_url_path("/blog/", "/")           -> "/blog/"
/// ```
pub fn join_url_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{prefix}/{path}")
}

// ============================================================================
// tests
// ============================================================================

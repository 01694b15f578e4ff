//! `lumen init`: write a starter config.

use crate::config::{CONFIG_FILE, generate_config_template};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Create `lumen.toml` in `name` (or the current directory).
pub fn new_site(name: Option<&Path>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    let path = write_config(&root, force)?;
    log!("init"; "created {}", path.display());
    Ok(())
}

/// Write the starter config into `root`, creating the directory if needed.
///
/// Refuses to replace an existing config unless `force` is set.
pub fn write_config(root: &Path, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite it",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_write_config_creates_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("my-blog");

        let path = write_config(&root, false).unwrap();
        assert!(path.ends_with(CONFIG_FILE));

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.title, "My Blog");
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "title = \"mine\"").unwrap();

        assert!(write_config(dir.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"mine\"");

        write_config(dir.path(), true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[author.contacts]"));
    }
}

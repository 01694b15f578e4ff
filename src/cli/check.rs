//! `lumen check`: validate the config and summarize what the site will show.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;
use std::path::Path;

use super::CheckArgs;

/// Print a summary of the loaded config plus any non-fatal warnings.
///
/// Validation itself already happened while loading; reaching this point
/// means the config is valid.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let static_root = config.root_join(&args.static_dir);
    let report = CheckReport::new(config, &static_root);

    for line in &report.lines {
        log!("check"; "{}", line);
    }
    for warning in &report.warnings {
        log!("warning"; "{}", warning);
    }
    log!("check"; "config is valid");
    Ok(())
}

/// Human-readable summary of a site config.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn new(config: &SiteConfig, static_root: &Path) -> Self {
        let mut report = Self::default();

        report
            .lines
            .push(format!("{} <{}>", config.title, config.canonical_url("")));
        report.lines.push(format!(
            "{} post(s) per page, comments {}, analytics {}, katex {}",
            config.posts_per_page,
            on_off(config.comments_enabled()),
            on_off(config.analytics_enabled()),
            on_off(config.use_katex),
        ));

        for (index, item) in config.menu.iter().enumerate() {
            report
                .lines
                .push(format!("menu {}: {} -> {}", index + 1, item.label, item.path));
        }

        report.lines.push(format!("author: {}", config.author.name));
        for (platform, handle) in config.author.contacts.visible() {
            report
                .lines
                .push(format!("  {platform}: {}", platform.href(handle)));
        }

        if let Some(photo) = config.photo_path(static_root)
            && !photo.exists()
        {
            report.warnings.push(format!(
                "author photo '{}' not found at {}",
                config.author.photo,
                photo.display()
            ));
        }

        report
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use std::fs;

    #[test]
    fn test_report_lists_menu_and_visible_contacts() {
        let dir = tempfile::tempdir().unwrap();
        let report = CheckReport::new(&test_config(), dir.path());

        assert!(report.lines[0].contains("https://lumen.netlify.com/"));
        assert!(report.lines.iter().any(|l| l == "menu 1: Articles -> /"));
        assert!(
            report
                .lines
                .iter()
                .any(|l| l.contains("https://t.me/crueltyfreekow"))
        );
        assert!(!report.lines.iter().any(|l| l.contains("twitter")));
    }

    #[test]
    fn test_missing_photo_warns() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config();

        let report = CheckReport::new(&config, dir.path());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("/photo.jpg"));

        fs::write(dir.path().join("photo.jpg"), b"").unwrap();
        let report = CheckReport::new(&config, dir.path());
        assert!(report.warnings.is_empty());
    }
}

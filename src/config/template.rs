//! Starter `lumen.toml` written by `lumen init`.

/// Default config filename
pub const CONFIG_FILE: &str = "lumen.toml";

/// Generate lumen.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Lumen site configuration (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(SITE_SECTION);
    out.push('\n');
    out.push_str(MENU_SECTION);
    out.push('\n');
    out.push_str(AUTHOR_SECTION);
    out.push('\n');
    out.push_str(&contacts_section());

    out
}

const SITE_SECTION: &str = r#"# Canonical origin of the site (absolute http/https URL).
url = "https://example.com"
# URL path the site is served under.
pathPrefix = "/"
title = "My Blog"
subtitle = "Notes on software and everything else."
copyright = "© All rights reserved."
# Leave empty to disable comments.
disqusShortname = ""
postsPerPage = 4
# Leave empty to disable analytics.
googleAnalyticsId = ""
useKatex = false
"#;

const MENU_SECTION: &str = r#"# Navigation entries, rendered in this order.
[[menu]]
label = "Articles"
path = "/"
"#;

const AUTHOR_SECTION: &str = r#"[author]
name = "John Doe"
# Relative to the static-asset root.
photo = "/photo.jpg"
bio = ""
"#;

/// `[author.contacts]` with every known platform listed and left empty.
fn contacts_section() -> String {
    use super::Platform;

    let mut out = String::from("# Empty handles are not shown.\n[author.contacts]\n");
    for platform in Platform::ALL {
        out.push_str(&format!("{} = \"\"\n", platform.as_str()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Platform, SiteConfig};

    #[test]
    fn test_template_is_a_valid_config() {
        let config = SiteConfig::from_str(&generate_config_template()).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.posts_per_page, 4);
        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.author.contacts.visible().count(), 0);
    }

    #[test]
    fn test_template_lists_every_platform() {
        let template = generate_config_template();
        for platform in Platform::ALL {
            assert!(template.contains(&format!("{} = \"\"", platform.as_str())));
        }
    }
}

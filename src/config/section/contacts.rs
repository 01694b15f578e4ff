//! `[author.contacts]` configuration.
//!
//! One handle per known platform. An empty handle hides the platform.
//!
//! # Example
//!
//! ```toml
//! [author.contacts]
//! email = "alice@example.com"
//! github = "alice"
//! twitter = ""
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A social platform a contact handle can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Email,
    Github,
    Linkedin,
    Telegram,
    Facebook,
    Instagram,
    Twitter,
    Rss,
    Vkontakte,
    Line,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact platform `{0}`")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// All platforms, in the order they appear in `[author.contacts]`.
    pub const ALL: [Self; 15] = [
        Self::Email,
        Self::Github,
        Self::Linkedin,
        Self::Telegram,
        Self::Facebook,
        Self::Instagram,
        Self::Twitter,
        Self::Rss,
        Self::Vkontakte,
        Self::Line,
        Self::Gitlab,
        Self::Weibo,
        Self::Codepen,
        Self::Youtube,
        Self::Soundcloud,
    ];

    /// Key of this platform in `[author.contacts]`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Telegram => "telegram",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Rss => "rss",
            Self::Vkontakte => "vkontakte",
            Self::Line => "line",
            Self::Gitlab => "gitlab",
            Self::Weibo => "weibo",
            Self::Codepen => "codepen",
            Self::Youtube => "youtube",
            Self::Soundcloud => "soundcloud",
        }
    }

    /// Link a renderer should use for `handle` on this platform.
    ///
    /// `rss` handles are already URLs and pass through unchanged.
    pub fn href(&self, handle: &str) -> String {
        match self {
            Self::Email => format!("mailto:{handle}"),
            Self::Github => format!("https://github.com/{handle}"),
            Self::Linkedin => format!("https://www.linkedin.com/in/{handle}"),
            Self::Telegram => format!("https://t.me/{handle}"),
            Self::Facebook => format!("https://www.facebook.com/{handle}"),
            Self::Instagram => format!("https://www.instagram.com/{handle}"),
            Self::Twitter => format!("https://www.twitter.com/{handle}"),
            Self::Rss => handle.to_string(),
            Self::Vkontakte => format!("https://vk.com/{handle}"),
            Self::Line => format!("line://ti/p/{handle}"),
            Self::Gitlab => format!("https://www.gitlab.com/{handle}"),
            Self::Weibo => format!("https://www.weibo.com/{handle}"),
            Self::Codepen => format!("https://www.codepen.io/{handle}"),
            Self::Youtube => format!("https://www.youtube.com/channel/{handle}"),
            Self::Soundcloud => format!("https://soundcloud.com/{handle}"),
        }
    }

    /// Comma-separated list of every platform key, for hints.
    pub fn known_keys() -> String {
        Self::ALL
            .iter()
            .map(Platform::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Contact handles keyed by platform.
///
/// Missing keys default to an empty handle; empty handles are kept as-is so
/// the record serializes back exactly as it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub telegram: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub rss: String,
    pub vkontakte: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub youtube: String,
    pub soundcloud: String,
}

impl Contacts {
    /// Prefix of contact keys in dotted field paths.
    pub const PATH: &'static str = "author.contacts";

    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Email => &self.email,
            Platform::Github => &self.github,
            Platform::Linkedin => &self.linkedin,
            Platform::Telegram => &self.telegram,
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
            Platform::Twitter => &self.twitter,
            Platform::Rss => &self.rss,
            Platform::Vkontakte => &self.vkontakte,
            Platform::Line => &self.line,
            Platform::Gitlab => &self.gitlab,
            Platform::Weibo => &self.weibo,
            Platform::Codepen => &self.codepen,
            Platform::Youtube => &self.youtube,
            Platform::Soundcloud => &self.soundcloud,
        }
    }

    /// Every platform with its handle (possibly empty), in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Platforms with a non-empty handle, in declaration order.
    pub fn visible(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.iter().filter(|(_, handle)| !handle.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trips_through_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        assert_eq!(
            "mastodon".parse::<Platform>(),
            Err(UnknownPlatform("mastodon".into()))
        );
    }

    #[test]
    fn test_href() {
        assert_eq!(Platform::Email.href("a@b.c"), "mailto:a@b.c");
        assert_eq!(Platform::Github.href("alice"), "https://github.com/alice");
        assert_eq!(Platform::Telegram.href("alice"), "https://t.me/alice");
        assert_eq!(Platform::Rss.href("/rss.xml"), "/rss.xml");
        assert_eq!(Platform::Line.href("alice"), "line://ti/p/alice");
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let contacts: Contacts = toml::from_str("github = \"alice\"").unwrap();
        assert_eq!(contacts.github, "alice");
        assert_eq!(contacts.twitter, "");
    }

    #[test]
    fn test_visible_skips_empty_and_keeps_order() {
        let contacts = Contacts {
            telegram: "t".into(),
            email: "e".into(),
            twitter: String::new(),
            ..Default::default()
        };
        let visible: Vec<_> = contacts.visible().map(|(p, _)| p).collect();
        assert_eq!(visible, vec![Platform::Email, Platform::Telegram]);
        assert_eq!(contacts.iter().count(), Platform::ALL.len());
    }

    #[test]
    fn test_empty_handles_serialize_as_empty_strings() {
        let json = serde_json::to_value(Contacts::default()).unwrap();
        assert_eq!(json["twitter"], serde_json::json!(""));
        assert_eq!(json.as_object().unwrap().len(), Platform::ALL.len());
    }
}

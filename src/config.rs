use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::is_valid_email;

pub const DEFAULT_OWNER: &str = "Aaron Kantrowitz";
pub const DEFAULT_TAGLINE: &str = "Technical Program Leader, Engineering and AI Systems";
pub const DEFAULT_CONTACT_ADDRESS: &str = "me@aaronkantrowitz.com";
pub const DEFAULT_SITE_URL: &str = "https://aaronkantrowitz.com/";

const KEYWORDS: &str = "CTO, digital strategist, product leader, engineering, technology consultant, digital experiences, Spacebox Digital";

/// Browsers fire longer timeouts immediately, so timer delays are capped here.
const MAX_TIMER_MS: u64 = i32::MAX as u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid email address: {value}")]
    InvalidAddress { var: &'static str, value: String },
    #[error("Couldn't parse {var}: {reason}")]
    Parse { var: &'static str, reason: String },
}

/// Timing and layout knobs for the slide navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Minimum time between two accepted navigation intents.
    pub debounce_ms: u64,
    /// How long a transition blocks further intents. Should match the scroll animation.
    pub settle_ms: u64,
    /// Maximum number of entries shown in the side navigation strip.
    pub nav_window: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 150,
            settle_ms: 500,
            nav_window: 15,
        }
    }
}

impl NavigatorConfig {
    /// Delay for the timer that settles a transition, `slack_ms` past `settle_ms`.
    pub fn settle_delay(&self, slack_ms: u64) -> Duration {
        Duration::from_millis(self.settle_ms.saturating_add(slack_ms).min(MAX_TIMER_MS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

/// One `<meta>` tag for the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub contact_address: String,
    pub site_url: String,
    pub navigator: NavigatorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            navigator: NavigatorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Reads `SITE_OWNER`, `SITE_TAGLINE`, `CONTACT_ADDRESS`, `SITE_URL` and
    /// `NAVIGATOR_CONFIG` (JSON) from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let owner = non_empty("SITE_OWNER").unwrap_or(defaults.owner);
        let tagline = non_empty("SITE_TAGLINE").unwrap_or(defaults.tagline);
        let site_url = non_empty("SITE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.site_url);

        let contact_address = match non_empty("CONTACT_ADDRESS") {
            Some(value) => {
                let value = value.trim().to_string();
                if !is_valid_email(&value) {
                    return Err(ConfigError::InvalidAddress {
                        var: "CONTACT_ADDRESS",
                        value,
                    });
                }
                value
            }
            None => defaults.contact_address,
        };

        let navigator = match non_empty("NAVIGATOR_CONFIG") {
            Some(raw) => serde_json::from_str::<NavigatorConfig>(&raw).map_err(|e| {
                ConfigError::Parse {
                    var: "NAVIGATOR_CONFIG",
                    reason: e.to_string(),
                }
            })?,
            None => defaults.navigator,
        };

        Ok(Self {
            owner,
            tagline,
            contact_address,
            site_url,
            navigator,
        })
    }

    /// `Owner | Tagline`, used for the landing page and its social cards.
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.owner, self.tagline)
    }

    /// Author, keyword, Open Graph and Twitter card tags for the landing page.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let title = self.page_title();
        let description = format!(
            "{} is a {}. Leading teams to create work that matters.",
            self.owner, self.tagline
        );
        [
            (MetaKey::Name("description"), description.clone()),
            (MetaKey::Name("author"), self.owner.clone()),
            (MetaKey::Name("keywords"), format!("{}, {KEYWORDS}", self.owner)),
            (MetaKey::Property("og:title"), title.clone()),
            (MetaKey::Property("og:description"), description.clone()),
            (MetaKey::Property("og:type"), "website".to_string()),
            (MetaKey::Property("og:url"), self.site_url.clone()),
            (MetaKey::Property("og:site_name"), self.owner.clone()),
            (MetaKey::Name("twitter:card"), "summary_large_image".to_string()),
            (MetaKey::Name("twitter:title"), title),
            (MetaKey::Name("twitter:description"), description),
        ]
        .into_iter()
        .map(|(key, content)| MetaTag { key, content })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.navigator.debounce_ms, 150);
        assert_eq!(config.navigator.settle_ms, 500);
        assert_eq!(config.navigator.nav_window, 15);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_OWNER", "Jane Doe"),
            ("CONTACT_ADDRESS", " jane@example.com "),
            ("SITE_TAGLINE", "   "),
        ]))
        .unwrap();
        assert_eq!(config.owner, "Jane Doe");
        assert_eq!(config.contact_address, "jane@example.com");
        // blank values fall back to the default
        assert_eq!(config.tagline, DEFAULT_TAGLINE);
    }

    #[test]
    fn test_invalid_contact_address() {
        let err = SiteConfig::from_lookup(lookup_from(&[("CONTACT_ADDRESS", "nope")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddress {
                var: "CONTACT_ADDRESS",
                value: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_partial_navigator_config() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[("NAVIGATOR_CONFIG", r#"{"settle_ms": 800}"#)]))
                .unwrap();
        assert_eq!(config.navigator.settle_ms, 800);
        assert_eq!(config.navigator.debounce_ms, 150);

        let err = SiteConfig::from_lookup(lookup_from(&[("NAVIGATOR_CONFIG", "{oops")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { var: "NAVIGATOR_CONFIG", .. }));
    }

    #[test]
    fn test_settle_delay_saturates() {
        let config = NavigatorConfig::default();
        assert_eq!(config.settle_delay(20), Duration::from_millis(520));

        let config = SiteConfig::from_lookup(lookup_from(&[(
            "NAVIGATOR_CONFIG",
            r#"{"settle_ms": 18446744073709551615}"#,
        )]))
        .unwrap()
        .navigator;
        assert_eq!(config.settle_ms, u64::MAX);
        assert_eq!(config.settle_delay(20), Duration::from_millis(MAX_TIMER_MS));
    }

    #[test]
    fn test_meta_tags_follow_config() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_OWNER", "Jane Doe"),
            ("SITE_TAGLINE", "Engineer"),
            ("SITE_URL", "https://jane.example/"),
        ]))
        .unwrap();
        let tags = config.meta_tags();
        let content = |key: MetaKey| {
            tags.iter()
                .find(|t| t.key == key)
                .map(|t| t.content.as_str())
        };

        assert_eq!(config.page_title(), "Jane Doe | Engineer");
        assert_eq!(content(MetaKey::Name("author")), Some("Jane Doe"));
        assert_eq!(content(MetaKey::Property("og:title")), Some("Jane Doe | Engineer"));
        assert_eq!(content(MetaKey::Name("twitter:title")), Some("Jane Doe | Engineer"));
        assert_eq!(content(MetaKey::Property("og:url")), Some("https://jane.example/"));
        assert_eq!(content(MetaKey::Property("og:site_name")), Some("Jane Doe"));
        assert!(content(MetaKey::Name("keywords")).is_some_and(|k| k.starts_with("Jane Doe, ")));
        assert!(content(MetaKey::Name("description")).is_some_and(|d| d.contains("Engineer")));
        // each tag appears once
        assert_eq!(tags.len(), 11);
        assert!(tags
            .iter()
            .all(|t| tags.iter().filter(|o| o.key == t.key).count() == 1));
    }
}

use tracing::warn;

use wiki_api::request::{API_URL, USER_AGENT};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const MIN_TIMEOUT_MS: u64 = 500;
pub const MAX_TIMEOUT_MS: u64 = 60_000;
/// Theme primary color used for headings.
pub const DEFAULT_ACCENT_COLOR: &str = "2196F3";

#[derive(Clone, Debug)]
pub struct WikiConfig {
    pub api_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    /// Six hex digits, no leading `#`.
    pub accent_color: String,
    /// ANSI colors in the terminal renderer.
    pub colors: bool,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            colors: true,
        }
    }
}

impl WikiConfig {
    /// - WIKI_API_URL (default https://en.wikipedia.org/w/api.php)
    /// - WIKI_USER_AGENT (default MPOS-WikipediaApp/1.0 ...)
    /// - WIKI_TIMEOUT_MS (default 10000, clamped to 500..=60000)
    /// - WIKI_ACCENT_COLOR (default 2196F3)
    /// - NO_COLOR (set: disable ANSI colors)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(url) = env_non_empty("WIKI_API_URL") {
            cfg.api_url = url;
        }
        if let Some(ua) = env_non_empty("WIKI_USER_AGENT") {
            cfg.user_agent = ua;
        }

        cfg.timeout_ms = parse_env_u64("WIKI_TIMEOUT_MS", cfg.timeout_ms)
            .clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS);

        if let Some(color) = env_non_empty("WIKI_ACCENT_COLOR") {
            match parse_accent_color(&color) {
                Some(c) => cfg.accent_color = c,
                None => warn!(
                    target: "wikid::config",
                    "ignoring WIKI_ACCENT_COLOR={color:?}; expected six hex digits"
                ),
            }
        }

        cfg.colors = std::env::var_os("NO_COLOR").is_none();
        cfg
    }
}

/// Accepts `rrggbb` or `#rrggbb`, returns the digits without `#`.
pub fn parse_accent_color(s: &str) -> Option<String> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_string())
    } else {
        None
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_u64(key: &str, default_val: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default_val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_color_accepts_hash_prefix() {
        assert_eq!(parse_accent_color("#ff8800").as_deref(), Some("ff8800"));
        assert_eq!(parse_accent_color("2196F3").as_deref(), Some("2196F3"));
        assert_eq!(parse_accent_color("blue"), None);
        assert_eq!(parse_accent_color("#fff"), None);
    }

    #[test]
    fn env_overrides_and_clamps() {
        std::env::set_var("WIKI_TIMEOUT_MS", "5");
        std::env::set_var("WIKI_ACCENT_COLOR", "nothex");
        std::env::set_var("WIKI_API_URL", "http://127.0.0.1:9/w/api.php");
        let cfg = WikiConfig::from_env();
        assert_eq!(cfg.timeout_ms, MIN_TIMEOUT_MS);
        assert_eq!(cfg.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(cfg.api_url, "http://127.0.0.1:9/w/api.php");
        std::env::remove_var("WIKI_TIMEOUT_MS");
        std::env::remove_var("WIKI_ACCENT_COLOR");
        std::env::remove_var("WIKI_API_URL");
    }
}

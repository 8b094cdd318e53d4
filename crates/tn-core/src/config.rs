//! Configuration for a play-through.

use std::time::Duration;

/// Tries granted each time a level is entered.
pub const DEFAULT_TRIES: u32 = 2;

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong answers allowed per level attempt (at least 1).
    pub tries_per_level: u32,
    /// How long a correct answer stays on screen before moving on.
    pub pass_delay: Duration,
    /// How long the last wrong answer stays on screen before returning to the menu.
    pub exhausted_delay: Duration,
    /// How long a wrong answer stays on screen before the player may retry.
    pub retry_delay: Duration,
    /// Page URL included in the share link on the finish screen.
    pub page_url: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tries_per_level: DEFAULT_TRIES,
            pass_delay: Duration::from_millis(800),
            exhausted_delay: Duration::from_millis(500),
            retry_delay: Duration::from_millis(500),
            page_url: None,
        }
    }
}

impl GameConfig {
    /// Set the tries per level (minimum 1).
    pub fn with_tries(mut self, tries: u32) -> Self {
        self.tries_per_level = tries.max(1);
        self
    }

    /// Use the same delay for every deferred transition.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.pass_delay = delay;
        self.exhausted_delay = delay;
        self.retry_delay = delay;
        self
    }

    /// Set the page URL used for sharing.
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tries_per_level, 2);
        assert_eq!(cfg.pass_delay, Duration::from_millis(800));
        assert_eq!(cfg.exhausted_delay, Duration::from_millis(500));
        assert!(cfg.page_url.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_tries(3)
            .with_delay(Duration::ZERO)
            .with_page_url("https://example.org/trap-net");
        assert_eq!(cfg.tries_per_level, 3);
        assert_eq!(cfg.retry_delay, Duration::ZERO);
        assert_eq!(cfg.page_url.as_deref(), Some("https://example.org/trap-net"));
    }

    #[test]
    fn tries_clamped() {
        assert_eq!(GameConfig::default().with_tries(0).tries_per_level, 1);
    }
}

//! Session state: the one mutable entity of a play-through.
//!
//! Fields are crate-private. Outside the crate the state is a read-only
//! snapshot; every change goes through [`Game`](crate::Game).

use std::fmt;

/// The screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Title screen.
    #[default]
    Splash,
    /// Player enters their name.
    NameEntry,
    /// Grid of levels.
    LevelSelect,
    /// A scenario is being answered.
    Playing,
    /// All levels passed.
    Finished,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Splash => "splash",
            Route::NameEntry => "name entry",
            Route::LevelSelect => "level select",
            Route::Playing => "playing",
            Route::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Snapshot of a play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) route: Route,
    pub(crate) player_name: String,
    pub(crate) current_level: u32,
    pub(crate) highest_unlocked: u32,
    pub(crate) tries_remaining: u32,
    pub(crate) selected_option: Option<char>,
    pub(crate) answer_revealed: bool,
    pub(crate) completed: bool,
}

impl SessionState {
    /// A fresh session granting `tries` per level.
    pub fn new(tries: u32) -> Self {
        Self {
            route: Route::Splash,
            player_name: String::new(),
            current_level: 1,
            highest_unlocked: 1,
            tries_remaining: tries,
            selected_option: None,
            answer_revealed: false,
            completed: false,
        }
    }

    /// Current screen.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Name entered by the player, empty until confirmed.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Level being played, or last played.
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// Highest selectable level.
    pub fn highest_unlocked(&self) -> u32 {
        self.highest_unlocked
    }

    /// Wrong answers left in the current attempt.
    pub fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    /// Option picked in the current attempt.
    pub fn selected_option(&self) -> Option<char> {
        self.selected_option
    }

    /// Whether the outcome of the last answer is on screen.
    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Whether the final level has been passed.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Whether `level` may be selected.
    pub fn is_unlocked(&self, level: u32) -> bool {
        level <= self.highest_unlocked
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session() {
        let s = SessionState::default();
        assert_eq!(s.route(), Route::Splash);
        assert_eq!(s.player_name(), "");
        assert_eq!(s.current_level(), 1);
        assert_eq!(s.highest_unlocked(), 1);
        assert_eq!(s.tries_remaining(), 2);
        assert_eq!(s.selected_option(), None);
        assert!(!s.answer_revealed());
        assert!(!s.completed());
    }

    #[test]
    fn unlock_check() {
        let s = SessionState::default();
        assert!(s.is_unlocked(1));
        assert!(!s.is_unlocked(2));
    }

    #[test]
    fn route_display() {
        assert_eq!(Route::NameEntry.to_string(), "name entry");
        assert_eq!(Route::Finished.to_string(), "finished");
    }
}

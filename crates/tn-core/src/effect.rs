//! Side effects requested by game transitions.
//!
//! Transitions never play sounds or start timers themselves. They return
//! effects and the presentation layer carries them out.

use std::fmt;
use std::time::Duration;

/// An audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The answer was right.
    Correct,
    /// The answer was wrong.
    Wrong,
    /// A level was passed.
    LevelPass,
    /// The final level was passed.
    Finish,
}

impl Cue {
    /// All cues.
    pub const ALL: [Cue; 4] = [Cue::Correct, Cue::Wrong, Cue::LevelPass, Cue::Finish];

    /// Asset-style name of the cue.
    pub fn name(self) -> &'static str {
        match self {
            Cue::Correct => "correct",
            Cue::Wrong => "wrong",
            Cue::LevelPass => "pass",
            Cue::Finish => "finish",
        }
    }
}

/// Identifies one scheduled transition within one session generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub(crate) generation: u64,
    pub(crate) seq: u64,
}

/// A request to call [`Game::fire`](crate::Game::fire) with `ticket` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    /// Ticket to hand back when the delay elapses.
    pub ticket: Ticket,
    /// How long to wait.
    pub delay: Duration,
}

/// A message to show the player once a reveal has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A level other than the last was passed.
    LevelPassed(u32),
    /// All tries were used up on a level.
    OutOfTries(u32),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LevelPassed(level) => write!(f, "Congrats! You passed Level {level}"),
            Notice::OutOfTries(level) => write!(
                f,
                "You're out of tries for Level {level}. Resetting tries."
            ),
        }
    }
}

/// A side effect produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Play an audio cue (fire and forget).
    Play(Cue),
    /// Start the celebration effect.
    Celebrate,
    /// Schedule a deferred transition, replacing any earlier one.
    Schedule(Deferred),
    /// Show a message.
    Notice(Notice),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_messages() {
        assert_eq!(
            Notice::LevelPassed(3).to_string(),
            "Congrats! You passed Level 3"
        );
        assert_eq!(
            Notice::OutOfTries(1).to_string(),
            "You're out of tries for Level 1. Resetting tries."
        );
    }

    #[test]
    fn cue_names() {
        let names: Vec<_> = Cue::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["correct", "wrong", "pass", "finish"]);
    }
}

//! Error types for the catalog and the game state machine.

use thiserror::Error;

use crate::session::Route;

/// Result type for game transitions.
pub type GameResult<T> = Result<T, GameError>;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A rejected game action.
///
/// Every variant leaves the session untouched; the presentation layer
/// reports it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player name was empty or whitespace.
    #[error("enter a name to continue")]
    EmptyName,

    /// The submitted key is not one of the scenario's options.
    #[error("no option with key {0}")]
    UnknownOption(char),

    /// The action is not valid on the current screen.
    #[error("cannot {action} from {route}")]
    WrongRoute {
        /// The attempted action.
        action: &'static str,
        /// The route the session was on.
        route: Route,
    },

    /// The level has not been unlocked yet.
    #[error("level {level} is locked (highest unlocked: {highest_unlocked})")]
    LevelLocked {
        /// Requested level.
        level: u32,
        /// Highest level currently selectable.
        highest_unlocked: u32,
    },

    /// The catalog has no scenario for this level.
    #[error("no scenario for level {0}")]
    UnknownLevel(u32),

    /// An answer has already been revealed for this attempt.
    #[error("answer already revealed")]
    AlreadyRevealed,

    /// A reveal is on screen and a deferred transition is pending.
    #[error("wait for the current answer to resolve")]
    RevealPending,
}

/// Coarse classification of [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input.
    Validation,
    /// Action not allowed in the current state.
    IllegalTransition,
}

impl GameError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::EmptyName | GameError::UnknownOption(_) => ErrorKind::Validation,
            GameError::WrongRoute { .. }
            | GameError::LevelLocked { .. }
            | GameError::UnknownLevel(_)
            | GameError::AlreadyRevealed
            | GameError::RevealPending => ErrorKind::IllegalTransition,
        }
    }
}

/// Errors that can occur while loading or validating a scenario catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON for the catalog shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog has no scenarios.
    #[error("catalog has no scenarios")]
    Empty,

    /// Scenario ids must run "1", "2", ... in order.
    #[error("scenario at position {position} has id {found:?}, expected \"{position}\"")]
    NonDenseId {
        /// 1-indexed position in the catalog.
        position: u32,
        /// The id found there.
        found: String,
    },

    /// A scenario without options.
    #[error("scenario {0} has no options")]
    NoOptions(String),

    /// An option key is not a single uppercase ASCII letter.
    #[error("scenario {id} has option key {key:?}, expected a letter A-Z")]
    InvalidOptionKey {
        /// Scenario id.
        id: String,
        /// The offending key.
        key: char,
    },

    /// Two options of one scenario share a key.
    #[error("scenario {id} has duplicate option key {key}")]
    DuplicateOptionKey {
        /// Scenario id.
        id: String,
        /// The repeated key.
        key: char,
    },

    /// The correct key does not name any option.
    #[error("scenario {id}: correct key {key} matches no option")]
    MissingCorrectKey {
        /// Scenario id.
        id: String,
        /// The dangling key.
        key: char,
    },
}

//! Core types for Trap Net: the scenario catalog and the game state machine.
//!
//! The [`Game`] controller owns all mutable session state. Every transition
//! returns a list of [`Effect`]s (audio cues, celebration, deferred
//! transitions) for the presentation layer to carry out, so the core itself
//! never renders, plays sounds, or sleeps.

pub mod catalog;
pub mod config;
pub mod effect;
pub mod error;
pub mod game;
pub mod intent;
pub mod scenario;
pub mod session;
pub mod share;
pub mod timer;

pub use catalog::Catalog;
pub use config::GameConfig;
pub use effect::{Cue, Deferred, Effect, Notice, Ticket};
pub use error::{CatalogError, CatalogResult, ErrorKind, GameError, GameResult};
pub use game::{Game, Pending};
pub use intent::Intent;
pub use scenario::{OptionChoice, Scenario};
pub use session::{Route, SessionState};
pub use timer::DeferredTimer;

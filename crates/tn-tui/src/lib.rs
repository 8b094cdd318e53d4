//! Terminal UI for Trap Net.
//!
//! Renders the game session with ratatui, turns key presses into game
//! intents, and carries out the effects the game returns: terminal audio
//! cues, the confetti burst, notices, and deferred transitions.

pub mod app;
pub mod confetti;
pub mod feedback;
pub mod screens;
pub mod shared;
pub mod terminal;

//! Audio feedback.
//!
//! Cues are fire-and-forget. A sink may fail (no terminal, closed pipe) and
//! the app logs and ignores the failure.

use std::io::{self, Write};

use thiserror::Error;
use tn_core::Cue;

/// Failure to play a cue.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Writing to the output failed.
    #[error("feedback output failed: {0}")]
    Io(#[from] io::Error),
}

/// Something that can play audio cues.
pub trait Feedback {
    /// Play `cue` without blocking.
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError>;
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Feedback for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Rings the terminal bell, more rings for bigger moments.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    /// Bell on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    /// Bell on an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Number of bell characters written for `cue`.
    pub fn rings(cue: Cue) -> usize {
        match cue {
            Cue::Correct | Cue::Wrong => 1,
            Cue::LevelPass => 2,
            Cue::Finish => 3,
        }
    }

    /// Consume the bell and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Feedback for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        let bells = vec![0x07u8; Self::rings(cue)];
        self.out.write_all(&bells)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_rings_per_cue() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::Correct).unwrap();
        bell.play(Cue::Finish).unwrap();
        assert_eq!(bell.into_inner(), vec![7u8; 4]);
    }

    #[test]
    fn silent_never_fails() {
        for cue in Cue::ALL {
            assert!(Silent.play(cue).is_ok());
        }
    }
}

//! The game controller: the single owner of session state.
//!
//! `Game` enforces the route graph
//! `Splash -> NameEntry -> LevelSelect <-> Playing -> Finished`, level
//! unlocking, and the per-level tries budget. Deferred transitions (the
//! pause after an answer is revealed) are handed out as [`Ticket`]s inside
//! [`Effect::Schedule`]; only the most recent ticket of the current session
//! generation is honored by [`Game::fire`].

use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::effect::{Cue, Deferred, Effect, Notice, Ticket};
use crate::error::{GameError, GameResult};
use crate::intent::Intent;
use crate::scenario::Scenario;
use crate::session::{Route, SessionState};

/// What a pending deferred transition will do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Leave a passed level: to the grid, or to the finish screen after the last level.
    Advance,
    /// Clear a wrong answer so the player can try again.
    Retry,
    /// Tries are used up: restore them and return to the grid.
    Exhausted,
}

/// A Trap Net play-through.
#[derive(Debug, Clone)]
pub struct Game {
    catalog: Catalog,
    config: GameConfig,
    state: SessionState,
    generation: u64,
    next_seq: u64,
    pending: Option<(Ticket, Pending)>,
}

impl Game {
    /// Start a session on the title screen.
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        let state = SessionState::new(config.tries_per_level);
        Self {
            catalog,
            config,
            state,
            generation: 0,
            next_seq: 0,
            pending: None,
        }
    }

    /// Current session snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The scenario catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Scenario for the current level.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.catalog.level(self.state.current_level)
    }

    /// Whether `level` exists and may be selected.
    pub fn is_unlocked(&self, level: u32) -> bool {
        self.catalog.level(level).is_some() && self.state.is_unlocked(level)
    }

    /// The deferred transition waiting to fire, if any.
    pub fn pending(&self) -> Option<Pending> {
        self.pending.map(|(_, p)| p)
    }

    /// Dispatch a presentation intent to the matching operation.
    pub fn apply(&mut self, intent: Intent) -> GameResult<Vec<Effect>> {
        tracing::trace!(intent = intent.name(), "applying intent");
        match intent {
            Intent::StartNameEntry => self.start_name_entry(),
            Intent::ConfirmName(name) => self.confirm_name(&name),
            Intent::SelectLevel(level) => self.select_level(level),
            Intent::SubmitAnswer(key) => self.submit_answer(key),
            Intent::LeaveLevel => self.leave_level(),
            Intent::ResetSession => Ok(self.reset_session()),
        }
    }

    /// Leave the title screen for name entry.
    pub fn start_name_entry(&mut self) -> GameResult<Vec<Effect>> {
        self.require_route(Route::Splash, "start a new game")?;
        self.go(Route::NameEntry);
        Ok(Vec::new())
    }

    /// Store the player name and open the level grid.
    pub fn confirm_name(&mut self, name: &str) -> GameResult<Vec<Effect>> {
        self.require_route(Route::NameEntry, "confirm a name")?;
        let name = name.trim();
        if name.is_empty() {
            return reject(GameError::EmptyName);
        }
        self.state.player_name = name.to_string();
        self.go(Route::LevelSelect);
        Ok(Vec::new())
    }

    /// Open an unlocked level with a fresh tries budget.
    pub fn select_level(&mut self, level: u32) -> GameResult<Vec<Effect>> {
        self.require_route(Route::LevelSelect, "select a level")?;
        if level > self.state.highest_unlocked {
            return reject(GameError::LevelLocked {
                level,
                highest_unlocked: self.state.highest_unlocked,
            });
        }
        if self.catalog.level(level).is_none() {
            return reject(GameError::UnknownLevel(level));
        }

        self.state.current_level = level;
        self.state.tries_remaining = self.config.tries_per_level;
        self.state.selected_option = None;
        self.state.answer_revealed = false;
        self.go(Route::Playing);
        Ok(Vec::new())
    }

    /// Answer the current scenario.
    pub fn submit_answer(&mut self, key: char) -> GameResult<Vec<Effect>> {
        self.require_route(Route::Playing, "submit an answer")?;
        if self.state.answer_revealed {
            return reject(GameError::AlreadyRevealed);
        }
        let level = self.state.current_level;
        let scenario = match self.catalog.level(level) {
            Some(s) => s,
            None => return reject(GameError::UnknownLevel(level)),
        };
        if scenario.option(key).is_none() {
            return reject(GameError::UnknownOption(key));
        }
        let correct = scenario.is_correct(key);

        self.state.selected_option = Some(key);
        self.state.answer_revealed = true;

        if correct {
            self.state.highest_unlocked = self.state.highest_unlocked.max(level + 1);
            tracing::debug!(
                level,
                highest_unlocked = self.state.highest_unlocked,
                "correct answer"
            );
            let delay = self.config.pass_delay;
            Ok(vec![
                Effect::Play(Cue::Correct),
                Effect::Play(Cue::LevelPass),
                self.schedule(Pending::Advance, delay),
            ])
        } else {
            self.state.tries_remaining = self.state.tries_remaining.saturating_sub(1);
            tracing::debug!(
                level,
                %key,
                tries_remaining = self.state.tries_remaining,
                "wrong answer"
            );
            let next = if self.state.tries_remaining == 0 {
                self.schedule(Pending::Exhausted, self.config.exhausted_delay)
            } else {
                self.schedule(Pending::Retry, self.config.retry_delay)
            };
            Ok(vec![Effect::Play(Cue::Wrong), next])
        }
    }

    /// Return to the level grid from an unanswered level.
    pub fn leave_level(&mut self) -> GameResult<Vec<Effect>> {
        self.require_route(Route::Playing, "leave the level")?;
        if self.state.answer_revealed {
            return reject(GameError::RevealPending);
        }
        self.state.selected_option = None;
        self.state.tries_remaining = self.config.tries_per_level;
        self.go(Route::LevelSelect);
        Ok(Vec::new())
    }

    /// Discard the play-through and return to the title screen.
    ///
    /// Any pending deferred transition is cancelled.
    pub fn reset_session(&mut self) -> Vec<Effect> {
        self.state = SessionState::new(self.config.tries_per_level);
        self.generation += 1;
        self.pending = None;
        tracing::debug!(generation = self.generation, "session reset");
        Vec::new()
    }

    /// Run the deferred transition for `ticket`.
    ///
    /// Tickets that are stale (issued before a reset, or superseded by a
    /// later schedule) are ignored.
    pub fn fire(&mut self, ticket: Ticket) -> Vec<Effect> {
        let pending = match self.pending {
            Some((current, pending)) if current == ticket => pending,
            _ => {
                tracing::debug!(
                    ticket_generation = ticket.generation,
                    generation = self.generation,
                    "ignoring stale deferred transition"
                );
                return Vec::new();
            }
        };
        self.pending = None;

        let level = self.state.current_level;
        match pending {
            Pending::Advance if level >= self.catalog.last_level() => {
                self.state.completed = true;
                self.go(Route::Finished);
                vec![Effect::Play(Cue::Finish), Effect::Celebrate]
            }
            Pending::Advance => {
                self.go(Route::LevelSelect);
                vec![Effect::Notice(Notice::LevelPassed(level))]
            }
            Pending::Retry => {
                self.state.answer_revealed = false;
                self.state.selected_option = None;
                Vec::new()
            }
            Pending::Exhausted => {
                self.state.tries_remaining = self.config.tries_per_level;
                self.go(Route::LevelSelect);
                vec![Effect::Notice(Notice::OutOfTries(level))]
            }
        }
    }

    fn schedule(&mut self, pending: Pending, delay: Duration) -> Effect {
        let ticket = Ticket {
            generation: self.generation,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some((ticket, pending));
        Effect::Schedule(Deferred { ticket, delay })
    }

    fn require_route(&self, route: Route, action: &'static str) -> GameResult<()> {
        if self.state.route == route {
            Ok(())
        } else {
            reject(GameError::WrongRoute {
                action,
                route: self.state.route,
            })
        }
    }

    fn go(&mut self, route: Route) {
        tracing::debug!(from = %self.state.route, to = %route, "route change");
        self.state.route = route;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Catalog::builtin(), GameConfig::default())
    }
}

fn reject<T>(err: GameError) -> GameResult<T> {
    tracing::info!(%err, "action rejected");
    Err(err)
}

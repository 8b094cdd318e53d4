//! Top-level application state: the game plus UI-only state.
//!
//! `TuiApp` is the bridge between the terminal and the game. Key presses
//! become [`Intent`]s, and the [`Effect`]s that come back are carried out
//! here: cues go to the feedback sink, schedules arm the timer, notices
//! become banners, and the celebration starts the confetti.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tn_core::share::share_link;
use tn_core::{DeferredTimer, Effect, Game, GameError, Intent, Notice, Route, SessionState};

use crate::confetti::Confetti;
use crate::feedback::Feedback;

/// Columns in the level grid.
pub const GRID_COLUMNS: u32 = 5;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 32;

const CONFETTI_PIECES: usize = 400;

/// Tone of a banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral information.
    Info,
    /// Good news.
    Success,
    /// A rejected action.
    Error,
}

/// A one-line message shown under the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Message text.
    pub text: String,
    /// How to style it.
    pub tone: Tone,
}

/// Main application state for the TUI.
pub struct TuiApp {
    game: Game,
    timer: DeferredTimer,
    feedback: Box<dyn Feedback>,
    rng: StdRng,
    share_link: Option<String>,
    /// Name being typed on the name-entry screen.
    pub name_input: String,
    /// Highlighted level on the level grid (1-indexed).
    pub level_cursor: u32,
    /// Highlighted option on the play screen.
    pub option_cursor: usize,
    /// Message under the current screen.
    pub banner: Option<Banner>,
    /// Running confetti burst.
    pub confetti: Option<Confetti>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create an app around a fresh game.
    pub fn new(game: Game, feedback: Box<dyn Feedback>, seed: u64) -> Self {
        let page_url = game.config().page_url.clone().unwrap_or_default();
        let share_link = match share_link(&page_url) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!(%e, page_url = %page_url, "cannot build share link");
                None
            }
        };

        Self {
            game,
            timer: DeferredTimer::new(),
            feedback,
            rng: StdRng::seed_from_u64(seed),
            share_link,
            name_input: String::new(),
            level_cursor: 1,
            option_cursor: 0,
            banner: None,
            confetti: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Shortcut for the session snapshot.
    pub fn state(&self) -> &SessionState {
        self.game.state()
    }

    /// Link for sharing a finished run.
    pub fn share_link(&self) -> Option<&str> {
        self.share_link.as_deref()
    }

    /// Whether a deferred transition is waiting on the timer.
    pub fn is_waiting(&self) -> bool {
        self.timer.is_armed()
    }

    /// When the pending deferred transition falls due.
    pub fn next_due(&self) -> Option<Instant> {
        self.timer.next_due()
    }

    /// Forward an intent to the game and carry out the resulting effects.
    pub fn dispatch(&mut self, intent: Intent, now: Instant) {
        let resets = matches!(intent, Intent::ResetSession);
        let route_before = self.state().route();

        match self.game.apply(intent) {
            Ok(effects) => {
                self.banner = None;
                if resets {
                    self.timer.cancel();
                    self.confetti = None;
                    self.name_input.clear();
                    self.level_cursor = 1;
                }
                self.apply_effects(effects, now);
            }
            Err(e) => self.reject(&e),
        }

        if self.state().route() != route_before {
            self.option_cursor = 0;
        }
    }

    /// Advance time: fire a due deferred transition and animate confetti.
    pub fn tick(&mut self, now: Instant) {
        if let Some(ticket) = self.timer.take_due(now) {
            let effects = self.game.fire(ticket);
            self.option_cursor = 0;
            self.apply_effects(effects, now);
        }

        if let Some(confetti) = &mut self.confetti {
            confetti.step();
            if confetti.is_empty() {
                self.confetti = None;
            }
        }
    }

    /// Handle a key press on the current screen.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let route = self.state().route();

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }
        if key.code == KeyCode::Char('?') && route != Route::NameEntry {
            self.show_help = true;
            return;
        }

        match route {
            Route::Splash => match key.code {
                KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') => {
                    self.dispatch(Intent::StartNameEntry, now);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Route::NameEntry => match key.code {
                KeyCode::Enter => {
                    let name = self.name_input.clone();
                    self.dispatch(Intent::ConfirmName(name), now);
                }
                KeyCode::Backspace => {
                    self.name_input.pop();
                }
                KeyCode::Esc => self.name_input.clear(),
                KeyCode::Char(c) if !c.is_control() => {
                    if self.name_input.chars().count() < MAX_NAME_LEN {
                        self.name_input.push(c);
                    }
                }
                _ => {}
            },
            Route::LevelSelect => match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.move_level_cursor(-1),
                KeyCode::Right | KeyCode::Char('l') => self.move_level_cursor(1),
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_level_cursor(-i64::from(GRID_COLUMNS));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_level_cursor(i64::from(GRID_COLUMNS));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.dispatch(Intent::SelectLevel(self.level_cursor), now);
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Route::Playing => self.handle_playing_key(key, now),
            Route::Finished => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.dispatch(Intent::ResetSession, now),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent, now: Instant) {
        let keys: Vec<char> = self
            .game
            .current_scenario()
            .map(|s| s.options.iter().map(|o| o.key).collect())
            .unwrap_or_default();

        // j and k move the cursor unless they name an option.
        match key.code {
            KeyCode::Up => self.move_option_cursor(-1, keys.len()),
            KeyCode::Down => self.move_option_cursor(1, keys.len()),
            KeyCode::Char('k') if !keys.contains(&'K') => self.move_option_cursor(-1, keys.len()),
            KeyCode::Char('j') if !keys.contains(&'J') => self.move_option_cursor(1, keys.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(choice) = keys.get(self.option_cursor) {
                    self.dispatch(Intent::SubmitAnswer(*choice), now);
                }
            }
            KeyCode::Esc => self.dispatch(Intent::LeaveLevel, now),
            KeyCode::Char(c) => {
                let upper = c.to_ascii_uppercase();
                if let Some(index) = keys.iter().position(|k| *k == upper) {
                    self.option_cursor = index;
                    self.dispatch(Intent::SubmitAnswer(upper), now);
                } else if c == 'q' {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    fn move_option_cursor(&mut self, delta: isize, options: usize) {
        let next = self.option_cursor.checked_add_signed(delta);
        if let Some(next) = next.filter(|n| *n < options) {
            self.option_cursor = next;
        }
    }

    fn move_level_cursor(&mut self, delta: i64) {
        let last = i64::from(self.game.catalog().last_level());
        let next = i64::from(self.level_cursor) + delta;
        if (1..=last).contains(&next) {
            self.level_cursor = u32::try_from(next).unwrap_or(1);
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::Play(cue) => {
                    if let Err(e) = self.feedback.play(cue) {
                        tracing::warn!(%e, cue = cue.name(), "audio cue failed");
                    }
                }
                Effect::Celebrate => {
                    self.confetti = Some(Confetti::burst(CONFETTI_PIECES, &mut self.rng));
                }
                Effect::Schedule(deferred) => self.timer.schedule(deferred, now),
                Effect::Notice(notice) => {
                    let tone = match notice {
                        Notice::LevelPassed(level) => {
                            let next = level + 1;
                            if self.game.catalog().level(next).is_some() {
                                self.level_cursor = next;
                            }
                            Tone::Success
                        }
                        Notice::OutOfTries(_) => Tone::Info,
                    };
                    self.banner = Some(Banner {
                        text: notice.to_string(),
                        tone,
                    });
                }
            }
        }
    }

    fn reject(&mut self, err: &GameError) {
        // A rejected answer while the reveal is on screen needs no message.
        if *err == GameError::AlreadyRevealed {
            return;
        }
        self.banner = Some(Banner {
            text: err.to_string(),
            tone: Tone::Error,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::feedback::FeedbackError;
    use tn_core::{Catalog, Cue, GameConfig};

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Cue>>>);

    impl Feedback for Recorder {
        fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
            self.0.borrow_mut().push(cue);
            Ok(())
        }
    }

    struct Broken;

    impl Feedback for Broken {
        fn play(&mut self, _cue: Cue) -> Result<(), FeedbackError> {
            Err(FeedbackError::Io(std::io::Error::other("no speaker")))
        }
    }

    fn press(app: &mut TuiApp, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_str(app: &mut TuiApp, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn app_with(feedback: Box<dyn Feedback>) -> TuiApp {
        let config = GameConfig::default().with_page_url("https://trap.example.org");
        TuiApp::new(Game::new(Catalog::builtin(), config), feedback, 3)
    }

    fn to_level_select(app: &mut TuiApp, now: Instant) {
        press(app, KeyCode::Enter, now);
        type_str(app, "alice", now);
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn keyboard_flow_to_level_select() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.state().route(), Route::NameEntry);

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.state().route(), Route::NameEntry);
        assert_eq!(app.banner.as_ref().map(|b| b.tone), Some(Tone::Error));

        type_str(&mut app, "alice", now);
        press(&mut app, KeyCode::Backspace, now);
        type_str(&mut app, "e", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.state().route(), Route::LevelSelect);
        assert_eq!(app.state().player_name(), "alice");
        assert!(app.banner.is_none());
    }

    #[test]
    fn question_mark_is_typed_in_name_entry() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        press(&mut app, KeyCode::Enter, now);
        type_str(&mut app, "a?", now);
        assert_eq!(app.name_input, "a?");
        assert!(!app.show_help);
    }

    #[test]
    fn locked_level_shows_banner() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Right, now);
        assert_eq!(app.level_cursor, 2);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.state().route(), Route::LevelSelect);
        assert_eq!(app.banner.as_ref().map(|b| b.tone), Some(Tone::Error));
    }

    #[test]
    fn cursor_stays_in_grid() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Up, now);
        press(&mut app, KeyCode::Left, now);
        assert_eq!(app.level_cursor, 1);
        press(&mut app, KeyCode::Down, now);
        assert_eq!(app.level_cursor, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down, now);
        }
        assert_eq!(app.level_cursor, 16);
    }

    #[test]
    fn correct_answer_plays_cues_and_returns_after_delay() {
        let start = Instant::now();
        let recorder = Recorder::default();
        let mut app = app_with(Box::new(recorder.clone()));
        to_level_select(&mut app, start);
        press(&mut app, KeyCode::Enter, start);
        assert_eq!(app.state().route(), Route::Playing);

        press(&mut app, KeyCode::Char('a'), start);
        assert_eq!(*recorder.0.borrow(), vec![Cue::Correct, Cue::LevelPass]);
        assert!(app.is_waiting());
        assert_eq!(app.state().highest_unlocked(), 2);

        app.tick(start + Duration::from_millis(100));
        assert_eq!(app.state().route(), Route::Playing);

        app.tick(start + Duration::from_millis(800));
        assert_eq!(app.state().route(), Route::LevelSelect);
        assert_eq!(app.level_cursor, 2);
        assert_eq!(
            app.banner,
            Some(Banner {
                text: "Congrats! You passed Level 1".to_string(),
                tone: Tone::Success
            })
        );
    }

    #[test]
    fn wrong_answers_retry_then_exhaust() {
        let start = Instant::now();
        let recorder = Recorder::default();
        let mut app = app_with(Box::new(recorder.clone()));
        to_level_select(&mut app, start);
        press(&mut app, KeyCode::Enter, start);

        press(&mut app, KeyCode::Char('b'), start);
        assert_eq!(app.state().tries_remaining(), 1);
        press(&mut app, KeyCode::Char('c'), start);
        assert_eq!(app.state().tries_remaining(), 1);

        let later = start + Duration::from_millis(500);
        app.tick(later);
        assert!(!app.state().answer_revealed());

        press(&mut app, KeyCode::Down, later);
        press(&mut app, KeyCode::Enter, later);
        assert_eq!(app.state().tries_remaining(), 0);
        app.tick(later + Duration::from_millis(500));

        assert_eq!(app.state().route(), Route::LevelSelect);
        assert_eq!(app.state().tries_remaining(), 2);
        assert_eq!(app.state().highest_unlocked(), 1);
        assert_eq!(app.banner.as_ref().map(|b| b.tone), Some(Tone::Info));
        assert_eq!(*recorder.0.borrow(), vec![Cue::Wrong, Cue::Wrong]);
    }

    #[test]
    fn broken_feedback_does_not_block_game() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Broken));
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('a'), now);
        app.tick(now + Duration::from_secs(1));
        assert_eq!(app.state().route(), Route::LevelSelect);
        assert_eq!(app.state().highest_unlocked(), 2);
    }

    #[test]
    fn finishing_starts_confetti_and_reset_clears_it() {
        let catalog = Catalog::from_json(
            r#"[{"id":"1","title":"Only","alert":"a","options":[{"key":"A","label":"x"},{"key":"B","label":"y"}],"correct_key":"B","explanation":"e"}]"#,
        )
        .unwrap();
        let recorder = Recorder::default();
        let mut app = TuiApp::new(
            Game::new(catalog, GameConfig::default()),
            Box::new(recorder.clone()),
            9,
        );
        let now = Instant::now();
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('b'), now);
        app.tick(now + Duration::from_secs(1));

        assert_eq!(app.state().route(), Route::Finished);
        assert!(app.state().completed());
        assert!(app.confetti.is_some());
        assert_eq!(recorder.0.borrow().last(), Some(&Cue::Finish));

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.state().route(), Route::Splash);
        assert!(app.confetti.is_none());
        assert!(app.name_input.is_empty());
    }

    #[test]
    fn reset_cancels_pending_timer() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('a'), now);
        assert!(app.is_waiting());

        app.dispatch(Intent::ResetSession, now);
        assert!(!app.is_waiting());
        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.state().route(), Route::Splash);
    }

    #[test]
    fn escape_leaves_level() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.state().route(), Route::LevelSelect);
    }

    #[test]
    fn help_toggle_and_quit() {
        let now = Instant::now();
        let mut app = app_with(Box::new(Recorder::default()));
        press(&mut app, KeyCode::Char('?'), now);
        assert!(app.show_help);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.state().route(), Route::Splash);
        press(&mut app, KeyCode::Esc, now);
        assert!(!app.show_help);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(app.should_quit);
    }

    fn single_level_app(options: &str, correct: char) -> TuiApp {
        let json = format!(
            r#"[{{"id":"1","title":"Only","alert":"a","options":{options},"correct_key":"{correct}","explanation":"e"}}]"#
        );
        let catalog = Catalog::from_json(&json).unwrap();
        TuiApp::new(
            Game::new(catalog, GameConfig::default()),
            Box::new(Recorder::default()),
            5,
        )
    }

    #[test]
    fn arrows_move_cursor_when_j_and_k_are_options() {
        let now = Instant::now();
        let mut app = single_level_app(
            r#"[{"key":"J","label":"x"},{"key":"K","label":"y"}]"#,
            'K',
        );
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Enter, now);

        press(&mut app, KeyCode::Down, now);
        assert_eq!(app.option_cursor, 1);
        press(&mut app, KeyCode::Down, now);
        assert_eq!(app.option_cursor, 1);
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.option_cursor, 0);

        press(&mut app, KeyCode::Char('k'), now);
        assert_eq!(app.state().selected_option(), Some('K'));
        assert!(app.state().answer_revealed());
    }

    #[test]
    fn q_answers_when_it_names_an_option() {
        let now = Instant::now();
        let mut app = single_level_app(
            r#"[{"key":"P","label":"x"},{"key":"Q","label":"y"}]"#,
            'Q',
        );
        to_level_select(&mut app, now);
        press(&mut app, KeyCode::Enter, now);

        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);
        assert!(app.state().answer_revealed());
        assert_eq!(app.state().selected_option(), Some('Q'));
    }

    #[test]
    fn share_link_uses_page_url() {
        let app = app_with(Box::new(Recorder::default()));
        let link = app.share_link().unwrap();
        assert!(link.starts_with("https://twitter.com/intent/tweet?"));
        assert!(link.contains("trap.example.org"));
    }
}

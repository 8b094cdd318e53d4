//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::TuiApp;
use crate::screens;

/// Frame interval; also the resolution of deferred transitions.
const TICK: Duration = Duration::from_millis(33);

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    tracing::info!(levels = app.game().catalog().len(), "starting game");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    tracing::info!(
        highest_unlocked = app.state().highest_unlocked(),
        completed = app.state().completed(),
        "game closed"
    );
    result
}

/// Main event loop. Polls with a timeout so timers and confetti advance without input.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|frame| screens::render(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(poll_timeout(app.next_due(), Instant::now())).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }
    }
}

/// Wait at most one tick, less if a deferred transition falls due sooner.
fn poll_timeout(next_due: Option<Instant>, now: Instant) -> Duration {
    next_due.map_or(TICK, |due| due.saturating_duration_since(now).min(TICK))
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, Instant::now()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_timeout_follows_timer() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), TICK);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(10)), now),
            Duration::from_millis(10)
        );
        assert_eq!(poll_timeout(Some(now + Duration::from_secs(1)), now), TICK);
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(5)), Duration::ZERO);
    }
}

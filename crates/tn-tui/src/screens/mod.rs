//! Screens, one per route, and the top-level frame layout.
//!
//! Screens are pure renderers: they read the session snapshot and the UI
//! state from [`TuiApp`] and never change anything.

pub mod finish;
pub mod levels;
pub mod name_entry;
pub mod play;
pub mod splash;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use tn_core::Route;

use crate::app::TuiApp;
use crate::shared;

/// Draw the whole frame: the current screen, banner, status bar, and overlays.
pub fn render(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Banner
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let route = app.state().route();
    match route {
        Route::Splash => splash::draw(frame, app, chunks[0]),
        Route::NameEntry => name_entry::draw(frame, app, chunks[0]),
        Route::LevelSelect => levels::draw(frame, app, chunks[0]),
        Route::Playing => play::draw(frame, app, chunks[0]),
        Route::Finished => finish::draw(frame, app, chunks[0]),
    }

    if let Some(banner) = &app.banner {
        frame.render_widget(
            Paragraph::new(shared::banner_line(banner)).alignment(Alignment::Center),
            chunks[1],
        );
    }

    let status = Paragraph::new(status_hint(route))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if let Some(confetti) = &app.confetti {
        frame.render_widget(confetti, chunks[0]);
    }

    if app.show_help {
        shared::draw_help_popup(frame);
    }
}

/// Context-sensitive status bar text.
pub fn status_hint(route: Route) -> &'static str {
    match route {
        Route::Splash => "Enter:new game  ?:help  q:quit",
        Route::NameEntry => "type your name  Enter:continue  Esc:clear  Ctrl+C:quit",
        Route::LevelSelect => "\u{2190}\u{2191}\u{2193}\u{2192}/hjkl:move  Enter:play  ?:help  q:quit",
        Route::Playing => "a/b/c:answer  j/k:move  Enter:answer  Esc:levels  ?:help",
        Route::Finished => "Enter:play again  ?:help  q:quit",
    }
}

//! Name entry screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::TuiApp;
use crate::shared::{self, centered_rect};

/// Draw the name prompt with the current input.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let popup = centered_rect(60, 50, area);
    let block = shared::panel("Enter Discord Name");
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Input
            Constraint::Min(0),
        ])
        .split(inner);

    let prompt = Paragraph::new("Your Discord handle:").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(prompt, chunks[0]);

    let input = Paragraph::new(app.name_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, chunks[1]);

    let typed = u16::try_from(app.name_input.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = chunks[1].x.saturating_add(1).saturating_add(typed);
    if chunks[1].width > 2 && cursor_x < chunks[1].x + chunks[1].width - 1 {
        frame.set_cursor_position(Position::new(cursor_x, chunks[1].y + 1));
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green).bold()),
        Span::raw(" to continue"),
    ]));
    frame.render_widget(hint, chunks[2]);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::app::TuiApp;
    use crate::feedback::Silent;
    use crate::screens::test_support::render_text;
    use tn_core::{Game, Intent};

    #[test]
    fn shows_typed_name() {
        let mut app = TuiApp::new(Game::default(), Box::new(Silent), 1);
        app.dispatch(Intent::StartNameEntry, Instant::now());
        app.name_input = "trapper42".to_string();
        let text = render_text(&app);
        assert!(text.contains("Enter Discord Name"));
        assert!(text.contains("trapper42"));
    }
}

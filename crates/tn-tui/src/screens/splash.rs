//! Title screen.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::shared::ACCENT;

const LOGO: &[&str] = &[
    "\u{2580}\u{2588}\u{2580} \u{2588}\u{2580}\u{2588} \u{2584}\u{2580}\u{2588} \u{2588}\u{2580}\u{2588}   \u{2588}\u{2584} \u{2588} \u{2588}\u{2580}\u{2580} \u{2580}\u{2588}\u{2580}",
    " \u{2588}  \u{2588}\u{2580}\u{2584} \u{2588}\u{2580}\u{2588} \u{2588}\u{2580}\u{2580}   \u{2588} \u{2580}\u{2588} \u{2588}\u{2588}\u{2584}  \u{2588} ",
];

/// Draw the title screen.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for row in LOGO {
        lines.push(Line::from(Span::styled(
            *row,
            Style::default().fg(ACCENT).bold(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "TRAP NET",
        Style::default().fg(Color::White).bold(),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} incidents. Pick the right response.", app.game().catalog().len()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ New Game ]",
        Style::default().fg(Color::White).bg(Color::Red).bold(),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(area.height);
    let top = area.height.saturating_sub(height) / 2;
    let inner = Rect {
        y: area.y + top,
        height: height.min(area.height),
        ..area
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use crate::app::TuiApp;
    use crate::feedback::Silent;
    use crate::screens::test_support::render_text;
    use tn_core::Game;

    #[test]
    fn shows_title_and_level_count() {
        let app = TuiApp::new(Game::default(), Box::new(Silent), 1);
        let text = render_text(&app);
        assert!(text.contains("TRAP NET"));
        assert!(text.contains("20 incidents"));
    }
}

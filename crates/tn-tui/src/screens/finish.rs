//! Finish screen: certificate, share link, and play again.

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::shared::{self, centered_rect};

/// Draw the finish screen.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let popup = centered_rect(80, 70, area);
    let block = shared::panel("Trap Net");
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line<'_>> = vec![
        Line::from(""),
        Line::from(Span::styled(
            "YOU ARE NOW A CERTIFIED TRAPPER",
            Style::default().fg(shared::ACCENT).bold(),
        )),
        Line::from(""),
        Line::from(format!(
            "Congrats {}! You\u{2019}ve completed all levels",
            app.state().player_name()
        )),
        Line::from(""),
    ];

    if let Some(link) = app.share_link() {
        lines.push(Line::from(Span::styled(
            "Share on X:",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            link,
            Style::default().fg(Color::Cyan).underlined(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[ Play Again ]",
        Style::default().fg(Color::White).bg(Color::Red).bold(),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::app::TuiApp;
    use crate::feedback::Silent;
    use crate::screens::test_support::render_text;
    use tn_core::{Catalog, Game, GameConfig, Intent, Route};

    #[test]
    fn certificate_names_player() {
        let catalog = Catalog::from_json(
            r#"[{"id":"1","title":"Only","alert":"a","options":[{"key":"A","label":"x"}],"correct_key":"A","explanation":"e"}]"#,
        )
        .unwrap();
        let mut app = TuiApp::new(Game::new(catalog, GameConfig::default()), Box::new(Silent), 1);
        let now = Instant::now();
        app.dispatch(Intent::StartNameEntry, now);
        app.dispatch(Intent::ConfirmName("alice".into()), now);
        app.dispatch(Intent::SelectLevel(1), now);
        app.dispatch(Intent::SubmitAnswer('A'), now);
        app.tick(now + Duration::from_secs(1));
        assert_eq!(app.state().route(), Route::Finished);

        // Let the confetti clear so it cannot cover the text.
        app.confetti = None;
        let text = render_text(&app);
        assert!(text.contains("YOU ARE NOW A CERTIFIED TRAPPER"));
        assert!(text.contains("Congrats alice!"));
        assert!(text.contains("Play Again"));
    }
}

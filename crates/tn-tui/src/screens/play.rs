//! Incident screen: the alert, the options, and the outcome once revealed.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::TuiApp;
use crate::shared;

/// Draw the current scenario.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.state();
    let Some(scenario) = app.game().current_scenario() else {
        let msg = Paragraph::new(Span::styled(
            format!("No scenario for level {}", state.current_level()),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(msg, area);
        return;
    };

    let block = shared::panel(&format!("Level {}: {}", scenario.id, scenario.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let revealed = state.answer_revealed();
    let selected = state.selected_option();
    let picked_correct = selected == Some(scenario.correct_key);
    // The right answer is only shown once the attempt is over.
    let final_reveal = revealed && (picked_correct || state.tries_remaining() == 0);

    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            scenario.alert.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    for (i, option) in scenario.options.iter().enumerate() {
        let is_answer = final_reveal && option.key == scenario.correct_key;
        let is_wrong = revealed && selected == Some(option.key) && !picked_correct;
        let style = if is_answer {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else if is_wrong {
            Style::default().fg(Color::White).bg(Color::Red)
        } else if !revealed && i == app.option_cursor {
            Style::default().fg(shared::ACCENT).bold()
        } else {
            Style::default()
        };
        let marker = if !revealed && i == app.option_cursor {
            "> "
        } else {
            "  "
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}) {}", option.key, option.label),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Tries left: {}", state.tries_remaining()),
        Style::default().fg(Color::DarkGray),
    )));

    if final_reveal {
        let answer = match scenario.correct_option() {
            Some(option) => format!("{}) {}", option.key, option.label),
            None => scenario.correct_key.to_string(),
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Answer: {answer} - {}", scenario.explanation),
            Style::default().fg(Color::Gray),
        )));
    } else if revealed {
        lines.push(Line::from(Span::styled(
            "Wrong response. Try again...",
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::app::TuiApp;
    use crate::feedback::Silent;
    use crate::screens::test_support::render_text;
    use tn_core::{Game, Intent};

    fn playing_level_one() -> TuiApp {
        let mut app = TuiApp::new(Game::default(), Box::new(Silent), 1);
        let now = Instant::now();
        app.dispatch(Intent::StartNameEntry, now);
        app.dispatch(Intent::ConfirmName("alice".into()), now);
        app.dispatch(Intent::SelectLevel(1), now);
        app
    }

    #[test]
    fn shows_alert_and_options() {
        let app = playing_level_one();
        let text = render_text(&app);
        assert!(text.contains("Level 1: Liquidity Drain Attempt"));
        assert!(text.contains("A) Pause Function"));
        assert!(text.contains("C) Mint More Tokens"));
        assert!(text.contains("Tries left: 2"));
        assert!(!text.contains("Answer:"));
    }

    #[test]
    fn wrong_answer_hides_solution_while_tries_remain() {
        let mut app = playing_level_one();
        app.dispatch(Intent::SubmitAnswer('B'), Instant::now());
        let text = render_text(&app);
        assert!(text.contains("Tries left: 1"));
        assert!(text.contains("Try again"));
        assert!(!text.contains("Answer:"));
    }

    #[test]
    fn correct_answer_shows_explanation() {
        let mut app = playing_level_one();
        app.dispatch(Intent::SubmitAnswer('A'), Instant::now());
        let text = render_text(&app);
        assert!(text.contains("Answer: A) Pause Function"));
    }
}

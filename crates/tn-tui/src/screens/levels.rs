//! Level grid.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{GRID_COLUMNS, TuiApp};
use crate::shared::{self, ACCENT};

const CELL_WIDTH: usize = 10;

/// Draw the level grid: passed, open, and locked levels, plus the cursor.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.state();
    let title = format!("Select Level, {}", state.player_name());
    let block = shared::panel(&title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let last = app.game().catalog().last_level();
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    let mut level = 1;
    while level <= last {
        let mut spans = Vec::new();
        for _ in 0..GRID_COLUMNS {
            if level > last {
                break;
            }
            let label = format!("{:^width$}", format!("Level {level}"), width = CELL_WIDTH);
            let style = if !state.is_unlocked(level) {
                Style::default().fg(Color::DarkGray)
            } else if level < state.highest_unlocked() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(ACCENT).bold()
            };
            let style = if level == app.level_cursor {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
            level += 1;
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let passed = state.highest_unlocked().saturating_sub(1).min(last);
    lines.push(Line::from(Span::styled(
        format!("Passed {passed} of {last}"),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

//! Shared utilities for screens: layout helpers, banner styling, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{Banner, Tone};

/// Accent color of the game.
pub const ACCENT: Color = Color::Rgb(249, 115, 22);

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Bordered panel with a title in the accent color.
pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
}

/// Render a banner line.
pub fn banner_line(banner: &Banner) -> Line<'_> {
    let style = match banner.tone {
        Tone::Info => Style::default().fg(Color::Cyan),
        Tone::Success => Style::default().fg(Color::Green).bold(),
        Tone::Error => Style::default().fg(Color::Red),
    };
    Line::from(Span::styled(banner.text.as_str(), style))
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Title / Finish:"),
        Line::from("  Enter       New game / play again"),
        Line::from(""),
        Line::from("Level grid:"),
        Line::from("  h j k l     Move (arrow keys work too)"),
        Line::from("  Enter       Open level"),
        Line::from(""),
        Line::from("Incident:"),
        Line::from("  a / b / c   Answer directly"),
        Line::from("  j / k       Move between options"),
        Line::from("  Enter       Answer highlighted option"),
        Line::from("  Esc         Back to level grid"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

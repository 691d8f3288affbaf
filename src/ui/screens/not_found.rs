//! Not-found screen for unrecognized goto paths.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub fn render_not_found(frame: &mut Frame<'_>, area: Rect, path: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  404",
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  No screen at ", Style::default().fg(HEADER_TEXT)),
            Span::styled(path.to_string(), Style::default().fg(BRAND_TEAL)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  1: Dashboard   2: Bookings",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Not found", Style::default().fg(BRAND_TEAL)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

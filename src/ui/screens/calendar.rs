//! Calendar screen: departures by month, from the booking history.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn render_calendar(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog) {
    let mut lines = vec![Line::from("")];
    for (index, month) in MONTHS.iter().enumerate() {
        let departures: Vec<&str> = catalog
            .history
            .iter()
            .filter(|b| b.month as usize == index + 1)
            .map(|b| b.destination.as_str())
            .collect();
        if departures.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {month:<10}"), Style::default().fg(MUTED_TEXT)),
            Span::styled(departures.join(", "), Style::default().fg(HEADER_TEXT)),
        ]));
    }
    if lines.len() == 1 {
        lines.push(Line::from(Span::styled(
            "  No departures scheduled.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Calendar", Style::default().fg(BRAND_TEAL)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

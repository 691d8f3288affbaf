//! Reports screen: the settled-booking ledger.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::ui::theme::{AMOUNT_TEXT, BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render_reports(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog, currency: &str) {
    let header = Row::new(vec!["Reference", "Destination", "Client", "Amount"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = catalog
        .history
        .iter()
        .map(|booking| {
            Row::new(vec![
                Cell::from(booking.reference.clone()).style(Style::default().fg(HEADER_TEXT)),
                Cell::from(booking.destination.clone()).style(Style::default().fg(HEADER_TEXT)),
                Cell::from(booking.client.clone()).style(Style::default().fg(HEADER_TEXT)),
                Cell::from(format!("{currency}{}", booking.amount))
                    .style(Style::default().fg(AMOUNT_TEXT)),
            ])
        })
        .collect();

    let total: i64 = catalog.history.iter().map(|b| b.amount).sum();
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Length(26),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(
                format!("Reports · total {currency}{total}"),
                Style::default().fg(BRAND_TEAL),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );

    frame.render_widget(table, area);
}

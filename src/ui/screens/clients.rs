//! Clients screen: read-only list of agency clients.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render_clients(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog, currency: &str) {
    let header = Row::new(vec!["Name", "Company", "Email", "Phone", "Wallet"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = catalog
        .clients
        .iter()
        .map(|client| {
            Row::new(vec![
                Cell::from(client.name.clone()),
                Cell::from(client.company.clone()),
                Cell::from(client.email.clone()),
                Cell::from(client.phone.clone()),
                Cell::from(format!("{currency}{}", client.wallet_balance)),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(24),
            Constraint::Length(30),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled("Clients", Style::default().fg(BRAND_TEAL)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );

    frame.render_widget(table, area);
}

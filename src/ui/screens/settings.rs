//! Settings screen: read-only view of the effective configuration.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::Config;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render_settings(frame: &mut Frame<'_>, area: Rect, config: &Config, config_path: &str) {
    let fares = &config.fares;
    let promo_list = fares
        .promos
        .iter()
        .map(|promo| format!("{} (-{})", promo.code, promo.amount))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::from(""),
        row("Config file", config_path),
        Line::from(""),
        row("Tax rate", &format!("{:.0}%", fares.tax_rate * 100.0)),
        row(
            "Service fee",
            &format!("{:.0}%", fares.service_fee_rate * 100.0),
        ),
        row("Wallet rate", &format!("{:.0}%", fares.wallet_rate * 100.0)),
        row(
            "Promo codes",
            if promo_list.is_empty() {
                "none"
            } else {
                &promo_list
            },
        ),
        Line::from(""),
        row(
            "Assistant delay",
            &format!("{} ticks", config.assistant.delay_ticks),
        ),
        row("Tick interval", &format!("{} ms", config.ui.tick_ms)),
        row("Currency", &config.ui.currency),
        Line::from(""),
        Line::from(Span::styled(
            "  Edit the config file and press Ctrl+R to reload.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Settings", Style::default().fg(BRAND_TEAL)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<16}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ])
}

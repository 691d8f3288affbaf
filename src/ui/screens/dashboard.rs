//! Dashboard screen: mock analytics over the booking history fixtures.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::{Catalog, PastBooking};
use crate::ui::theme::{AMOUNT_TEXT, BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Figures derived from the settled-booking history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub bookings: usize,
    pub revenue: i64,
    pub average_value: i64,
    pub top_destination: Option<String>,
    /// (month 1..=12, revenue), in month order, only months with sales.
    pub monthly: Vec<(u32, i64)>,
}

impl DashboardStats {
    pub fn from_history(history: &[PastBooking]) -> Self {
        let bookings = history.len();
        let revenue: i64 = history.iter().map(|b| b.amount).sum();
        let average_value = if bookings > 0 {
            revenue / bookings as i64
        } else {
            0
        };

        let mut per_destination: Vec<(String, i64)> = Vec::new();
        for booking in history {
            match per_destination
                .iter_mut()
                .find(|(name, _)| *name == booking.destination)
            {
                Some((_, total)) => *total += booking.amount,
                None => per_destination.push((booking.destination.clone(), booking.amount)),
            }
        }
        let top_destination = per_destination
            .iter()
            .max_by_key(|(_, total)| *total)
            .map(|(name, _)| name.clone());

        let mut monthly: Vec<(u32, i64)> = Vec::new();
        for booking in history {
            match monthly.iter_mut().find(|(month, _)| *month == booking.month) {
                Some((_, total)) => *total += booking.amount,
                None => monthly.push((booking.month, booking.amount)),
            }
        }
        monthly.sort_by_key(|(month, _)| *month);

        Self {
            bookings,
            revenue,
            average_value,
            top_destination,
            monthly,
        }
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn render_dashboard(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog, currency: &str) {
    let stats = DashboardStats::from_history(&catalog.history);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let summary = vec![
        Line::from(""),
        stat_row("Agency", &catalog.agency.name),
        stat_row("Bookings", &stats.bookings.to_string()),
        stat_row("Revenue", &format!("{currency}{}", stats.revenue)),
        stat_row("Avg value", &format!("{currency}{}", stats.average_value)),
        stat_row(
            "Top destination",
            stats.top_destination.as_deref().unwrap_or("-"),
        ),
        stat_row(
            "Wallet balance",
            &format!("{currency}{}", catalog.agency.wallet_balance),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Press 2 or use /bookings to start a booking.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(summary).block(panel("Overview")),
        columns[0],
    );

    let peak = stats
        .monthly
        .iter()
        .map(|(_, total)| *total)
        .max()
        .unwrap_or(1)
        .max(1);
    let mut chart = vec![Line::from("")];
    for (month, total) in &stats.monthly {
        let width = ((total * 24) / peak).max(1) as usize;
        let name = MONTHS
            .get((*month as usize).saturating_sub(1))
            .unwrap_or(&"?");
        chart.push(Line::from(vec![
            Span::styled(format!("  {name:<4}"), Style::default().fg(MUTED_TEXT)),
            Span::styled("▇".repeat(width), Style::default().fg(BRAND_TEAL)),
            Span::styled(
                format!(" {currency}{total}"),
                Style::default().fg(AMOUNT_TEXT),
            ),
        ]));
    }
    chart.push(Line::from(""));
    chart.push(Line::from(Span::styled(
        "  Monthly revenue (fixture data)",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));
    frame.render_widget(
        Paragraph::new(chart).block(panel("Sales")),
        columns[1],
    );
}

fn stat_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<16}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ])
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(BRAND_TEAL),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(destination: &str, month: u32, amount: i64) -> PastBooking {
        PastBooking {
            reference: "TD-0000".to_string(),
            destination: destination.to_string(),
            client: "Test".to_string(),
            month,
            amount,
        }
    }

    #[test]
    fn stats_aggregate_revenue_and_top_destination() {
        let history = vec![
            booking("Fes", 3, 100),
            booking("Santorini", 3, 300),
            booking("Santorini", 4, 200),
        ];
        let stats = DashboardStats::from_history(&history);
        assert_eq!(stats.bookings, 3);
        assert_eq!(stats.revenue, 600);
        assert_eq!(stats.average_value, 200);
        assert_eq!(stats.top_destination.as_deref(), Some("Santorini"));
        assert_eq!(stats.monthly, vec![(3, 400), (4, 200)]);
    }

    #[test]
    fn stats_handle_empty_history() {
        let stats = DashboardStats::from_history(&[]);
        assert_eq!(stats.bookings, 0);
        assert_eq!(stats.average_value, 0);
        assert!(stats.top_destination.is_none());
    }
}

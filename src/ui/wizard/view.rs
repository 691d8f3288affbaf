//! Rendering for the booking wizard.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::booking::{quote, FareBreakdown, FareRequest};
use crate::config::FareSettings;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, AMOUNT_TEXT, BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK,
};
use crate::ui::wizard::form::{
    DetailForm, DetailPane, PaymentForm, SearchField, SearchForm, StepForm, TravelerForm,
};
use crate::ui::wizard::state::{WizardState, WizardStep};

/// Everything the wizard view needs beyond the frame.
pub struct WizardView<'a> {
    pub wizard: &'a WizardState,
    pub form: &'a StepForm,
    pub fares: &'a FareSettings,
    pub currency: &'a str,
    pub voucher_ref: Option<&'a str>,
}

pub fn render_wizard(frame: &mut Frame<'_>, area: Rect, view: &WizardView<'_>) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    frame.render_widget(step_indicator(view.wizard.step), regions[0]);

    match view.form {
        StepForm::Search(form) => render_search(frame, regions[1], form),
        StepForm::Detail(form) => render_detail(frame, regions[1], view, form),
        StepForm::Travelers(form) => render_travelers(frame, regions[1], form),
        StepForm::Payment(form) => render_payment(frame, regions[1], view, form),
        StepForm::Voucher => render_voucher(frame, regions[1], view),
    }
}

fn step_indicator(current: WizardStep) -> Paragraph<'static> {
    let steps = [
        WizardStep::Search,
        WizardStep::Detail,
        WizardStep::Travelers,
        WizardStep::Payment,
        WizardStep::Voucher,
    ];
    let mut spans = Vec::new();
    for (idx, step) in steps.iter().enumerate() {
        let style = if *step == current {
            Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(
            format!("{} {}", step.position(), step.title()),
            style,
        ));
        if idx + 1 < steps.len() {
            spans.push(Span::styled("  ›  ", Style::default().fg(MUTED_TEXT)));
        }
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "» " } else { "  " };
    let value_style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let shown = if value.is_empty() && focused {
        "▏".to_string()
    } else {
        value.to_string()
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(BRAND_TEAL)),
        Span::styled(format!("{label:<14}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(shown, value_style),
    ])
}

fn render_search(frame: &mut Frame<'_>, area: Rect, form: &SearchForm) {
    let lines = vec![
        Line::from(""),
        field_line(
            "Destination",
            &form.destination,
            form.focus == SearchField::Destination,
        ),
        field_line(
            "Date",
            &form.date_input,
            form.focus == SearchField::Date,
        ),
        field_line(
            "Category",
            &format!("‹ {} ›", form.category()),
            form.focus == SearchField::Category,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Tab: next field   ←/→: category   Enter: search",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            "Date format: YYYY-MM-DD",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Find a tour")),
        area,
    );
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, view: &WizardView<'_>, form: &DetailForm) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut left = Vec::new();
    for (idx, tour) in form.tours.iter().enumerate() {
        let selected = idx == form.tour_index;
        let focused = selected && form.pane == DetailPane::Tours;
        let mut line = Line::from(vec![
            Span::styled(
                if selected { "● " } else { "○ " },
                Style::default().fg(BRAND_TEAL),
            ),
            Span::styled(tour.name.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  {} · from {}{}", tour.location, view.currency, tour.price),
                Style::default().fg(MUTED_TEXT),
            ),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        left.push(line);
        left.push(Line::from(Span::styled(
            format!("    {}", tour.restriction.label()),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    frame.render_widget(
        Paragraph::new(left).block(titled_block("Results")),
        columns[0],
    );

    let mut right = Vec::new();
    right.push(section_header("Supplier", form.pane == DetailPane::Suppliers));
    for (idx, supplier) in form.suppliers.iter().enumerate() {
        let selected = form.supplier_index == Some(idx);
        right.push(choice_line(
            &format!(
                "{}  {}{}/{}{} pp",
                supplier.name,
                view.currency,
                supplier.adult_price,
                view.currency,
                supplier.child_price
            ),
            selected,
            form.pane == DetailPane::Suppliers && selected,
        ));
    }
    right.push(Line::from(""));
    right.push(section_header("Time slot", form.pane == DetailPane::Slots));
    for (idx, slot) in form.slots.iter().enumerate() {
        let selected = form.slot_index == Some(idx);
        let tag = if slot.is_premium() { " (premium)" } else { "" };
        right.push(choice_line(
            &format!("{}{}", slot.label, tag),
            selected,
            form.pane == DetailPane::Slots && selected,
        ));
    }
    right.push(Line::from(""));
    right.push(section_header("Travelers", form.pane == DetailPane::Tickets));
    right.push(Line::from(Span::styled(
        format!(
            "  adults {}  children {}   (+/- adults, </> children)",
            form.tickets.adult, form.tickets.child
        ),
        Style::default().fg(HEADER_TEXT),
    )));
    right.push(Line::from(""));

    let request = FareRequest {
        tickets: form.tickets,
        supplier: form.selected_supplier(),
        premium: form
            .selected_slot()
            .map(|slot| slot.is_premium())
            .unwrap_or(false),
        promo_code: None,
        wallet_balance: None,
    };
    let breakdown = quote(view.fares, &request);
    right.extend(fare_lines(&breakdown, view.currency));

    frame.render_widget(
        Paragraph::new(right).block(titled_block("Selection")),
        columns[1],
    );
}

fn render_travelers(frame: &mut Frame<'_>, area: Rect, form: &TravelerForm) {
    let mut lines = vec![Line::from("")];
    for index in 0..form.field_count() {
        if let Some((label, value)) = form.field_entry(index) {
            lines.push(field_line(&label, value, index == form.field));
        }
    }
    if form.field_count() == 0 {
        lines.push(Line::from(Span::styled(
            "No travelers to collect. Go back and set ticket counts.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab/Shift+Tab: move   Enter: continue once all fields are filled",
        Style::default().fg(MUTED_TEXT),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Traveler information")),
        area,
    );
}

fn render_payment(frame: &mut Frame<'_>, area: Rect, view: &WizardView<'_>, form: &PaymentForm) {
    let record = &view.wizard.record;
    let request = FareRequest {
        tickets: record.ticket_counts(),
        supplier: record.supplier.as_ref(),
        premium: record.is_premium(),
        promo_code: form.applied_promo.as_deref(),
        wallet_balance: form.use_wallet.then_some(form.wallet_balance),
    };
    let breakdown = quote(view.fares, &request);

    let wallet_marker = if form.use_wallet { "[x]" } else { "[ ]" };
    let mut lines = vec![
        Line::from(""),
        field_line("Promo code", &form.promo_input, true),
    ];
    if let Some(applied) = &form.applied_promo {
        let note = if breakdown.discount > 0 {
            format!("applied: {applied}")
        } else {
            format!("not recognized: {applied}")
        };
        lines.push(Line::from(Span::styled(
            format!("                {note}"),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {wallet_marker} "),
            Style::default().fg(BRAND_TEAL),
        ),
        Span::styled(
            format!(
                "Redeem wallet (balance {}{})",
                view.currency, form.wallet_balance
            ),
            Style::default().fg(HEADER_TEXT),
        ),
    ]));
    lines.push(Line::from(""));
    lines.extend(fare_lines(&breakdown, view.currency));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Type a code, Enter: apply   Ctrl+W: toggle wallet   F10: confirm & pay",
        Style::default().fg(MUTED_TEXT),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Payment")),
        area,
    );
}

fn render_voucher(frame: &mut Frame<'_>, area: Rect, view: &WizardView<'_>) {
    let record = &view.wizard.record;
    let counts = record.ticket_counts();
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Voucher ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                view.voucher_ref.unwrap_or("pending").to_string(),
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        detail_row("Destination", record.destination.as_deref().unwrap_or("-")),
        detail_row(
            "Date",
            &record
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        detail_row(
            "Tour",
            record
                .tour
                .as_ref()
                .map(|t| t.name.as_str())
                .unwrap_or("-"),
        ),
        detail_row(
            "Supplier",
            record
                .supplier
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or("-"),
        ),
        detail_row(
            "Time slot",
            record
                .time_slot
                .as_ref()
                .map(|s| s.label.as_str())
                .unwrap_or("-"),
        ),
        detail_row(
            "Travelers",
            &format!("{} adult(s), {} child(ren)", counts.adult, counts.child),
        ),
    ];
    for adult in &record.adults {
        lines.push(detail_row("  adult", &format!("{} · {}", adult.name, adult.email)));
    }
    for child in &record.children {
        lines.push(detail_row("  child", &format!("{} · {}", child.name, child.dob)));
    }
    if let Some(supplier) = &record.supplier {
        lines.push(detail_row("Cancellation", &supplier.cancellation_policy));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Total paid  ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("{}{}", view.currency, record.total_price.unwrap_or(0)),
            Style::default().fg(AMOUNT_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "N: start a new booking   Backspace: back to payment",
        Style::default().fg(MUTED_TEXT),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Booking confirmed")),
        area,
    );
}

fn fare_lines(breakdown: &FareBreakdown, currency: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        amount_row("Subtotal", breakdown.subtotal, currency),
        amount_row("Taxes", breakdown.taxes, currency),
        amount_row("Service fee", breakdown.service_fee, currency),
    ];
    if breakdown.discount > 0 {
        lines.push(amount_row("Promo discount", -breakdown.discount, currency));
    }
    if breakdown.wallet_redemption > 0 {
        lines.push(amount_row("Wallet", -breakdown.wallet_redemption, currency));
    }
    lines.push(Line::from(vec![
        Span::styled("  Total        ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("{}{}", currency, breakdown.total),
            Style::default().fg(AMOUNT_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn amount_row(label: &str, amount: i64, currency: &str) -> Line<'static> {
    let rendered = if amount < 0 {
        format!("-{}{}", currency, -amount)
    } else {
        format!("{}{}", currency, amount)
    };
    Line::from(vec![
        Span::styled(format!("  {label:<13}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(rendered, Style::default().fg(HEADER_TEXT)),
    ])
}

fn detail_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<13}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ])
}

fn section_header(title: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Line::from(Span::styled(title.to_string(), style))
}

fn choice_line(text: &str, selected: bool, focused: bool) -> Line<'static> {
    let marker = if selected { "● " } else { "○ " };
    let mut line = Line::from(vec![
        Span::styled(format!("  {marker}"), Style::default().fg(BRAND_TEAL)),
        Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn titled_block(title: &str) -> Block<'static> {
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
    use crate::catalog::demo_catalog;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(step: WizardStep) -> String {
        let catalog = demo_catalog();
        let mut wizard = WizardState::default();
        wizard.step = step;
        let form = StepForm::for_state(&wizard, &catalog);
        let fares = FareSettings::default();
        let view = WizardView {
            wizard: &wizard,
            form: &form,
            fares: &fares,
            currency: "$",
            voucher_ref: Some("TD-ABCD1234"),
        };

        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_wizard(frame, frame.area(), &view))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn payment_step_shows_the_agency_wallet_balance() {
        // The balance comes from the form, seeded from the catalog.
        assert!(rendered(WizardStep::Payment).contains("750"));
    }

    #[test]
    fn voucher_step_shows_the_reference() {
        assert!(rendered(WizardStep::Voucher).contains("TD-ABCD1234"));
    }
}

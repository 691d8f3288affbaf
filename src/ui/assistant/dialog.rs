//! Assistant popup rendering.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::assistant::state::{AssistantState, Author};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{BRAND_TEAL, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn render_assistant(frame: &mut Frame<'_>, body: Rect, state: &AssistantState) {
    let width = body.width.saturating_sub(8).clamp(30, 72);
    let height = body.height.saturating_sub(4).clamp(8, 20);
    let area = centered_rect_by_size(body, width, height);

    let mut lines = Vec::new();
    for message in &state.log {
        let (prefix, style) = match message.author {
            Author::Agent => ("you  ", Style::default().fg(HEADER_TEXT)),
            Author::Assistant => ("desk ", Style::default().fg(BRAND_TEAL)),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
            Span::styled(message.text.clone(), Style::default().fg(HEADER_TEXT)),
        ]));
    }
    if state.is_waiting() {
        lines.push(Line::from(Span::styled(
            "desk is typing…",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(BRAND_TEAL)),
        Span::styled(state.input.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(MUTED_TEXT)),
    ]));

    // Keep the tail in view when the log outgrows the popup.
    let visible = area.height.saturating_sub(2) as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Assistant", Style::default().fg(BRAND_TEAL)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(popup),
        area,
    );
}

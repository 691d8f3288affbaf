//! Top-level frame composition: header, active screen, footer, popups.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::route::Route;
use crate::ui::app::{App, PopupKind, Screen};
use crate::ui::assistant::render_assistant;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::screens::{
    render_calendar, render_clients, render_dashboard, render_not_found, render_reports,
    render_settings,
};
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER};
use crate::ui::wizard::form::StepForm;
use crate::ui::wizard::{render_wizard, WizardView};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header_area, body_area, footer_area) = layout_regions(frame.area());
    let config = app.config().get();

    let header = Header::new().widget(
        &app.catalog().agency.name,
        app.screen().title(),
        app.screen().path(),
    );
    frame.render_widget(header, header_area);

    match app.screen() {
        Screen::Known(Route::Dashboard) => {
            render_dashboard(frame, body_area, app.catalog(), &config.ui.currency);
        }
        Screen::Known(Route::Bookings) => {
            let view = WizardView {
                wizard: app.wizard(),
                form: app.form(),
                fares: &config.fares,
                currency: &config.ui.currency,
                voucher_ref: app.voucher_ref(),
            };
            render_wizard(frame, body_area, &view);
        }
        Screen::Known(Route::Calendar) => render_calendar(frame, body_area, app.catalog()),
        Screen::Known(Route::Clients) => {
            render_clients(frame, body_area, app.catalog(), &config.ui.currency);
        }
        Screen::Known(Route::Reports) => {
            render_reports(frame, body_area, app.catalog(), &config.ui.currency);
        }
        Screen::Known(Route::Settings) => {
            let path = app.config().path().display().to_string();
            render_settings(frame, body_area, &config, &path);
        }
        Screen::NotFound(path) => render_not_found(frame, body_area, path),
    }

    let footer = Footer::new().widget(footer_area, &footer_hints(app));
    frame.render_widget(footer, footer_area);

    match app.popup_kind() {
        Some(PopupKind::Assistant) => render_assistant(frame, body_area, app.assistant()),
        Some(PopupKind::Goto) => render_goto(frame, body_area, app.goto_input()),
        None => {}
    }
}

fn render_goto(frame: &mut Frame<'_>, body: Rect, input: &str) {
    let width = body.width.saturating_sub(8).clamp(24, 48);
    let area = centered_rect_by_size(body, width, 3);
    frame.render_widget(Clear, area);

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(POPUP_BORDER)),
        Span::styled(input.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("█", Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .title("Go to")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}

fn footer_hints(app: &App) -> String {
    if let Some(error) = app.last_error() {
        return format!(" ✗ {error}");
    }
    match app.popup_kind() {
        Some(PopupKind::Assistant) => {
            return " Enter send  Ctrl+L clear  Esc close".to_string();
        }
        Some(PopupKind::Goto) => {
            return " Enter go  Esc close".to_string();
        }
        None => {}
    }
    let screen_hints = match app.screen() {
        Screen::Known(Route::Bookings) => wizard_hints(app.form()),
        Screen::Known(Route::Settings) => "Ctrl+R reload config  1-6 screens",
        Screen::NotFound(_) => "1 dashboard  2 bookings",
        Screen::Known(_) => "1-6 screens",
    };
    format!(" {screen_hints}  │  Ctrl+G goto  Ctrl+A assistant  Ctrl+Q quit")
}

fn wizard_hints(form: &StepForm) -> &'static str {
    match form {
        StepForm::Search(_) => "Tab field  ←/→ category  Enter continue",
        StepForm::Detail(_) => "Tab pane  ↑/↓ select  +/- adults  </> children  Enter continue  Esc back",
        StepForm::Travelers(_) => "Tab/↓ next  ↑ previous  Enter continue  Esc back",
        StepForm::Payment(_) => "Enter apply/confirm  F10 confirm  Ctrl+W wallet  Esc back",
        StepForm::Voucher => "N new booking  Esc back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::config::{Config, ConfigStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config, demo_catalog())
    }

    #[test]
    fn draws_every_screen_without_panicking() {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = make_app();
        let paths = ["/", "/bookings", "/calendar", "/clients", "/reports", "/settings", "/nope"];
        for path in paths {
            app.navigate(path);
            terminal.draw(|frame| draw(frame, &app)).unwrap();
        }
    }

    #[test]
    fn draws_popups_over_the_dashboard() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = make_app();
        app.toggle_popup(PopupKind::Goto);
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        app.toggle_popup(PopupKind::Assistant);
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}

use uuid::Uuid;

use crate::booking::{quote, FareRequest};
use crate::catalog::Catalog;
use crate::config::ConfigStore;
use crate::route::Route;
use crate::ui::assistant::{canned_reply, AssistantIntent, AssistantReducer, AssistantState, APOLOGY};
use crate::ui::mvi::Reducer;
use crate::ui::wizard::form::StepForm;
use crate::ui::wizard::{WizardIntent, WizardReducer, WizardState, WizardStep};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Assistant,
    Goto,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Screen,
    Popup(PopupKind),
}

/// What the body region currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Known(Route),
    NotFound(String),
}

impl Screen {
    pub fn title(&self) -> &str {
        match self {
            Screen::Known(route) => route.title(),
            Screen::NotFound(_) => "Not found",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Screen::Known(route) => route.path(),
            Screen::NotFound(path) => path.as_str(),
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    screen: Screen,
    config: ConfigStore,
    catalog: Catalog,
    /// Wizard controller state (MVI pattern).
    wizard: WizardState,
    /// The active step's local editing state, rebuilt on step changes.
    form: StepForm,
    /// Voucher reference, assigned when payment is confirmed.
    voucher_ref: Option<String>,
    /// Assistant conversation state (MVI pattern).
    assistant: AssistantState,
    goto_input: String,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: ConfigStore, catalog: Catalog) -> Self {
        let wizard = WizardState::default();
        let form = StepForm::for_state(&wizard, &catalog);
        Self {
            should_quit: false,
            focus: Focus::Screen,
            screen: Screen::Known(Route::Dashboard),
            config,
            catalog,
            wizard,
            form,
            voucher_ref: None,
            assistant: AssistantState::default(),
            goto_input: String::new(),
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ========================================================================
    // Focus and popups
    // ========================================================================

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::Screen => None,
        }
    }

    pub fn toggle_popup(&mut self, kind: PopupKind) {
        self.focus = match self.focus {
            Focus::Popup(active) if active == kind => Focus::Screen,
            _ => {
                if kind == PopupKind::Goto {
                    self.goto_input.clear();
                }
                Focus::Popup(kind)
            }
        };
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::Screen;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to a path; unknown paths land on the not-found screen.
    pub fn navigate(&mut self, path: &str) {
        self.screen = match Route::parse(path) {
            Some(route) => {
                tracing::info!(target: "nav", path = route.path(), "screen change");
                Screen::Known(route)
            }
            None => {
                tracing::warn!(target: "nav", path, "unknown path");
                Screen::NotFound(path.trim().to_string())
            }
        };
    }

    pub fn goto_route(&mut self, route: Route) {
        self.screen = Screen::Known(route);
    }

    pub fn goto_input(&self) -> &str {
        &self.goto_input
    }

    pub fn goto_input_char(&mut self, c: char) {
        self.goto_input.push(c);
    }

    pub fn goto_backspace(&mut self) {
        self.goto_input.pop();
    }

    pub fn goto_submit(&mut self) {
        let path = std::mem::take(&mut self.goto_input);
        self.close_popup();
        if !path.trim().is_empty() {
            self.navigate(&path);
        }
    }

    // ========================================================================
    // Event-loop hooks
    // ========================================================================

    pub fn on_tick(&mut self) {
        if self.assistant.is_waiting() {
            self.dispatch_assistant(AssistantIntent::Tick);
        }
    }

    /// Called when config file has been reloaded from disk.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                self.last_error = None;
                tracing::info!(target: "config", "config reloaded");
            }
            Err(err) => {
                tracing::error!(target: "config", error = %err, "config reload failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    // ========================================================================
    // Wizard (MVI pattern)
    // ========================================================================

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn form(&self) -> &StepForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StepForm {
        &mut self.form
    }

    pub fn voucher_ref(&self) -> Option<&str> {
        self.voucher_ref.as_deref()
    }

    fn dispatch_wizard(&mut self, intent: WizardIntent) {
        dispatch_mvi!(self, wizard, WizardReducer, intent);
        self.form = StepForm::for_state(&self.wizard, &self.catalog);
    }

    /// Advance if the active step's required fields are filled.
    ///
    /// The controller itself never validates; the gate lives on the form.
    pub fn wizard_continue(&mut self) {
        if !self.form.complete() {
            return;
        }
        let mut update = self.form.build_update();

        // Confirming payment locks in the derived total and assigns the
        // voucher reference.
        if self.wizard.step == WizardStep::Payment {
            if let StepForm::Payment(form) = &self.form {
                let record = &self.wizard.record;
                let request = FareRequest {
                    tickets: record.ticket_counts(),
                    supplier: record.supplier.as_ref(),
                    premium: record.is_premium(),
                    promo_code: form.applied_promo.as_deref(),
                    wallet_balance: form.use_wallet.then_some(form.wallet_balance),
                };
                let fares = self.config.get().fares;
                update.total_price = Some(quote(&fares, &request).total);
            }
            self.voucher_ref = Some(format!(
                "TD-{}",
                Uuid::new_v4().simple().to_string()[..8].to_uppercase()
            ));
            tracing::info!(target: "wizard", "booking confirmed");
        }

        self.dispatch_wizard(WizardIntent::Advance(update));
    }

    pub fn wizard_back(&mut self) {
        self.dispatch_wizard(WizardIntent::Retreat);
    }

    pub fn wizard_reset(&mut self) {
        self.voucher_ref = None;
        self.dispatch_wizard(WizardIntent::Reset);
    }

    // ========================================================================
    // Assistant (MVI pattern)
    // ========================================================================

    pub fn assistant(&self) -> &AssistantState {
        &self.assistant
    }

    pub fn dispatch_assistant(&mut self, intent: AssistantIntent) {
        dispatch_mvi!(self, assistant, AssistantReducer, intent);
    }

    /// Submit the typed question with its canned reply resolved up front.
    pub fn assistant_submit(&mut self) {
        let reply = canned_reply(self.assistant.input.trim())
            .unwrap_or_else(|_| APOLOGY.to_string());
        let delay_ticks = self.config.get().assistant.delay_ticks;
        self.dispatch_assistant(AssistantIntent::Submit { reply, delay_ticks });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::config::{Config, ConfigStore};
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config, demo_catalog())
    }

    #[test]
    fn starts_on_dashboard() {
        let app = make_app();
        assert_eq!(app.screen(), &Screen::Known(Route::Dashboard));
    }

    #[test]
    fn navigate_to_unknown_path_shows_not_found() {
        let mut app = make_app();
        app.navigate("/payroll");
        assert_eq!(app.screen(), &Screen::NotFound("/payroll".to_string()));
    }

    #[test]
    fn goto_submit_navigates_and_closes_popup() {
        let mut app = make_app();
        app.toggle_popup(PopupKind::Goto);
        for c in "/clients".chars() {
            app.goto_input_char(c);
        }
        app.goto_submit();
        assert_eq!(app.popup_kind(), None);
        assert_eq!(app.screen(), &Screen::Known(Route::Clients));
    }

    #[test]
    fn incomplete_step_blocks_continue() {
        let mut app = make_app();
        app.wizard_continue();
        assert_eq!(app.wizard().step, WizardStep::Search);
    }

    #[test]
    fn completed_search_advances_to_detail() {
        let mut app = make_app();
        if let StepForm::Search(form) = app.form_mut() {
            for c in "Lisbon".chars() {
                form.input_char(c);
            }
            form.focus_next();
            for c in "2026-09-14".chars() {
                form.input_char(c);
            }
        }
        app.wizard_continue();
        assert_eq!(app.wizard().step, WizardStep::Detail);
        assert_eq!(app.wizard().record.destination.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn retreat_from_detail_keeps_record() {
        let mut app = make_app();
        if let StepForm::Search(form) = app.form_mut() {
            for c in "Lisbon".chars() {
                form.input_char(c);
            }
            form.focus_next();
            for c in "2026-09-14".chars() {
                form.input_char(c);
            }
        }
        app.wizard_continue();
        app.wizard_back();
        assert_eq!(app.wizard().step, WizardStep::Search);
        assert_eq!(app.wizard().record.destination.as_deref(), Some("Lisbon"));
        // The search form is re-seeded from the retained record.
        if let StepForm::Search(form) = app.form() {
            assert_eq!(form.destination, "Lisbon");
        } else {
            panic!("expected search form");
        }
    }

    #[test]
    fn assistant_reply_arrives_after_delay_ticks() {
        let mut app = make_app();
        app.dispatch_assistant(AssistantIntent::Input('p'));
        app.dispatch_assistant(AssistantIntent::Input('r'));
        app.dispatch_assistant(AssistantIntent::Input('o'));
        app.dispatch_assistant(AssistantIntent::Input('m'));
        app.dispatch_assistant(AssistantIntent::Input('o'));
        app.assistant_submit();
        assert!(app.assistant().is_waiting());
        let delay = app.config().get().assistant.delay_ticks;
        for _ in 0..delay {
            app.on_tick();
        }
        assert!(!app.assistant().is_waiting());
        assert_eq!(app.assistant().log.len(), 2);
    }

    #[test]
    fn wizard_reset_clears_voucher_ref() {
        let mut app = make_app();
        app.voucher_ref = Some("TD-TEST1234".to_string());
        app.wizard_reset();
        assert!(app.voucher_ref().is_none());
        assert_eq!(app.wizard().step, WizardStep::Search);
    }
}

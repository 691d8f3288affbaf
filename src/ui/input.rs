//! Keyboard routing.
//!
//! Global chords first, then the open popup, then the active screen.
//! Inside the bookings screen keys go to the active step form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::route::Route;
use crate::ui::app::{App, PopupKind, Screen};
use crate::ui::assistant::AssistantIntent;
use crate::ui::wizard::form::StepForm;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.toggle_popup(PopupKind::Goto);
        return;
    }
    if is_ctrl_char(key, 'a') {
        app.toggle_popup(PopupKind::Assistant);
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    if let Some(kind) = app.popup_kind() {
        handle_popup_key(app, kind, key);
        return;
    }

    match app.screen() {
        Screen::Known(Route::Bookings) => handle_wizard_key(app, key),
        Screen::NotFound(_) => match key.code {
            KeyCode::Char('1') => app.goto_route(Route::Dashboard),
            KeyCode::Char('2') => app.goto_route(Route::Bookings),
            _ => {}
        },
        Screen::Known(_) => {
            if let KeyCode::Char(c) = key.code {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit.saturating_sub(1) as usize;
                    if let Some(route) = Route::ALL.get(index) {
                        app.goto_route(*route);
                    }
                }
            }
        }
    }
}

fn handle_popup_key(app: &mut App, kind: PopupKind, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.close_popup();
        return;
    }
    match kind {
        PopupKind::Goto => match key.code {
            KeyCode::Enter => app.goto_submit(),
            KeyCode::Backspace => app.goto_backspace(),
            KeyCode::Char(c) => app.goto_input_char(c),
            _ => {}
        },
        PopupKind::Assistant => {
            if is_ctrl_char(key, 'l') {
                app.dispatch_assistant(AssistantIntent::Clear);
                return;
            }
            match key.code {
                KeyCode::Enter => app.assistant_submit(),
                KeyCode::Backspace => app.dispatch_assistant(AssistantIntent::Backspace),
                KeyCode::Char(c) => app.dispatch_assistant(AssistantIntent::Input(c)),
                _ => {}
            }
        }
    }
}

/// Step-transition actions, resolved before handing keys to the form so
/// the form borrow never overlaps the wizard dispatch.
enum WizardAction {
    Continue,
    Back,
    Reset,
    Form,
}

fn wizard_action(form: &StepForm, key: KeyEvent) -> WizardAction {
    match form {
        StepForm::Search(_) => match key.code {
            KeyCode::Enter => WizardAction::Continue,
            _ => WizardAction::Form,
        },
        StepForm::Detail(_) | StepForm::Travelers(_) => match key.code {
            KeyCode::Enter => WizardAction::Continue,
            KeyCode::Esc => WizardAction::Back,
            _ => WizardAction::Form,
        },
        StepForm::Payment(form) => match key.code {
            // Enter applies a typed code; with nothing typed it confirms.
            KeyCode::Enter if form.promo_input.trim().is_empty() => WizardAction::Continue,
            KeyCode::F(10) => WizardAction::Continue,
            KeyCode::Esc => WizardAction::Back,
            _ => WizardAction::Form,
        },
        StepForm::Voucher => match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => WizardAction::Reset,
            KeyCode::Backspace | KeyCode::Esc => WizardAction::Back,
            _ => WizardAction::Form,
        },
    }
}

fn handle_wizard_key(app: &mut App, key: KeyEvent) {
    match wizard_action(app.form(), key) {
        WizardAction::Continue => {
            app.wizard_continue();
            return;
        }
        WizardAction::Back => {
            app.wizard_back();
            return;
        }
        WizardAction::Reset => {
            app.wizard_reset();
            return;
        }
        WizardAction::Form => {}
    }

    match app.form_mut() {
        StepForm::Search(form) => match key.code {
            KeyCode::Tab => form.focus_next(),
            KeyCode::Left => form.cycle_category(-1),
            KeyCode::Right => form.cycle_category(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        },
        StepForm::Detail(form) => match key.code {
            KeyCode::Tab => form.next_pane(),
            KeyCode::Up => form.move_selection(-1),
            KeyCode::Down => form.move_selection(1),
            KeyCode::Char('+') => form.adjust_adults(1),
            KeyCode::Char('-') => form.adjust_adults(-1),
            KeyCode::Char('<') => form.adjust_children(-1),
            KeyCode::Char('>') => form.adjust_children(1),
            _ => {}
        },
        StepForm::Travelers(form) => match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        },
        StepForm::Payment(form) => match key.code {
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.toggle_wallet();
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                form.apply_promo();
                form.promo_input.clear();
            }
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        },
        StepForm::Voucher => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::config::{Config, ConfigStore};
    use crate::ui::wizard::WizardStep;
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config, demo_catalog())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn digits_navigate_between_screens() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.screen(), &Screen::Known(Route::Calendar));
    }

    #[test]
    fn typing_on_bookings_screen_edits_the_search_form() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.screen(), &Screen::Known(Route::Bookings));
        handle_key(&mut app, press(KeyCode::Char('x')));
        if let StepForm::Search(form) = app.form() {
            assert_eq!(form.destination, "x");
        } else {
            panic!("expected search form");
        }
    }

    #[test]
    fn enter_does_not_advance_an_incomplete_search() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.wizard().step, WizardStep::Search);
    }

    #[test]
    fn goto_popup_routes_text_to_the_prompt() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('g'));
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.goto_input(), "/r");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.popup_kind(), None);
    }
}

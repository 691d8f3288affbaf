//! A full booking from search to voucher through the app layer.

use std::path::PathBuf;

use tourdesk::catalog::demo_catalog;
use tourdesk::config::{Config, ConfigStore};
use tourdesk::ui::app::App;
use tourdesk::ui::wizard::form::StepForm;
use tourdesk::ui::wizard::WizardStep;

fn make_app() -> App {
    let store = ConfigStore::new(Config::default(), PathBuf::from("/tmp/journey.toml"));
    App::new(store, demo_catalog())
}

fn type_text(app: &mut App, text: &str) {
    if let StepForm::Search(form) = app.form_mut() {
        for c in text.chars() {
            form.input_char(c);
        }
    }
}

#[test]
fn complete_booking_produces_a_voucher() {
    let mut app = make_app();
    app.navigate("/bookings");

    // Step 1: destination and date; the default category is Adventure.
    type_text(&mut app, "Merzouga");
    if let StepForm::Search(form) = app.form_mut() {
        form.focus_next();
    }
    type_text(&mut app, "2026-10-02");
    app.wizard_continue();
    assert_eq!(app.wizard().step, WizardStep::Detail);

    // Step 2: supplier, premium slot, one adult and one child.
    if let StepForm::Detail(form) = app.form_mut() {
        form.supplier_index = Some(0);
        form.slot_index = Some(2);
        form.adjust_children(1);
    } else {
        panic!("expected detail form");
    }
    app.wizard_continue();
    assert_eq!(app.wizard().step, WizardStep::Travelers);
    assert!(app.wizard().record.is_premium());

    // Step 3: one adult (3 fields) and one child (2 fields).
    if let StepForm::Travelers(form) = app.form_mut() {
        let entries = [
            "Amira Haddad",
            "amira@nomadct.example",
            "+212 600 11 22 33",
            "Lina Haddad",
            "2017-05-09",
        ];
        for entry in entries {
            for c in entry.chars() {
                form.input_char(c);
            }
            form.focus_next();
        }
    } else {
        panic!("expected traveler form");
    }
    app.wizard_continue();
    assert_eq!(app.wizard().step, WizardStep::Payment);

    // Step 4: promo plus wallet redemption.
    if let StepForm::Payment(form) = app.form_mut() {
        for c in "save20".chars() {
            form.input_char(c);
        }
        form.apply_promo();
        form.toggle_wallet();
    } else {
        panic!("expected payment form");
    }
    app.wizard_continue();

    // Step 5: voucher with a reference and the locked-in total.
    assert_eq!(app.wizard().step, WizardStep::Voucher);
    let reference = app.voucher_ref().expect("voucher reference assigned");
    assert!(reference.starts_with("TD-"));
    assert_eq!(reference.len(), 11);

    // Premium tier: 60 + 40 = 100 subtotal, 15 taxes, 4 fee, -20 promo,
    // -30 wallet (30% of the 99 bill).
    let record = &app.wizard().record;
    assert_eq!(record.total_price, Some(69));
    assert_eq!(record.adults.len(), 1);
    assert_eq!(record.children.len(), 1);

    // Starting over clears the record and the reference.
    app.wizard_reset();
    assert_eq!(app.wizard().step, WizardStep::Search);
    assert!(app.voucher_ref().is_none());
}

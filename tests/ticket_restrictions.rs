//! Ticket restriction behavior on the detail step.

use tourdesk::booking::TicketCounts;
use tourdesk::catalog::demo_catalog;
use tourdesk::ui::wizard::form::StepForm;
use tourdesk::ui::wizard::{WizardState, WizardStep};

fn detail_form(category: &str, tickets: Option<TicketCounts>) -> StepForm {
    let mut wizard = WizardState::default();
    wizard.step = WizardStep::Detail;
    wizard.record.category = Some(category.to_string());
    wizard.record.tickets = tickets;
    StepForm::for_state(&wizard, &demo_catalog())
}

#[test]
fn selecting_an_adult_only_tour_zeroes_children() {
    // "Beach" lists the adult-only catamaran cruise first.
    let form = detail_form("Beach", Some(TicketCounts { adult: 2, child: 2 }));
    let StepForm::Detail(form) = form else {
        panic!("expected detail form");
    };
    assert_eq!(form.tickets, TicketCounts { adult: 2, child: 0 });
}

#[test]
fn child_increments_are_ignored_on_an_adult_only_tour() {
    let form = detail_form("Beach", Some(TicketCounts { adult: 1, child: 0 }));
    let StepForm::Detail(mut form) = form else {
        panic!("expected detail form");
    };
    form.adjust_children(1);
    assert_eq!(form.tickets.child, 0);
    form.adjust_adults(1);
    assert_eq!(form.tickets.adult, 2);
}

#[test]
fn selecting_a_child_only_tour_zeroes_adults() {
    // "Safari" has only the child-only ranger camp; the seeded default
    // of one adult is dropped on arrival.
    let form = detail_form("Safari", None);
    let StepForm::Detail(mut form) = form else {
        panic!("expected detail form");
    };
    assert_eq!(form.tickets, TicketCounts { adult: 0, child: 0 });
    form.adjust_adults(1);
    assert_eq!(form.tickets.adult, 0);
    form.adjust_children(2);
    assert_eq!(form.tickets.child, 2);
}

#[test]
fn moving_onto_a_restricted_tour_reclamps_counts() {
    // An empty category falls back to the full tour list, where the
    // third entry is adult-only.
    let form = detail_form("", Some(TicketCounts { adult: 1, child: 2 }));
    let StepForm::Detail(mut form) = form else {
        panic!("expected detail form");
    };
    assert_eq!(form.tickets.child, 2);
    form.move_selection(1);
    form.move_selection(1);
    assert_eq!(form.tickets.child, 0);
}

#[test]
fn counts_never_go_negative() {
    let form = detail_form("Adventure", Some(TicketCounts { adult: 0, child: 0 }));
    let StepForm::Detail(mut form) = form else {
        panic!("expected detail form");
    };
    form.adjust_adults(-1);
    form.adjust_children(-1);
    assert_eq!(form.tickets, TicketCounts::default());
}

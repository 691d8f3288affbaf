//! Wizard controller semantics.
//!
//! The reducer is pure: step transitions saturate at the ends and the
//! record only grows through shallow merges.

use tourdesk::booking::{BookingUpdate, TicketCounts};
use tourdesk::ui::mvi::Reducer;
use tourdesk::ui::wizard::{WizardIntent, WizardReducer, WizardState, WizardStep};

#[test]
fn retreat_at_the_first_step_stays_put() {
    let state = WizardReducer::reduce(WizardState::default(), WizardIntent::Retreat);
    assert_eq!(state.step, WizardStep::Search);
}

#[test]
fn advance_at_the_voucher_stays_put() {
    let mut state = WizardState::default();
    state.step = WizardStep::Voucher;
    let state = WizardReducer::reduce(state, WizardIntent::Advance(BookingUpdate::default()));
    assert_eq!(state.step, WizardStep::Voucher);
}

#[test]
fn advance_walks_all_five_steps_in_order() {
    let mut state = WizardState::default();
    let expected = [
        WizardStep::Detail,
        WizardStep::Travelers,
        WizardStep::Payment,
        WizardStep::Voucher,
    ];
    for step in expected {
        state = WizardReducer::reduce(state, WizardIntent::Advance(BookingUpdate::default()));
        assert_eq!(state.step, step);
    }
}

#[test]
fn advance_merges_without_dropping_earlier_fields() {
    let mut state = WizardState::default();
    state = WizardReducer::reduce(
        state,
        WizardIntent::Advance(BookingUpdate {
            destination: Some("Lisbon".to_string()),
            category: Some("Culture".to_string()),
            ..BookingUpdate::default()
        }),
    );
    state = WizardReducer::reduce(
        state,
        WizardIntent::Advance(BookingUpdate {
            tickets: Some(TicketCounts { adult: 2, child: 0 }),
            ..BookingUpdate::default()
        }),
    );
    assert_eq!(state.record.destination.as_deref(), Some("Lisbon"));
    assert_eq!(state.record.category.as_deref(), Some("Culture"));
    assert_eq!(
        state.record.tickets,
        Some(TicketCounts { adult: 2, child: 0 })
    );
}

#[test]
fn retreat_keeps_the_record() {
    let mut state = WizardState::default();
    state = WizardReducer::reduce(
        state,
        WizardIntent::Advance(BookingUpdate {
            destination: Some("Fes".to_string()),
            ..BookingUpdate::default()
        }),
    );
    state = WizardReducer::reduce(state, WizardIntent::Retreat);
    assert_eq!(state.step, WizardStep::Search);
    assert_eq!(state.record.destination.as_deref(), Some("Fes"));
}

#[test]
fn reset_discards_everything() {
    let mut state = WizardState::default();
    state = WizardReducer::reduce(
        state,
        WizardIntent::Advance(BookingUpdate {
            destination: Some("Fes".to_string()),
            ..BookingUpdate::default()
        }),
    );
    let state = WizardReducer::reduce(state, WizardIntent::Reset);
    assert_eq!(state, WizardState::default());
}

//! Assistant conversation semantics.

use tourdesk::ui::assistant::{canned_reply, AssistantIntent, AssistantReducer, AssistantState, Author};
use tourdesk::ui::mvi::Reducer;

fn typed(text: &str) -> AssistantState {
    let mut state = AssistantState::default();
    for c in text.chars() {
        state = AssistantReducer::reduce(state, AssistantIntent::Input(c));
    }
    state
}

fn submit(state: AssistantState) -> AssistantState {
    AssistantReducer::reduce(
        state,
        AssistantIntent::Submit {
            reply: "canned".to_string(),
            delay_ticks: 3,
        },
    )
}

#[test]
fn submit_logs_the_question_and_starts_waiting() {
    let state = submit(typed("Can I get a refund?"));
    assert!(state.is_waiting());
    assert!(state.input.is_empty());
    assert_eq!(state.log.len(), 1);
    assert_eq!(state.log[0].author, Author::Agent);
    assert_eq!(state.log[0].text, "Can I get a refund?");
}

#[test]
fn reply_is_delivered_only_after_the_delay() {
    let mut state = submit(typed("hello"));
    state = AssistantReducer::reduce(state, AssistantIntent::Tick);
    state = AssistantReducer::reduce(state, AssistantIntent::Tick);
    assert!(state.is_waiting());
    assert_eq!(state.log.len(), 1);
    state = AssistantReducer::reduce(state, AssistantIntent::Tick);
    assert!(!state.is_waiting());
    assert_eq!(state.log.len(), 2);
    assert_eq!(state.log[1].author, Author::Assistant);
    assert_eq!(state.log[1].text, "canned");
}

#[test]
fn submits_are_ignored_while_a_reply_is_pending() {
    let mut state = submit(typed("first"));
    for c in "second".chars() {
        state = AssistantReducer::reduce(state, AssistantIntent::Input(c));
    }
    let state = submit(state);
    assert_eq!(state.log.len(), 1);
    assert_eq!(state.input, "second");
}

#[test]
fn blank_input_is_not_submitted() {
    let state = submit(typed("   "));
    assert!(!state.is_waiting());
    assert!(state.log.is_empty());
}

#[test]
fn clear_wipes_the_conversation() {
    let mut state = submit(typed("hello"));
    state = AssistantReducer::reduce(state, AssistantIntent::Clear);
    assert_eq!(state, AssistantState::default());
}

#[test]
fn canned_replies_match_on_keywords() {
    let refund = canned_reply("How do refunds work?").unwrap();
    let promo = canned_reply("is there a promo code?").unwrap();
    assert_ne!(refund, promo);
    assert!(refund.to_lowercase().contains("cancel") || refund.to_lowercase().contains("refund"));
}

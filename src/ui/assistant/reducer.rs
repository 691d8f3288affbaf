use crate::ui::assistant::intent::AssistantIntent;
use crate::ui::assistant::state::{AssistantState, Author, ChatMessage, PendingReply};
use crate::ui::mvi::Reducer;

pub struct AssistantReducer;

impl Reducer for AssistantReducer {
    type State = AssistantState;
    type Intent = AssistantIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AssistantIntent::Input(c) => {
                let mut state = state;
                state.input.push(c);
                state
            }
            AssistantIntent::Backspace => {
                let mut state = state;
                state.input.pop();
                state
            }
            AssistantIntent::Submit { reply, delay_ticks } => {
                // One question at a time; drop submits while waiting.
                if state.is_waiting() || state.input.trim().is_empty() {
                    return state;
                }
                let mut state = state;
                let question = std::mem::take(&mut state.input);
                state.log.push(ChatMessage {
                    author: Author::Agent,
                    text: question.trim().to_string(),
                });
                state.pending = Some(PendingReply {
                    text: reply,
                    ticks_left: delay_ticks.max(1),
                });
                state
            }
            AssistantIntent::Tick => {
                let Some(mut pending) = state.pending.clone() else {
                    return state;
                };
                let mut state = state;
                pending.ticks_left = pending.ticks_left.saturating_sub(1);
                if pending.ticks_left == 0 {
                    state.log.push(ChatMessage {
                        author: Author::Assistant,
                        text: pending.text,
                    });
                    state.pending = None;
                } else {
                    state.pending = Some(pending);
                }
                state
            }
            AssistantIntent::Clear => AssistantState::default(),
        }
    }
}

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AssistantIntent {
    Input(char),
    Backspace,
    /// Submit the typed question. The caller resolves the canned reply
    /// and delay up front so the reducer stays pure.
    Submit { reply: String, delay_ticks: u32 },
    /// One event-loop tick; counts a pending reply down and delivers it
    /// at zero.
    Tick,
    /// Wipe the conversation.
    Clear,
}

impl Intent for AssistantIntent {}

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Agent,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

/// A reply waiting out its simulated latency.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    pub text: String,
    pub ticks_left: u32,
}

/// Conversation state for the assistant popup.
///
/// While a reply is pending, further submissions are ignored; there is no
/// cancellation path, matching the mock it replaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssistantState {
    pub log: Vec<ChatMessage>,
    pub input: String,
    pub pending: Option<PendingReply>,
}

impl AssistantState {
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }
}

impl UiState for AssistantState {}

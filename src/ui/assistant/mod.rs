//! The mock conversational assistant.

mod dialog;
mod intent;
mod reducer;
mod replies;
mod state;

pub use dialog::render_assistant;
pub use intent::AssistantIntent;
pub use reducer::AssistantReducer;
pub use replies::{canned_reply, APOLOGY};
pub use state::{AssistantState, Author, ChatMessage, PendingReply};

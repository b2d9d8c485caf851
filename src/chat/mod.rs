//! Interactive language assistant.
//!
//! A small state machine over user messages, driven by a REPL.

mod assistant;
/// Input classification.
pub mod command;
mod session;
mod ui;

pub use assistant::{
    Assistant, ConversationState, FALLBACK_PROMPT, GOODBYE, INVALID_OPTION, NEXT_STEP_MENU,
    NO_TRANSLATION, Reply,
};
pub use session::{ChatSession, SessionConfig};

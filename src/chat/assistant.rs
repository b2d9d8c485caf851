//! The conversation state machine.

use std::sync::Arc;

use tracing::{debug, warn};

use super::command::{Input, parse_input};
use crate::tools::{FileTools, save_translation};
use crate::translation::{LanguageDetector, TranslationService, Translator};

pub const GOODBYE: &str = "Exiting Language Assistant. Goodbye!";
pub const NEXT_STEP_MENU: &str = "What would you like to do next? 1. Detect language, 2. Translate to English, 3. Save translation, or 'list files'.";
pub const INVALID_OPTION: &str = "Please select a valid option: 1. Detect language, 2. Translate to English, 3. Save translation, or 'list files'.";
pub const FALLBACK_PROMPT: &str = "Please provide text to process or select an option: 1. Detect language, 2. Translate to English, 3. Save translation, or 'list files'.";
pub const NO_TRANSLATION: &str = "No recent translation to save. Please translate something first.";

const INPUT_MENU: &str = "What would you like to do? 1. Detect language, 2. Translate to English, 3. Save translation, or 'list files' to see saved files.";

/// Where the conversation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    AwaitingInput,
    AwaitingOption,
}

/// What the assistant says back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// The session should end after this reply.
    pub exit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            text: GOODBYE.to_string(),
            exit: true,
        }
    }
}

/// Routes user messages to language detection, translation and file tools.
pub struct Assistant {
    detector: LanguageDetector,
    translator: Translator,
    files: Arc<dyn FileTools>,
    state: ConversationState,
    last_input: Option<String>,
}

impl Assistant {
    pub fn new(service: Arc<dyn TranslationService>, files: Arc<dyn FileTools>) -> Self {
        Self {
            detector: LanguageDetector::new(Arc::clone(&service)),
            translator: Translator::new(service),
            files,
            state: ConversationState::AwaitingInput,
            last_input: None,
        }
    }

    pub const fn state(&self) -> ConversationState {
        self.state
    }

    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    pub fn last_translation(&self) -> Option<&str> {
        self.translator.last_translation()
    }

    /// Handles one user message.
    ///
    /// `exit` is honoured in every state; menu selections are only accepted
    /// once some text has been received.
    pub async fn process_message(&mut self, message: &str) -> Reply {
        debug!(message, state = ?self.state, "Processing message");

        let input = parse_input(message);

        match input {
            Input::Exit => Reply::goodbye(),
            Input::Empty => Reply::say(FALLBACK_PROMPT),
            Input::Text(text) => {
                let reply = format!("Received text: '{text}'.\n{INPUT_MENU}");
                self.last_input = Some(text);
                self.state = ConversationState::AwaitingOption;
                Reply::say(reply)
            }
            Input::Option(_) | Input::ListFiles
                if self.state == ConversationState::AwaitingInput =>
            {
                warn!(message, "Option received before any text");
                Reply::say(FALLBACK_PROMPT)
            }
            Input::Option(option) => Reply::say(self.dispatch(&option).await),
            Input::ListFiles => Reply::say(self.list_files().await),
        }
    }

    async fn dispatch(&mut self, option: &str) -> String {
        match option {
            "1" => {
                let Some(text) = self.last_input.as_deref() else {
                    return "Please provide text to detect language, e.g., 'Bonjour le monde'."
                        .to_string();
                };
                let result = self.detector.detect_language(text).await;
                format!("{result}\n{NEXT_STEP_MENU}")
            }
            "2" => {
                let Some(text) = self.last_input.as_deref() else {
                    return "Please provide text to translate, e.g., 'Bonjour le monde'."
                        .to_string();
                };
                let result = self.translator.translate_to_english(text).await;
                format!("{result}\n{NEXT_STEP_MENU}")
            }
            "3" => self.save_translation().await,
            other => {
                warn!(option = other, "Invalid option");
                INVALID_OPTION.to_string()
            }
        }
    }

    async fn save_translation(&self) -> String {
        let Some(translation) = self.translator.last_translation() else {
            warn!("No translation available to save");
            return NO_TRANSLATION.to_string();
        };

        let line = match save_translation(self.files.as_ref(), translation).await {
            Ok(result) if result.is_success() => {
                format!("Saved translation to {}.", result.file_name)
            }
            Ok(result) => format!("Failed to save translation: {}.", result.message),
            Err(e) => format!("Failed to save translation: {e}."),
        };
        format!("{line}\n{NEXT_STEP_MENU}")
    }

    async fn list_files(&self) -> String {
        let line = match self.files.list_files().await {
            Ok(files) if files.is_empty() => "Available files: No files found".to_string(),
            Ok(files) => {
                let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
                format!("Available files: {}", names.join(", "))
            }
            Err(e) => format!("Failed to list files: {e}."),
        };
        format!("{line}\n{NEXT_STEP_MENU}")
    }
}

//! Language detection and English translation on top of a [`TranslationService`].

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::client::TranslationService;

/// Target language of [`Translator::translate_to_english`].
pub const ENGLISH: &str = "en";

/// Reports the language of a piece of text.
pub struct LanguageDetector {
    service: Arc<dyn TranslationService>,
}

impl LanguageDetector {
    pub fn new(service: Arc<dyn TranslationService>) -> Self {
        Self { service }
    }

    /// Detects the language of `text`, rendered for display.
    ///
    /// The confidence score is passed through from the service as-is.
    pub async fn detect_language(&self, text: &str) -> String {
        match self.service.translate(text, ENGLISH).await {
            Ok(result) => match result.detected_language {
                Some(language) => {
                    debug!(
                        language = %language.language,
                        score = language.score,
                        "Detected language"
                    );
                    format!(
                        "Detected language: {} (Confidence: {:.2})",
                        language.language, language.score
                    )
                }
                None => {
                    warn!(text, "Unable to detect language");
                    "Unable to detect language.".to_string()
                }
            },
            Err(e) => {
                error!(error = %e, "Error detecting language");
                format!("Error detecting language: {e:#}")
            }
        }
    }
}

/// Translates text to English and remembers the latest result.
pub struct Translator {
    service: Arc<dyn TranslationService>,
    last_translation: Option<String>,
}

impl Translator {
    pub fn new(service: Arc<dyn TranslationService>) -> Self {
        Self {
            service,
            last_translation: None,
        }
    }

    /// Translates `text` to English, rendered for display.
    ///
    /// Only a successful translation replaces the remembered one.
    pub async fn translate_to_english(&mut self, text: &str) -> String {
        match self.service.translate(text, ENGLISH).await {
            Ok(result) => match result.translations.into_iter().next() {
                Some(translation) => {
                    debug!(translation = %translation.text, "Translated to English");
                    let rendered = format!("Translated to English: {}", translation.text);
                    self.last_translation = Some(translation.text);
                    rendered
                }
                None => {
                    warn!(text, "Unable to translate text");
                    "Unable to translate text.".to_string()
                }
            },
            Err(e) => {
                error!(error = %e, "Error translating text");
                format!("Error translating text: {e:#}")
            }
        }
    }

    /// The most recent non-empty translation, if any.
    pub fn last_translation(&self) -> Option<&str> {
        self.last_translation.as_deref().filter(|t| !t.is_empty())
    }
}

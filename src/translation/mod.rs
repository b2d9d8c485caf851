mod capability;
mod client;

pub use capability::{ENGLISH, LanguageDetector, Translator};
pub use client::{
    DetectedLanguage, Translation, TranslationResult, TranslationService, TranslatorClient,
};

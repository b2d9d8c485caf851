//! # langassist - Language Assistant
//!
//! `langassist` detects the language of free text, translates it to English
//! through the Azure Translator Text API, and saves translations to a small
//! local file server.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the file server (stores .txt files under ./files)
//! langassist serve
//!
//! # In another terminal, start the assistant
//! export AZURE_TRANSLATOR_KEY=...
//! langassist --region westeurope
//! ```
//!
//! In the assistant, type some text, then `1` to detect its language, `2` to
//! translate it, `3` to save the last translation, `list files` to see saved
//! files, or `exit` to quit.
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/langassist/config.toml`:
//!
//! ```toml
//! [translator]
//! endpoint = "https://api.cognitive.microsofttranslator.com"
//! api_key_env = "AZURE_TRANSLATOR_KEY"
//! region = "westeurope"
//!
//! [storage]
//! url = "http://localhost:8000"
//! dir = "./files"
//! port = 8000
//! ```

/// Interactive assistant: conversation state machine and REPL.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// HTTP handlers for the file server.
pub mod handlers;

/// Tracing subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// File server router and runner.
pub mod server;

/// Text file store behind the file server.
pub mod storage;

/// HTTP client for the file server tools.
pub mod tools;

/// Language detection and translation via Azure Translator.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

//! Subcommand implementations.

/// Interactive assistant command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// File server command handler.
pub mod serve;

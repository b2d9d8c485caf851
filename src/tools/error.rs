//! File tool error types.

use thiserror::Error;

/// Error type for calls to the file server.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The server answered with a non-success status.
    #[error(
        "Failed to {action}: HTTP {status} - {body}. Please ensure the file server is running and the endpoint '{path}' is correct."
    )]
    Http {
        action: &'static str,
        status: u16,
        body: String,
        path: &'static str,
    },

    /// The request never got an answer.
    #[error(
        "Failed to invoke tool '{tool}': {source}. Please ensure the file server is running at '{url}'."
    )]
    Unreachable {
        tool: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a body we could not read.
    #[error("Failed to invoke tool '{tool}': invalid response: {source}")]
    Decode {
        tool: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

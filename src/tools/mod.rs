//! Client side of the file server's tool endpoints.

mod client;
mod error;

pub use client::{
    FileToolClient, FileTools, save_translation, translation_file_name, translation_rows,
};
pub use error::ToolError;

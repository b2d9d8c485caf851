use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, Styled};
use tracing::debug;

use super::assistant::Assistant;
use super::command::{Input, parse_input};
use super::ui;
use crate::ui::Spinner;

/// Connection details shown in the session header.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The translator endpoint URL.
    pub translator_endpoint: String,
    /// The file server base URL.
    pub storage_url: String,
}

/// An interactive language assistant session.
///
/// Reads one line at a time, hands it to the [`Assistant`] and prints the
/// reply until the user types `exit` or cancels the prompt.
pub struct ChatSession {
    config: SessionConfig,
    assistant: Assistant,
}

impl ChatSession {
    pub const fn new(config: SessionConfig, assistant: Assistant) -> Self {
        Self { config, assistant }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("You:")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_help_message("Type text, 1/2/3, 'list files' or 'exit'")
                .prompt();

            match input {
                Ok(line) => {
                    if matches!(parse_input(&line), Input::Empty) {
                        continue;
                    }

                    let spinner = Spinner::new("Working...");
                    let reply = self.assistant.process_message(&line).await;
                    spinner.stop();

                    debug!(state = ?self.assistant.state(), "Reply ready");
                    ui::print_reply(&reply.text);

                    if reply.exit {
                        return Ok(());
                    }
                }
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }
}

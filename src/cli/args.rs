use anyhow::{Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "langassist")]
#[command(about = "Language detection and translation assistant with a local file server")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub chat: ChatArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Resolves the subcommand to run.
    ///
    /// Chat options given before `chat` fill in whatever the subcommand left
    /// unset. They are rejected before `serve` and `configure`.
    pub fn into_command(self) -> Result<Command> {
        match self.command {
            None => Ok(Command::Chat { args: self.chat }),
            Some(Command::Chat { args }) => Ok(Command::Chat {
                args: args.or(self.chat),
            }),
            Some(_) if !self.chat.is_empty() => {
                bail!("--endpoint, --region and --storage-url only apply to the chat assistant")
            }
            Some(command) => Ok(command),
        }
    }
}

/// Options of the interactive assistant.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Translator API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Azure region of the translator resource
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Base URL of the file server
    #[arg(short = 's', long = "storage-url")]
    pub storage_url: Option<String>,
}

impl ChatArgs {
    pub const fn is_empty(&self) -> bool {
        self.endpoint.is_none() && self.region.is_none() && self.storage_url.is_none()
    }

    /// Keeps the options set here and takes the rest from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            endpoint: self.endpoint.or(fallback.endpoint),
            region: self.region.or(fallback.region),
            storage_url: self.storage_url.or(fallback.storage_url),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive language assistant (default)
    Chat {
        #[command(flatten)]
        args: ChatArgs,
    },
    /// Run the local file server
    Serve {
        /// Directory to store text files in
        #[arg(short = 'd', long)]
        dir: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Configure langassist settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn command(argv: &[&str]) -> Result<Command> {
        Args::try_parse_from(argv).unwrap().into_command()
    }

    fn chat_args(argv: &[&str]) -> ChatArgs {
        match command(argv).unwrap() {
            Command::Chat { args } => args,
            other => panic!("expected chat, got {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_runs_chat() {
        let args = chat_args(&["langassist", "--region", "eastus"]);
        assert_eq!(args.region.as_deref(), Some("eastus"));
    }

    #[test]
    fn test_top_level_options_reach_chat_subcommand() {
        let args = chat_args(&["langassist", "--region", "eastus", "chat", "-s", "http://x"]);

        assert_eq!(args.region.as_deref(), Some("eastus"));
        assert_eq!(args.storage_url.as_deref(), Some("http://x"));
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn test_subcommand_options_win() {
        let args = chat_args(&["langassist", "-r", "eastus", "chat", "-r", "westeurope"]);
        assert_eq!(args.region.as_deref(), Some("westeurope"));
    }

    #[test]
    fn test_chat_options_rejected_for_other_subcommands() {
        assert!(command(&["langassist", "--region", "eastus", "serve"]).is_err());
        assert!(command(&["langassist", "-e", "http://x", "configure", "--show"]).is_err());
        assert!(matches!(
            command(&["langassist", "serve", "-p", "9000"]).unwrap(),
            Command::Serve { port: Some(9000), .. }
        ));
    }
}

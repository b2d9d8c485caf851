use clap::Parser;
use std::process::ExitCode;

use langassist::cli::commands::{chat, configure, serve};
use langassist::cli::{Args, Command};
use langassist::logging::init_tracing;
use langassist::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.into_command() {
        Ok(Command::Serve { dir, host, port }) => {
            init_tracing("info");
            serve::run_serve(dir, host, port).await
        }
        Ok(Command::Configure { show }) => configure::run_configure(show),
        Ok(Command::Chat { args }) => {
            init_tracing("error");
            chat::run_chat(args).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            ExitCode::FAILURE
        }
    }
}

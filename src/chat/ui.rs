//! Chat mode UI components.

use crate::ui::Style;

use super::assistant::GOODBYE;
use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Language Assistant",
        Style::header("langassist"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "  {}  {}",
        Style::label("translator"),
        Style::secondary(&config.translator_endpoint)
    );
    println!(
        "  {}     {}",
        Style::label("storage"),
        Style::secondary(&config.storage_url)
    );
    println!();
    println!("Please provide text to process, e.g., 'Bonjour le monde'.");
    println!(
        "Then select an option: {} Detect language, {} Translate to English, {} Save the translation to a file.",
        Style::command("1."),
        Style::command("2."),
        Style::command("3.")
    );
    println!(
        "You can also list available files with {}. Type {} to quit.",
        Style::command("'list files'"),
        Style::command("'exit'")
    );
    println!();
}

pub fn print_reply(text: &str) {
    println!("{} {text}", Style::value("Assistant:"));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success(GOODBYE));
}

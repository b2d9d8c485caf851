//! Configure command handler for editing settings.

use anyhow::{Result, bail};
use inquire::Text;
use std::path::PathBuf;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_PORT, DEFAULT_STORAGE_DIR,
    DEFAULT_STORAGE_URL, DEFAULT_TRANSLATOR_ENDPOINT,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the config file; otherwise prompts for each setting.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_config(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_config(manager, &config);

    config.translator.endpoint = Some(prompt_with_default(
        "Translator endpoint:",
        config
            .translator
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_TRANSLATOR_ENDPOINT),
    )?);

    config.translator.api_key_env = Some(prompt_with_default(
        "Environment variable holding the translator key:",
        config
            .translator
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENV),
    )?);

    let region = Text::new("Translator region (empty for global):")
        .with_default(config.translator.region.as_deref().unwrap_or(""))
        .prompt()?;
    config.translator.region = Some(region.trim().to_string()).filter(|r| !r.is_empty());

    config.storage.url = Some(prompt_with_default(
        "File server URL:",
        config.storage.url.as_deref().unwrap_or(DEFAULT_STORAGE_URL),
    )?);

    let default_dir = config
        .storage
        .dir
        .as_ref()
        .map_or_else(|| DEFAULT_STORAGE_DIR.to_string(), |d| d.display().to_string());
    config.storage.dir = Some(PathBuf::from(prompt_with_default(
        "File server directory:",
        &default_dir,
    )?));

    let default_port = config.storage.port.unwrap_or(DEFAULT_PORT).to_string();
    let port = prompt_with_default("File server port:", &default_port)?;
    let Ok(port) = port.parse::<u16>() else {
        bail!("Invalid port: {port}");
    };
    config.storage.port = Some(port);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message).with_default(default).prompt()?;
    let value = value.trim();

    if value.is_empty() {
        bail!("{} cannot be empty", message.trim_end_matches(':'));
    }

    Ok(value.to_string())
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config
            .translator
            .endpoint
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        config
            .translator
            .api_key_env
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("api_key"),
        if config.translator.api_key.is_some() {
            Style::value("(set)")
        } else {
            not_set()
        }
    );
    println!(
        "  {}       {}",
        Style::label("region"),
        config
            .translator
            .region
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("storage.url"),
        config
            .storage
            .url
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("storage.dir"),
        config
            .storage
            .dir
            .as_ref()
            .map_or_else(not_set, |d| Style::value(d.display()))
    );
    println!(
        "  {} {}",
        Style::label("storage.port"),
        config.storage.port.map_or_else(not_set, Style::value)
    );
    println!();
}

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Default Azure Translator endpoint (global resource).
pub const DEFAULT_TRANSLATOR_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
/// Environment variable consulted for the translator key when none is configured.
pub const DEFAULT_API_KEY_ENV: &str = "AZURE_TRANSLATOR_KEY";
/// Default base URL of the file-storage service.
pub const DEFAULT_STORAGE_URL: &str = "http://localhost:8000";
pub const DEFAULT_STORAGE_DIR: &str = "./files";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings in the `[translator]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Translator Text API endpoint.
    pub endpoint: Option<String>,
    /// Subscription key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the subscription key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Azure region of the translator resource.
    #[serde(default)]
    pub region: Option<String>,
}

impl TranslatorConfig {
    /// Gets the subscription key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|k| !k.is_empty())
    }
}

/// Settings in the `[storage]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL the chat client uses to reach the file server.
    pub url: Option<String>,
    /// Directory the file server stores text files in.
    pub dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Per-request timeout in seconds; 0 disables it.
    pub request_timeout: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/langassist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Resolved settings for the chat assistant.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub translator_endpoint: String,
    pub api_key: String,
    pub region: Option<String>,
    pub storage_url: String,
}

/// Resolved settings for the file server.
#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub request_timeout: u64,
}

/// CLI overrides for the chat assistant.
///
/// Values set here take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ChatOverrides {
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub storage_url: Option<String>,
}

/// CLI overrides for the file server.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Resolves chat settings by merging CLI overrides, the config file and built-in defaults.
///
/// # Errors
///
/// Returns an error if no translator subscription key can be found.
pub fn resolve_chat(overrides: &ChatOverrides, config_file: &ConfigFile) -> Result<ChatSettings> {
    let translator = &config_file.translator;

    let Some(api_key) = translator.get_api_key() else {
        let env_var = translator
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENV);
        bail!(
            "Missing translator subscription key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-key\"\n\n\
             Or set api_key under [translator] in ~/.config/langassist/config.toml"
        );
    };

    let translator_endpoint = overrides
        .endpoint
        .as_ref()
        .or(translator.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TRANSLATOR_ENDPOINT.to_string());

    let region = overrides
        .region
        .as_ref()
        .or(translator.region.as_ref())
        .cloned();

    let storage_url = overrides
        .storage_url
        .as_ref()
        .or(config_file.storage.url.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_STORAGE_URL.to_string());

    Ok(ChatSettings {
        translator_endpoint,
        api_key,
        region,
        storage_url,
    })
}

/// Resolves file server settings by merging CLI overrides, the config file and built-in defaults.
pub fn resolve_serve(overrides: &ServeOverrides, config_file: &ConfigFile) -> ServeSettings {
    let storage = &config_file.storage;

    ServeSettings {
        dir: overrides
            .dir
            .as_ref()
            .or(storage.dir.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
        host: overrides
            .host
            .as_ref()
            .or(storage.host.as_ref())
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: overrides.port.or(storage.port).unwrap_or(DEFAULT_PORT),
        request_timeout: storage
            .request_timeout
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/langassist/config.toml`
    /// or `~/.config/langassist/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

mod manager;

pub use manager::{
    ChatOverrides, ChatSettings, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_URL,
    DEFAULT_TRANSLATOR_ENDPOINT, ServeOverrides, ServeSettings, StorageConfig, TranslatorConfig,
    resolve_chat, resolve_serve,
};

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::chat::{Assistant, ChatSession, SessionConfig};
use crate::cli::ChatArgs;
use crate::config::{ChatOverrides, ChatSettings, ConfigManager, resolve_chat};
use crate::tools::FileToolClient;
use crate::translation::TranslatorClient;

pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let settings = load_settings(&args)?;

    let translator = TranslatorClient::new(
        settings.translator_endpoint.clone(),
        settings.api_key.clone(),
        settings.region.clone(),
    )?;
    let files = FileToolClient::new(settings.storage_url.clone())?;
    debug!(
        translator = %translator.endpoint(),
        storage = %files.base_url(),
        "Initialized clients"
    );

    let assistant = Assistant::new(Arc::new(translator), Arc::new(files));
    let config = SessionConfig {
        translator_endpoint: settings.translator_endpoint,
        storage_url: settings.storage_url,
    };

    let mut session = ChatSession::new(config, assistant);
    let result = session.run().await;
    debug!("Closed chat session");
    result
}

fn load_settings(args: &ChatArgs) -> Result<ChatSettings> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let overrides = ChatOverrides {
        endpoint: args.endpoint.clone(),
        region: args.region.clone(),
        storage_url: args.storage_url.clone(),
    };

    resolve_chat(&overrides, &config_file)
}

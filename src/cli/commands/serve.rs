//! File server command implementation.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ConfigManager, ServeOverrides, resolve_serve};
use crate::server;

pub async fn run_serve(dir: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let settings = resolve_serve(&ServeOverrides { dir, host, port }, &config_file);
    server::serve(settings).await
}

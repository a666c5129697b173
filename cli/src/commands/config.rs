//! Config command - show or change configuration.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;
use wififilter_core::ConfigStore;

use super::Settings;

pub fn show(store: &ConfigStore, settings: &Settings, json: bool) -> Result<()> {
    let config = &settings.config;
    let log_file = store.log_file(config);

    if json {
        let value = json!({
            "configPath": store.config_path(),
            "netshPath": config.netsh_path,
            "allowedFile": settings.allowed_file,
            "commandTimeoutSecs": config.command_timeout_secs,
            "logFile": log_file,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Configuration");
    println!("  Config file:   {}", store.config_path().display());
    println!("  netsh:         {}", config.netsh_path);
    println!("  Allowed list:  {}", settings.allowed_file.display());
    match config.command_timeout() {
        Some(limit) => println!("  Timeout:       {}s", limit.as_secs()),
        None => println!("  Timeout:       none"),
    }
    println!("  Fault log:     {}", log_file.display());
    Ok(())
}

pub async fn set_netsh_path(store: &ConfigStore, path: &str) -> Result<()> {
    store.set_netsh_path(path).await?;
    println!("netsh path set to {}", path);
    Ok(())
}

pub async fn set_timeout(store: &ConfigStore, secs: u64) -> Result<()> {
    store.set_command_timeout(secs).await?;
    if secs == 0 {
        println!("Command timeout disabled");
    } else {
        println!("Command timeout set to {}s", secs);
    }
    Ok(())
}

pub async fn set_allowed_file(store: &ConfigStore, path: Option<PathBuf>) -> Result<()> {
    store.set_allowed_file(path.clone()).await?;
    match path {
        Some(p) => println!("Allowed list file set to {}", p.display()),
        None => println!("Allowed list file reset to the default"),
    }
    Ok(())
}

//! Allowed-list commands.

use anyhow::Result;

use super::{check, load, Settings};

/// List the allowed networks in order.
pub async fn list(settings: &Settings, json: bool) -> Result<()> {
    let workflow = settings.workflow();
    load(&workflow).await?;
    let entries = workflow.allowed();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No allowed networks.");
        println!("Add one with: wififilter allow <SSID>");
        return Ok(());
    }

    println!("Allowed networks:");
    for entry in &entries {
        println!("  {}", entry);
    }
    Ok(())
}

pub async fn add(settings: &Settings, ssid: &str) -> Result<()> {
    let workflow = settings.workflow();
    load(&workflow).await?;
    check(workflow.allow_ssid(ssid).await)?;
    println!("{}", workflow.status().message);
    Ok(())
}

pub async fn remove(settings: &Settings, ssid: &str) -> Result<()> {
    let workflow = settings.workflow();
    load(&workflow).await?;
    check(workflow.remove_ssid(ssid).await)?;
    println!("{}", workflow.status().message);
    Ok(())
}

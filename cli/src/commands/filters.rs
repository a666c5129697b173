//! Filter commands - apply, clear and inspect the OS filters.

use anyhow::Result;

use super::{check, load, Settings};

/// Hide every network except the allowed ones.
pub async fn apply(settings: &Settings) -> Result<()> {
    let workflow = settings.workflow();
    load(&workflow).await?;
    check(workflow.apply().await)?;
    println!("{}", workflow.status().message);
    Ok(())
}

/// Remove every filter and forget the allowed list.
pub async fn clear(settings: &Settings) -> Result<()> {
    let workflow = settings.workflow();
    check(workflow.clear().await)?;
    println!("All filters cleared.");
    println!("{}", workflow.status().message);
    Ok(())
}

/// Show the filters currently configured in the OS.
pub async fn show(settings: &Settings, json: bool) -> Result<()> {
    let workflow = settings.workflow();
    let report = workflow.filters().list_filters().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("No filters configured. All networks are visible.");
        return Ok(());
    }

    if report.deny_all {
        println!("Deny-all filter active: only allowed networks are visible.");
    }
    println!("{:<32} PERMISSION", "SSID");
    println!("{}", "-".repeat(44));
    for ssid in &report.allowed {
        println!("{:<32} allow", ssid);
    }
    for ssid in &report.blocked {
        println!("{:<32} block", ssid);
    }

    println!("\nTotal: {} filtered networks", report.all_ssids().len());
    Ok(())
}

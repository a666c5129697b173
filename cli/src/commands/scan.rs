//! Scan command - show nearby networks that are not allowed.

use anyhow::Result;
use tracing::warn;

use super::{check, truncate, Settings};

pub async fn run(settings: &Settings, search: Option<&str>, json: bool) -> Result<()> {
    let workflow = settings.workflow();

    // Allowed networks are hidden from the scan, so load them first. An
    // unreadable file only means nothing is hidden.
    if let Err(e) = super::load(&workflow).await {
        warn!(error = %e, "continuing without the allowed list");
    }
    check(workflow.scan().await)?;

    let mut networks = workflow.available();
    if let Some(query) = search {
        networks.retain(|n| n.matches_search(query));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&networks)?);
        return Ok(());
    }

    if networks.is_empty() {
        println!("No networks found.");
        return Ok(());
    }

    // Table header
    println!("{:<32} {:<8} SECURITY", "SSID", "SIGNAL");
    println!("{}", "-".repeat(60));

    for network in &networks {
        println!(
            "{:<32} {:<8} {}",
            truncate(&network.ssid, 32),
            network.signal,
            network.security
        );
    }

    println!("\nTotal: {} networks", networks.len());
    Ok(())
}

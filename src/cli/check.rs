//! `--check`: one health probe against the configured backend.

use color_eyre::eyre::{eyre, Result};

use crate::api::CivicClient;

/// Probe `GET /health`, print the outcome and return an error when the
/// backend is not healthy.
pub async fn run_check(client: &CivicClient) -> Result<()> {
    match client.health_check().await {
        Ok(true) => {
            println!("{}: ok", client.base_url());
            Ok(())
        }
        Ok(false) => Err(eyre!("{}: unhealthy", client.base_url())),
        Err(err) => Err(eyre!("{}: {}", client.base_url(), err)),
    }
}

use anyhow::Result;

use crate::client::AlertClient;
use crate::output::{print_error, print_json, print_success, OutputMode};

pub async fn execute(mode: OutputMode, client: &AlertClient) -> Result<()> {
    let result = client.health().await;

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "server": client.base_url(),
            "healthy": result.is_ok(),
            "status": result.as_ref().err().and_then(|e| e.status()).map(|s| s.as_u16()),
            "message": match &result {
                Ok(h) => h.message.clone(),
                Err(e) => e.to_string(),
            },
        }))?,
        OutputMode::Human => match &result {
            Ok(h) => print_success(&format!("{} ({})", h.message, client.base_url())),
            Err(e) => print_error(&format!("Health check: {e}")),
        },
    }

    Ok(())
}

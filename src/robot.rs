use anyhow::{Context, Result};
use serde_json::Value;

/// Delivery side of the tool: one bot endpoint, one POST per invocation.
pub struct Robot {
    webhook_url: String,
    client: reqwest::Client,
}

impl Robot {
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            webhook_url: format!("{}{}", api_url, token),
            client: reqwest::Client::new(),
        }
    }

    /// POST the card and hand back whatever JSON the endpoint returned.
    ///
    /// The Feishu bot API reports delivery problems in the response body
    /// (a `code`/`msg` pair), not in the status line, so the body is
    /// returned as-is without status branching.
    pub async fn send(&self, card: &Value) -> Result<Value> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(card)
            .send()
            .await
            .context("Failed to reach the Feishu webhook")?;

        let body = response
            .json::<Value>()
            .await
            .context("Feishu returned a non-JSON response")?;

        Ok(body)
    }
}

#[cfg(test)]
#[path = "robot_tests.rs"]
mod tests;

use std::time::Duration;

use chrono::Local;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{MenuError, Result};
use crate::models::{InventoryItem, Recipe};
use crate::planner::{MenuPlanner, PlanRequest};
use crate::remote::schema::{
    build_request, convert_response, MenuGenerationRequest, MenuGenerationResponse,
};

/// Hard budget for one remote round trip.
pub const REMOTE_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the remote menu service.
#[derive(Debug, Clone)]
pub struct MenuApiConfig {
    /// Base endpoint; `/chat-messages` is appended per call.
    pub endpoint: String,
    pub api_key: String,
}

/// Chat envelope the service wraps its answers in.
#[derive(Debug, Deserialize)]
struct ChatEnvelope {
    answer: Option<String>,
}

/// Client for the remote menu-generation strategy.
pub struct MenuApiClient {
    config: MenuApiConfig,
    http: reqwest::Client,
}

impl MenuApiClient {
    pub fn new(config: MenuApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REMOTE_TIMEOUT_SECS))
            .build()
            .map_err(|e| MenuError::RemoteUnavailable(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// One synchronous round trip: request in, parsed menu response out.
    ///
    /// Dropping the returned future cancels the call; the timeout above
    /// bounds it either way. Never returns a half-populated plan.
    pub async fn generate(
        &self,
        request: &MenuGenerationRequest,
    ) -> Result<MenuGenerationResponse> {
        let payload = serde_json::json!({
            "inputs": {},
            "query": serde_json::to_string(request)?,
            "response_mode": "blocking",
            "conversation_id": "",
            "user": "recipe-system",
        });

        let url = format!("{}/chat-messages", self.config.endpoint.trim_end_matches('/'));
        debug!(%url, days = request.days, "calling remote menu service");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MenuError::RemoteTimeout(REMOTE_TIMEOUT_SECS)
                } else {
                    MenuError::RemoteUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MenuError::RemoteUnavailable(format!(
                "status {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let envelope: ChatEnvelope = response
            .json()
            .await
            .map_err(|e| MenuError::ResponseParse(e.to_string()))?;

        let answer = envelope
            .answer
            .ok_or_else(|| MenuError::ResponseParse("answer field missing".to_string()))?;

        parse_answer(&answer)
    }
}

/// The answer may arrive bare or wrapped in a ```json fence.
fn extract_json_block(answer: &str) -> &str {
    if let Some(start) = answer.find("```json") {
        let rest = &answer[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }
    answer.trim()
}

/// Parse and shape-check the service's answer text.
pub fn parse_answer(answer: &str) -> Result<MenuGenerationResponse> {
    let response: MenuGenerationResponse = serde_json::from_str(extract_json_block(answer))
        .map_err(|e| MenuError::ResponseParse(e.to_string()))?;

    if response.week_start_date.is_empty() {
        return Err(MenuError::ResponseParse(
            "week_start_date missing".to_string(),
        ));
    }

    Ok(response)
}

/// Generate a menu, preferring the remote strategy when configured.
///
/// Remote failures of any kind are logged and absorbed by falling back to
/// the local planner, so the caller always receives a plan for valid
/// inputs. Input validation errors propagate before any remote work.
pub async fn generate_with_fallback<R: Rng>(
    client: Option<&MenuApiClient>,
    planner: &MenuPlanner,
    request: &PlanRequest,
    inventory: &[InventoryItem],
    rng: &mut R,
) -> Result<Vec<Recipe>> {
    request.validate()?;
    let today = Local::now().date_naive();

    if let Some(client) = client {
        let remote_request = build_request(request, inventory, today, planner.config());
        match client.generate(&remote_request).await {
            Ok(response) => match convert_response(&response) {
                Ok(recipes) => {
                    debug!(recipes = recipes.len(), "remote menu accepted");
                    return Ok(recipes);
                }
                Err(err) => {
                    warn!(%err, "remote menu response rejected, using local planner");
                }
            },
            Err(err) => {
                warn!(%err, "remote menu generation failed, using local planner");
            }
        }
    }

    planner.generate_at(today, request, inventory, rng)
}

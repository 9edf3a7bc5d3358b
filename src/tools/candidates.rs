//! Hydration of introductions suggested by the chat assistant.

use crate::network::RawCandidate;
use crate::service::NetworkService;
use crate::store::NetworkStore;
use anyhow::{Context, Result};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HydrateCandidatesRequest {
    /// Id of the user the suggestions are for
    pub user_id: String,
    /// Candidates exactly as returned by the chat function (id, name, match_score, ...)
    pub candidates: Vec<serde_json::Value>,
}

/// Returns the hydrated candidates as a JSON array.
pub async fn handle_hydrate_candidates<S: NetworkStore>(
    service: &NetworkService<S>,
    request: HydrateCandidatesRequest,
) -> Result<String> {
    let raw = request
        .candidates
        .into_iter()
        .enumerate()
        .map(|(position, value)| {
            serde_json::from_value::<RawCandidate>(value)
                .with_context(|| format!("Candidate {} is malformed", position))
        })
        .collect::<Result<Vec<_>>>()?;

    let hydrated = service.hydrate_candidates(&request.user_id, raw).await?;
    serde_json::to_string_pretty(&hydrated).context("Failed to serialize candidates")
}

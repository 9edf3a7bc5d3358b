//! School leaderboard.

use crate::service::NetworkService;
use crate::store::NetworkStore;
use anyhow::Result;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SchoolLeaderboardRequest {
    /// Maximum number of schools to list (default: 25)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_limit() -> Option<usize> {
    Some(25)
}

pub async fn handle_school_leaderboard<S: NetworkStore>(
    service: &NetworkService<S>,
    request: SchoolLeaderboardRequest,
) -> Result<String> {
    let entries = service.school_leaderboard().await?;
    if entries.is_empty() {
        return Ok("No schools on the leaderboard yet.\n".to_string());
    }

    let limit = request.limit.unwrap_or(25);
    let mut output = format!("School leaderboard ({} schools):\n\n", entries.len());
    for entry in entries.iter().take(limit) {
        let noun = if entry.user_count == 1 { "user" } else { "users" };
        let _ = writeln!(
            output,
            "{}. {} - {} {}",
            entry.rank, entry.school_name, entry.user_count, noun
        );
    }
    if entries.len() > limit {
        let _ = writeln!(output, "... and {} more schools", entries.len() - limit);
    }
    Ok(output)
}

//! People search and pending friend requests.

use crate::network::UserSearchResult;
use crate::service::NetworkService;
use crate::store::NetworkStore;
use anyhow::Result;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchUsersRequest {
    /// Id of the user searching; never appears in the results
    pub user_id: String,
    /// Part of a full name or username, case-insensitive
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IncomingRequestsRequest {
    /// Id of the user whose pending requests to list
    pub user_id: String,
}

pub async fn handle_search_users<S: NetworkStore>(
    service: &NetworkService<S>,
    request: SearchUsersRequest,
) -> Result<String> {
    let results = service
        .search_users(&request.user_id, &request.query)
        .await?;
    if results.is_empty() {
        return Ok(format!("No users match '{}'.\n", request.query.trim()));
    }

    let mut output = format!("Users matching '{}':\n\n", request.query.trim());
    for result in &results {
        write_search_result(&mut output, result);
    }
    Ok(output)
}

fn write_search_result(output: &mut String, result: &UserSearchResult) {
    let _ = write!(output, "- {}", result.display_name);
    if let Some(username) = &result.username {
        let _ = write!(output, " (@{})", username);
    }
    let _ = write!(output, " [{}]", result.id);
    if result.is_connected {
        output.push_str(" - connected");
    } else if result.is_pending {
        output.push_str(" - request sent");
    }
    output.push('\n');
}

pub async fn handle_incoming_requests<S: NetworkStore>(
    service: &NetworkService<S>,
    request: IncomingRequestsRequest,
) -> Result<String> {
    let requests = service.incoming_requests(&request.user_id).await?;
    if requests.is_empty() {
        return Ok(format!("No pending requests for '{}'.\n", request.user_id));
    }

    let mut output = format!("Pending requests ({}):\n\n", requests.len());
    for incoming in &requests {
        let _ = write!(output, "- {} [{}]", incoming.display_name, incoming.sender_id);
        if let Some(bio) = &incoming.bio {
            let _ = write!(output, ": {}", bio);
        }
        output.push('\n');
    }
    Ok(output)
}

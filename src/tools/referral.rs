//! Invite code lookups.

use crate::service::NetworkService;
use crate::store::NetworkStore;
use anyhow::Result;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupReferralRequest {
    /// Invite code from a referral link (case-insensitive)
    pub code: String,
}

pub async fn handle_lookup_referral<S: NetworkStore>(
    service: &NetworkService<S>,
    request: LookupReferralRequest,
) -> Result<String> {
    let referral = service.lookup_referral(&request.code).await?;
    Ok(match referral.referrer {
        Some(referrer) => format!(
            "Invite code {} is valid (shared by {}).\n",
            referral.code, referrer
        ),
        None => format!("Invite code {} is not valid.\n", referral.code),
    })
}

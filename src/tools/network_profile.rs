//! Interest clusters and network score for a user.

use crate::service::{NetworkProfile, NetworkService};
use crate::store::NetworkStore;
use crate::types::Cluster;
use anyhow::Result;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NetworkProfileRequest {
    /// Id of the user whose network to describe
    pub user_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InterestClusterRequest {
    /// Id of the user whose network to describe
    pub user_id: String,
    /// Interest to drill into; free text is resolved to its canonical tag
    pub interest: String,
}

pub async fn handle_network_profile<S: NetworkStore>(
    service: &NetworkService<S>,
    request: NetworkProfileRequest,
) -> Result<String> {
    let profile = service.network_profile(&request.user_id).await?;
    Ok(format_network_profile(&profile))
}

pub async fn handle_interest_cluster<S: NetworkStore>(
    service: &NetworkService<S>,
    request: InterestClusterRequest,
) -> Result<String> {
    match service
        .interest_cluster(&request.user_id, &request.interest)
        .await?
    {
        Some(cluster) => {
            let mut output = String::new();
            write_cluster(&mut output, &cluster);
            Ok(output)
        }
        None => Ok(format!(
            "No connections of '{}' share the interest '{}'.\n",
            request.user_id, request.interest
        )),
    }
}

fn format_network_profile(profile: &NetworkProfile) -> String {
    let name = profile.display_name.as_deref().unwrap_or(&profile.user_id);
    let mut output = format!("Network profile for {}\n\n", name);

    let _ = writeln!(output, "Network score: {}/100", profile.score);
    let _ = writeln!(output, "Profile completeness: {}%", profile.completeness);
    let _ = writeln!(output, "Connections: {}", profile.connection_count);
    output.push('\n');

    if profile.clusters.is_empty() {
        output.push_str("No interest clusters yet.\n");
        return output;
    }

    let _ = writeln!(output, "Interest clusters ({}):", profile.clusters.len());
    for cluster in &profile.clusters {
        write_cluster(&mut output, cluster);
    }
    output
}

fn write_cluster(output: &mut String, cluster: &Cluster) {
    let _ = writeln!(output, "  • {} ({})", cluster.tag, cluster.total_count);
    let names: Vec<&str> = cluster
        .members
        .iter()
        .map(|member| member.display_name.as_str())
        .collect();
    let hidden = cluster.total_count.saturating_sub(cluster.members.len());
    if hidden > 0 {
        let _ = writeln!(output, "    {} and {} more", names.join(", "), hidden);
    } else {
        let _ = writeln!(output, "    {}", names.join(", "));
    }
}

//! MCP server exposing the network engine as tools.

use crate::service::NetworkService;
use crate::store::SnapshotStore;
use crate::tools::candidates::{HydrateCandidatesRequest, handle_hydrate_candidates};
use crate::tools::leaderboard::{SchoolLeaderboardRequest, handle_school_leaderboard};
use crate::tools::network_profile::{
    InterestClusterRequest, NetworkProfileRequest, handle_interest_cluster,
    handle_network_profile,
};
use crate::tools::normalize::{NormalizeRequest, handle_normalize_interest, handle_normalize_school};
use crate::tools::people::{
    IncomingRequestsRequest, SearchUsersRequest, handle_incoming_requests, handle_search_users,
};
use crate::tools::referral::{LookupReferralRequest, handle_lookup_referral};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// Tool output: rendered text, or an error message shown to the client.
type ToolResult = std::result::Result<String, String>;

/// Render the full context chain so the client sees which record failed.
fn tool_error(error: anyhow::Error) -> String {
    format!("{:#}", error)
}

/// MCP Server for network profile queries
#[derive(Clone)]
pub struct NetworkServer {
    /// Shared engine and store
    service: Arc<NetworkService<SnapshotStore>>,

    /// Routes tool calls to the methods below
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for NetworkServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkServer")
            .field("service", &self.service)
            .finish()
    }
}

#[tool_router]
impl NetworkServer {
    pub fn new(service: NetworkService<SnapshotStore>) -> Self {
        Self {
            service: Arc::new(service),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Resolve free-text interests (e.g. 'ML', 'hip hop') to the canonical interest tags used for clustering.",
        input_schema = inline_schema_for_type::<NormalizeRequest>()
    )]
    fn normalize_interest(
        &self,
        Parameters(request): Parameters<NormalizeRequest>,
    ) -> ToolResult {
        Ok(handle_normalize_interest(self.service.as_ref(), &request))
    }

    #[tool(
        description = "Resolve free-text school names (e.g. 'CUNY Hunter', 'UCSD') to canonical school names.",
        input_schema = inline_schema_for_type::<NormalizeRequest>()
    )]
    fn normalize_school(
        &self,
        Parameters(request): Parameters<NormalizeRequest>,
    ) -> ToolResult {
        Ok(handle_normalize_school(self.service.as_ref(), &request))
    }

    #[tool(
        description = "Describe a user's network: connection count, profile completeness, network score (0-100) and the interest clusters shared with their connections.",
        input_schema = inline_schema_for_type::<NetworkProfileRequest>()
    )]
    async fn network_profile(
        &self,
        Parameters(request): Parameters<NetworkProfileRequest>,
    ) -> ToolResult {
        handle_network_profile(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }

    #[tool(
        description = "List the connections of a user who share one specific interest with them.",
        input_schema = inline_schema_for_type::<InterestClusterRequest>()
    )]
    async fn interest_cluster(
        &self,
        Parameters(request): Parameters<InterestClusterRequest>,
    ) -> ToolResult {
        handle_interest_cluster(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }

    #[tool(
        description = "Rank schools by number of users, merging spelling variants of the same school.",
        input_schema = inline_schema_for_type::<SchoolLeaderboardRequest>()
    )]
    async fn school_leaderboard(
        &self,
        Parameters(request): Parameters<SchoolLeaderboardRequest>,
    ) -> ToolResult {
        handle_school_leaderboard(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }

    #[tool(
        description = "Filter and enrich introduction candidates suggested by the chat assistant with stored names, avatars and connection status. Returns JSON.",
        input_schema = inline_schema_for_type::<HydrateCandidatesRequest>()
    )]
    async fn hydrate_candidates(
        &self,
        Parameters(request): Parameters<HydrateCandidatesRequest>,
    ) -> ToolResult {
        handle_hydrate_candidates(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }

    #[tool(
        description = "Find users by part of their full name or username, flagged with whether the searcher is connected to them or has a request pending.",
        input_schema = inline_schema_for_type::<SearchUsersRequest>()
    )]
    async fn search_users(
        &self,
        Parameters(request): Parameters<SearchUsersRequest>,
    ) -> ToolResult {
        handle_search_users(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }

    #[tool(
        description = "List friend requests sent to a user that are still waiting for an answer.",
        input_schema = inline_schema_for_type::<IncomingRequestsRequest>()
    )]
    async fn incoming_requests(
        &self,
        Parameters(request): Parameters<IncomingRequestsRequest>,
    ) -> ToolResult {
        handle_incoming_requests(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }

    #[tool(
        description = "Check a waitlist invite code and report who shared it.",
        input_schema = inline_schema_for_type::<LookupReferralRequest>()
    )]
    async fn lookup_referral(
        &self,
        Parameters(request): Parameters<LookupReferralRequest>,
    ) -> ToolResult {
        handle_lookup_referral(self.service.as_ref(), request)
            .await
            .map_err(tool_error)
    }
}

#[tool_handler]
impl ServerHandler for NetworkServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "network-mcp: interest clusters, network scores and school rankings for \
                 TheNetwork users. Free-text interests and school names are resolved to \
                 canonical names before matching."
                    .to_string(),
            )
    }
}

/// Draft-07 input schema for a request type with every subschema inlined.
///
/// Some MCP clients do not follow `$ref`, so nested request types are expanded in place.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    let schema = settings.into_generator().into_root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}

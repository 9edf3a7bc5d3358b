//! People search results and incoming friend requests.

use super::connections::ConnectionSet;
use crate::avatar::AvatarResolver;
use crate::types::{ANONYMOUS_NAME, Profile, non_blank};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Profiles returned per search.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// One profile matched by name or username, flagged with the searcher's connection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub id: String,
    pub display_name: String,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub is_connected: bool,
    pub is_pending: bool,
}

/// A pending request waiting for the subject's answer, with the sender's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingRequest {
    pub sender_id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

fn display_name(profile: Option<&Profile>) -> String {
    non_blank(profile.and_then(|p| p.display_name.as_deref()))
        .unwrap_or(ANONYMOUS_NAME)
        .to_string()
}

/// Flag each matched profile with the searcher's connection state. Order is kept.
pub fn search_results(
    matches: &[Profile],
    connections: &ConnectionSet,
    avatars: &AvatarResolver,
) -> Vec<UserSearchResult> {
    matches
        .iter()
        .map(|profile| UserSearchResult {
            id: profile.id.clone(),
            display_name: display_name(Some(profile)),
            username: non_blank(profile.username.as_deref()).map(ToString::to_string),
            avatar_url: avatars.resolve(profile.avatar_ref.as_deref()),
            is_connected: connections.is_connected(&profile.id),
            is_pending: connections.is_pending(&profile.id),
        })
        .collect()
}

/// One entry per sender in [`ConnectionSet::pending_incoming`] order.
///
/// A sender whose profile is missing is still listed under the anonymous name.
pub fn incoming_requests(
    connections: &ConnectionSet,
    senders: &[Profile],
    avatars: &AvatarResolver,
) -> Vec<IncomingRequest> {
    let by_id: AHashMap<&str, &Profile> = senders.iter().map(|p| (p.id.as_str(), p)).collect();

    connections
        .pending_incoming()
        .iter()
        .map(|sender_id| {
            let profile = by_id.get(sender_id.as_str()).copied();
            IncomingRequest {
                sender_id: sender_id.clone(),
                display_name: display_name(profile),
                avatar_url: avatars.resolve(profile.and_then(|p| p.avatar_ref.as_deref())),
                bio: non_blank(profile.and_then(|p| p.bio.as_deref())).map(ToString::to_string),
            }
        })
        .collect()
}

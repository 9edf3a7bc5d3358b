//! Hydration of assistant-suggested introductions with stored profile and connection state.

use super::connections::ConnectionSet;
use crate::avatar::AvatarResolver;
use crate::types::Profile;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Default score a candidate must exceed to be shown.
pub const DEFAULT_MIN_MATCH_SCORE: f64 = 0.1;

/// A candidate as returned by the chat function.
///
/// Field names vary between function versions. When several spellings of a field are
/// present, the first non-empty one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CandidateWire")]
pub struct RawCandidate {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub headline: Option<String>,
    pub match_score: Option<f64>,
    pub match_reason: Option<String>,
    pub avatar_url: Option<String>,
}

/// Every accepted spelling kept apart, so payloads carrying two of them still parse.
#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateWire {
    id: String,
    name: Option<String>,
    username: Option<String>,
    headline: Option<String>,
    match_score: Option<f64>,
    #[serde(rename = "matchScore")]
    match_score_camel: Option<f64>,
    match_reason: Option<String>,
    reasoning: Option<String>,
    #[serde(rename = "matchReason")]
    match_reason_camel: Option<String>,
    avatar_url: Option<String>,
    #[serde(rename = "avatarUrl")]
    avatar_url_camel: Option<String>,
}

fn first_text(spellings: [Option<String>; 3]) -> Option<String> {
    spellings
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

impl From<CandidateWire> for RawCandidate {
    fn from(wire: CandidateWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            username: wire.username,
            headline: wire.headline,
            match_score: [wire.match_score, wire.match_score_camel]
                .into_iter()
                .flatten()
                .find(|score| score.abs() > 0.0),
            match_reason: first_text([wire.match_reason, wire.reasoning, wire.match_reason_camel]),
            avatar_url: first_text([wire.avatar_url, wire.avatar_url_camel, None]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCandidate {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    pub headline: Option<String>,
    pub match_score: f64,
    pub match_reason: Option<String>,
    pub avatar_url: Option<String>,
    pub is_connected: bool,
    pub is_pending: bool,
}

/// Filter, deduplicate and enrich raw candidates.
///
/// Candidates scoring at or below `min_score` are dropped and repeated ids keep their
/// first occurrence. Stored profile names and avatars take precedence over what the
/// chat function returned. Input order is preserved.
pub fn hydrate_candidates(
    raw: Vec<RawCandidate>,
    profiles: &[Profile],
    connections: &ConnectionSet,
    avatars: &AvatarResolver,
    min_score: f64,
) -> Vec<RecommendationCandidate> {
    let by_id: AHashMap<&str, &Profile> = profiles.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut seen: AHashSet<String> = AHashSet::with_capacity(raw.len());

    raw.into_iter()
        .filter(|candidate| candidate.match_score.unwrap_or(0.0) > min_score)
        .filter(|candidate| seen.insert(candidate.id.clone()))
        .map(|candidate| {
            let profile = by_id.get(candidate.id.as_str()).copied();
            let name = profile
                .and_then(|p| p.display_name.clone())
                .filter(|n| !n.trim().is_empty())
                .or(candidate.name)
                .unwrap_or_default();
            let avatar_url = avatars
                .resolve(profile.and_then(|p| p.avatar_ref.as_deref()))
                .or_else(|| avatars.resolve(candidate.avatar_url.as_deref()));

            RecommendationCandidate {
                is_connected: connections.is_connected(&candidate.id),
                is_pending: connections.is_pending(&candidate.id),
                id: candidate.id,
                name,
                username: candidate.username,
                headline: candidate.headline,
                match_score: candidate.match_score.unwrap_or(0.0),
                match_reason: candidate.match_reason,
                avatar_url,
            }
        })
        .collect()
}

//! Request orchestration: fetch records through the store, then run the pure engine.
//!
//! Independent fetches run concurrently; computation happens only once every fetch
//! has completed, so a failed fetch never yields a partial result.

use crate::avatar::AvatarResolver;
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::network::{
    ConnectionSet, IncomingRequest, MAX_SEARCH_RESULTS, ProfileFields, RawCandidate,
    RecommendationCandidate, UserSearchResult, build_leaderboard, compute_clusters,
    hydrate_candidates, incoming_requests, score_breakdown, search_results,
};
use crate::referral::{Referral, normalize_invite_code};
use crate::store::NetworkStore;
use crate::taxonomy::Normalizer;
use crate::types::{Cluster, Profile, ProfileExtras, SchoolLeaderboardEntry, non_blank};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use std::collections::HashMap;

/// A user's interest clusters and network score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub connection_count: usize,
    pub completeness: u32,
    pub score: u32,
    pub clusters: Vec<Cluster>,
}

/// Subject profile with everything fetched around it.
struct Neighborhood {
    profile: Profile,
    extras: Option<ProfileExtras>,
    connections: ConnectionSet,
    /// Accepted peers in connection order
    peers: Vec<Profile>,
}

pub struct NetworkService<S> {
    store: S,
    interests: Normalizer,
    schools: Normalizer,
    avatars: AvatarResolver,
    min_match_score: f64,
}

impl<S> std::fmt::Debug for NetworkService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkService")
            .field("interest_aliases", &self.interests.table().len())
            .field("school_aliases", &self.schools.table().len())
            .field("min_match_score", &self.min_match_score)
            .finish_non_exhaustive()
    }
}

impl<S: NetworkStore> NetworkService<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            interests: config.interest_normalizer(),
            schools: config.school_normalizer(),
            avatars: config.avatar_resolver(),
            min_match_score: config.min_match_score,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn interest_normalizer(&self) -> &Normalizer {
        &self.interests
    }

    pub fn school_normalizer(&self) -> &Normalizer {
        &self.schools
    }

    async fn neighborhood(&self, user_id: &str) -> Result<Neighborhood> {
        let user_ids = [user_id.to_string()];
        let (profile, extras, rows) = futures::try_join!(
            self.store.profile(user_id),
            self.store.profile_extras(&user_ids),
            self.store.connections_for(user_id),
        )?;

        let profile = profile.ok_or_else(|| StoreError::ProfileNotFound(user_id.to_string()))?;
        let connections = ConnectionSet::resolve(user_id, &rows);

        let peers = if connections.accepted().is_empty() {
            vec![]
        } else {
            let fetched = self.store.profiles(connections.accepted()).await?;
            let mut by_id: AHashMap<String, Profile> =
                fetched.into_iter().map(|p| (p.id.clone(), p)).collect();
            connections
                .accepted()
                .iter()
                .filter_map(|id| by_id.remove(id))
                .collect()
        };

        tracing::debug!(
            "Fetched neighborhood for {}: {} connection rows, {} peers",
            user_id,
            rows.len(),
            peers.len()
        );

        Ok(Neighborhood {
            profile,
            extras: extras.into_iter().next(),
            connections,
            peers,
        })
    }

    /// Interest clusters and network score for one user.
    pub async fn network_profile(&self, user_id: &str) -> Result<NetworkProfile> {
        let hood = self.neighborhood(user_id).await?;
        let clusters = compute_clusters(&self.interests, hood.profile.interests(), &hood.peers);

        let fields = ProfileFields::from_records(&hood.profile, hood.extras.as_ref());
        let connection_count = hood.connections.connection_count();
        let breakdown = score_breakdown(&fields, connection_count, clusters.len());

        Ok(NetworkProfile {
            user_id: hood.profile.id.clone(),
            display_name: hood.profile.display_name.clone(),
            connection_count,
            completeness: breakdown.completeness,
            score: breakdown.total,
            clusters,
        })
    }

    /// The cluster for a single interest, resolved through the interest normalizer.
    ///
    /// Returns `None` when the interest is blank, the user does not hold it, or no peer
    /// shares it. Unlike [`network_profile`](Self::network_profile) this is not limited
    /// to the top clusters.
    pub async fn interest_cluster(&self, user_id: &str, interest: &str) -> Result<Option<Cluster>> {
        let Some(tag) = self.interests.normalize_opt(Some(interest)) else {
            return Ok(None);
        };

        let hood = self.neighborhood(user_id).await?;
        let held: Vec<String> = hood
            .profile
            .interests()
            .iter()
            .filter(|raw| self.interests.normalize(raw) == tag)
            .cloned()
            .collect();

        Ok(compute_clusters(&self.interests, &held, &hood.peers)
            .into_iter()
            .next())
    }

    /// Users counted per school, ranked.
    pub async fn school_leaderboard(&self) -> Result<Vec<SchoolLeaderboardEntry>> {
        let profiles = self.store.profiles_with_school().await?;
        if profiles.is_empty() {
            return Ok(vec![]);
        }

        let user_ids: Vec<String> = profiles.iter().map(|p| p.id.clone()).collect();
        let mut seen = AHashSet::new();
        let school_ids: Vec<String> = profiles
            .iter()
            .filter_map(|p| non_blank(p.school_ref.as_deref()))
            .filter(|id| seen.insert(*id))
            .map(ToString::to_string)
            .collect();

        let (extras, schools) = futures::try_join!(
            self.store.profile_extras(&user_ids),
            self.store.schools(&school_ids),
        )?;

        let college_by_user: HashMap<String, String> = extras
            .into_iter()
            .filter_map(|e| {
                let college = non_blank(e.college_text.as_deref())?.to_string();
                Some((e.user_id, college))
            })
            .collect();
        let directory: HashMap<String, String> =
            schools.into_iter().map(|s| (s.id, s.name)).collect();

        Ok(build_leaderboard(
            &self.schools,
            &profiles,
            &directory,
            &college_by_user,
        ))
    }

    /// Enrich chat-suggested candidates with stored names, avatars and connection state.
    pub async fn hydrate_candidates(
        &self,
        user_id: &str,
        raw: Vec<RawCandidate>,
    ) -> Result<Vec<RecommendationCandidate>> {
        let candidate_ids: Vec<String> = raw
            .iter()
            .filter(|c| c.match_score.unwrap_or(0.0) > self.min_match_score)
            .map(|c| c.id.clone())
            .collect();

        let (profiles, rows) = if candidate_ids.is_empty() {
            (vec![], vec![])
        } else {
            futures::try_join!(
                self.store.profiles(&candidate_ids),
                self.store.connections_for(user_id),
            )?
        };

        let connections = ConnectionSet::resolve(user_id, &rows);
        Ok(hydrate_candidates(
            raw,
            &profiles,
            &connections,
            &self.avatars,
            self.min_match_score,
        ))
    }

    /// Profiles whose name or username contains `query`, excluding the searcher.
    pub async fn search_users(&self, user_id: &str, query: &str) -> Result<Vec<UserSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }

        let (matches, rows) = futures::try_join!(
            self.store.search_profiles(query, user_id, MAX_SEARCH_RESULTS),
            self.store.connections_for(user_id),
        )?;
        tracing::debug!("Search '{}' for {} matched {} profiles", query, user_id, matches.len());

        let connections = ConnectionSet::resolve(user_id, &rows);
        Ok(search_results(&matches, &connections, &self.avatars))
    }

    /// Pending requests sent to `user_id`, with each sender's profile.
    pub async fn incoming_requests(&self, user_id: &str) -> Result<Vec<IncomingRequest>> {
        let rows = self.store.connections_for(user_id).await?;
        let connections = ConnectionSet::resolve(user_id, &rows);
        if connections.pending_incoming().is_empty() {
            return Ok(vec![]);
        }

        let senders = self.store.profiles(connections.pending_incoming()).await?;
        Ok(incoming_requests(&connections, &senders, &self.avatars))
    }

    /// Validate an invite code and look up who shared it.
    pub async fn lookup_referral(&self, code: &str) -> Result<Referral> {
        let code = normalize_invite_code(code)?;
        let entry = self.store.waitlist_entry(&code).await?;
        if entry.is_none() {
            tracing::debug!("Unknown invite code {}", code);
        }
        Ok(Referral::new(code, entry.as_ref()))
    }
}

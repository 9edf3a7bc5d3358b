//! Network computations over already-fetched records.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, and identical
//! inputs always produce identical output.

pub(crate) mod candidates;
pub(crate) mod clusters;
pub(crate) mod connections;
pub(crate) mod leaderboard;
pub(crate) mod people;
pub(crate) mod scoring;

pub use candidates::{
    DEFAULT_MIN_MATCH_SCORE, RawCandidate, RecommendationCandidate, hydrate_candidates,
};
pub use clusters::{MAX_CLUSTER_MEMBERS, MAX_CLUSTERS, compute_clusters};
pub use connections::ConnectionSet;
pub use leaderboard::build_leaderboard;
pub use people::{
    IncomingRequest, MAX_SEARCH_RESULTS, UserSearchResult, incoming_requests, search_results,
};
pub use scoring::{ProfileFields, ScoreBreakdown, compute_score, score_breakdown};

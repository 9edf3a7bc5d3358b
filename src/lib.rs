//! Interest taxonomy and network scoring for TheNetwork, served over MCP.

pub mod avatar;
pub mod config;
pub mod error;
pub mod network;
pub mod referral;
pub mod server;
pub mod service;
pub mod store;
pub mod taxonomy;
pub mod tools;
pub mod tracing;
pub mod types;

pub use config::Config;
pub use network::{ConnectionSet, ProfileFields, build_leaderboard, compute_clusters, compute_score};
pub use server::NetworkServer;
pub use service::{NetworkProfile, NetworkService};
pub use store::{NetworkStore, Snapshot, SnapshotStore};
pub use taxonomy::{CanonicalTable, Normalizer};
pub use types::{Cluster, PeerSummary, Profile, SchoolLeaderboardEntry};

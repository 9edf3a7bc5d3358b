//! In-memory store backed by a JSON snapshot of the backend tables.

use super::NetworkStore;
use crate::error::{Result, StoreError};
use crate::types::{
    ConnectionRecord, Profile, ProfileExtras, SchoolRecord, WaitlistEntry, non_blank,
};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of the tables. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub profiles: Vec<Profile>,
    pub profile_extras: Vec<ProfileExtras>,
    pub schools: Vec<SchoolRecord>,
    pub connections: Vec<ConnectionRecord>,
    pub waitlist: Vec<WaitlistEntry>,
}

/// Read-only store answering queries from a loaded [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshot: Snapshot,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file.
    pub async fn load(path: &Path) -> std::result::Result<Self, StoreError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "Loaded snapshot {}: {} profiles, {} connections, {} schools",
            path.display(),
            snapshot.profiles.len(),
            snapshot.connections.len(),
            snapshot.schools.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

fn id_set(ids: &[String]) -> AHashSet<&str> {
    ids.iter().map(String::as_str).collect()
}

impl NetworkStore for SnapshotStore {
    async fn profile(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.snapshot.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn profiles(&self, ids: &[String]) -> Result<Vec<Profile>> {
        let wanted = id_set(ids);
        Ok(self
            .snapshot
            .profiles
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .cloned()
            .collect())
    }

    async fn search_profiles(
        &self,
        query: &str,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<Profile>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(vec![]);
        }

        let mut seen = AHashSet::new();
        Ok(self
            .snapshot
            .profiles
            .iter()
            .filter(|p| p.id != exclude_id && p.matches_name(&needle))
            .filter(|p| seen.insert(p.id.as_str()))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn profiles_with_school(&self) -> Result<Vec<Profile>> {
        Ok(self
            .snapshot
            .profiles
            .iter()
            .filter(|p| {
                non_blank(p.school_ref.as_deref()).is_some()
                    || non_blank(p.school_text.as_deref()).is_some()
            })
            .cloned()
            .collect())
    }

    async fn profile_extras(&self, user_ids: &[String]) -> Result<Vec<ProfileExtras>> {
        let wanted = id_set(user_ids);
        Ok(self
            .snapshot
            .profile_extras
            .iter()
            .filter(|e| wanted.contains(e.user_id.as_str()))
            .cloned()
            .collect())
    }

    async fn schools(&self, ids: &[String]) -> Result<Vec<SchoolRecord>> {
        let wanted = id_set(ids);
        Ok(self
            .snapshot
            .schools
            .iter()
            .filter(|s| wanted.contains(s.id.as_str()))
            .cloned()
            .collect())
    }

    async fn connections_for(&self, user_id: &str) -> Result<Vec<ConnectionRecord>> {
        Ok(self
            .snapshot
            .connections
            .iter()
            .filter(|c| c.party_a == user_id || c.party_b == user_id)
            .cloned()
            .collect())
    }

    async fn waitlist_entry(&self, invite_code: &str) -> Result<Option<WaitlistEntry>> {
        Ok(self
            .snapshot
            .waitlist
            .iter()
            .find(|w| w.invite_code.eq_ignore_ascii_case(invite_code))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "profiles": [
            {"id": "u1", "full_name": "Ada", "school": "Hunter"},
            {"id": "u2", "full_name": "Alan", "school_id": "s1"},
            {"id": "u3", "full_name": "Grace", "username": "amazing_grace"}
        ],
        "connections": [
            {"sender_id": "u1", "receiver_id": "u2", "status": "accepted"},
            {"sender_id": "u3", "receiver_id": "u2", "status": "pending"}
        ],
        "waitlist": [{"name": "Grace Hopper", "invite_code": "GRACE1"}]
    }"#;

    async fn load_fixture() -> SnapshotStore {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        SnapshotStore::load(file.path()).await.unwrap()
    }

    #[tokio::test]
    async fn test_queries() {
        let store = load_fixture().await;

        let_assert!(Ok(Some(profile)) = store.profile("u1").await);
        check!(profile.display_name.as_deref() == Some("Ada"));
        check!(store.profile("nobody").await.unwrap().is_none());

        let with_school = store.profiles_with_school().await.unwrap();
        check!(with_school.len() == 2);

        let connections = store.connections_for("u2").await.unwrap();
        check!(connections.len() == 2);
        check!(store.connections_for("u1").await.unwrap().len() == 1);

        let profiles = store
            .profiles(&["u3".to_string(), "missing".to_string()])
            .await
            .unwrap();
        check!(profiles.len() == 1);

        check!(store.waitlist_entry("grace1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_search_profiles() {
        let store = load_fixture().await;

        let found = store.search_profiles(" A ", "u1", 10).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        check!(ids == ["u2", "u3"]);

        let by_username = store.search_profiles("AMAZING", "u1", 10).await.unwrap();
        check!(by_username.len() == 1);

        check!(store.search_profiles("a", "u1", 1).await.unwrap().len() == 1);
        check!(store.search_profiles("   ", "u1", 10).await.unwrap().is_empty());

        let grace = Profile {
            id: "u3".to_string(),
            display_name: Some("Grace".to_string()),
            ..Profile::default()
        };
        let duplicated = SnapshotStore::new(Snapshot {
            profiles: vec![grace.clone(), grace],
            ..Snapshot::default()
        });
        check!(duplicated.search_profiles("grace", "u1", 10).await.unwrap().len() == 1);
    }

    #[tokio::test]
    async fn test_malformed_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let_assert!(Err(StoreError::Parse { .. }) = SnapshotStore::load(file.path()).await);
    }

    #[tokio::test]
    async fn test_missing_snapshot() {
        let_assert!(
            Err(StoreError::Read { .. }) = SnapshotStore::load(Path::new("/nonexistent.json")).await
        );
    }
}

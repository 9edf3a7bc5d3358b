//! Shared test fixtures for integration tests.
//!
//! The `network` fixture is a small social graph:
//! - `sam` holds "AI", "Music" and "Rock Climbing"
//! - `ada`, `alan` and `grace` are accepted connections (in either direction)
//! - `linus` has a pending request from `sam`, `tim` declined
//! - `ghost` shares every interest but is not connected; their request to `sam` is pending
//! - `ada` goes by the username `countess`

#![allow(dead_code)] // each test crate uses a subset

use network_mcp::types::{
    ConnectionRecord, ConnectionStatus, ProfileExtras, SchoolRecord, WaitlistEntry,
};
use network_mcp::{Config, NetworkService, Profile, Snapshot, SnapshotStore};
use rstest::fixture;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn profile(id: &str, name: &str, interests: &[&str]) -> Profile {
    Profile {
        id: id.to_string(),
        display_name: Some(name.to_string()),
        interests: Some(interests.iter().map(ToString::to_string).collect()),
        ..Profile::default()
    }
}

pub fn connection(a: &str, b: &str, status: ConnectionStatus) -> ConnectionRecord {
    ConnectionRecord {
        party_a: a.to_string(),
        party_b: b.to_string(),
        status,
    }
}

pub fn network_snapshot() -> Snapshot {
    let mut sam = profile("sam", "Sam Rivera", &["AI", "Music", "Rock Climbing"]);
    sam.avatar_ref = Some("sam.png".to_string());
    sam.bio = Some("Builder".to_string());

    let mut ada = profile("ada", "Ada Lovelace", &["artificial intelligence", "AI"]);
    ada.school_text = Some("CUNY Hunter College".to_string());
    ada.username = Some("countess".to_string());
    let mut alan = profile("alan", "Alan Turing", &["machine learning", "music"]);
    alan.school_text = Some("Hunter College".to_string());
    let mut grace = profile("grace", "Grace Hopper", &["rock climbing"]);
    grace.school_ref = Some("s1".to_string());
    let mut linus = profile("linus", "Linus", &["music"]);
    linus.school_text = Some("Columbia".to_string());

    Snapshot {
        profiles: vec![
            sam,
            ada,
            alan,
            grace,
            linus,
            profile("tim", "Tim", &["music"]),
            profile("ghost", "Ghost", &["AI", "music", "rock climbing"]),
        ],
        profile_extras: vec![ProfileExtras {
            user_id: "sam".to_string(),
            status_text: Some("Heads down".to_string()),
            working_on_text: Some("A climbing app".to_string()),
            ..ProfileExtras::default()
        }],
        schools: vec![SchoolRecord {
            id: "s1".to_string(),
            name: "Columbia University".to_string(),
        }],
        connections: vec![
            connection("sam", "ada", ConnectionStatus::Accepted),
            connection("alan", "sam", ConnectionStatus::Accepted),
            connection("grace", "sam", ConnectionStatus::Accepted),
            connection("sam", "grace", ConnectionStatus::Accepted),
            connection("sam", "linus", ConnectionStatus::Pending),
            connection("tim", "sam", ConnectionStatus::Declined),
            connection("ghost", "sam", ConnectionStatus::Pending),
        ],
        waitlist: vec![WaitlistEntry {
            name: Some("Grace Hopper".to_string()),
            invite_code: "GRACE42".to_string(),
        }],
    }
}

#[fixture]
pub fn network() -> NetworkService<SnapshotStore> {
    NetworkService::new(SnapshotStore::new(network_snapshot()), &Config::default())
}

/// Writes `contents` to a temporary file kept alive by the returned handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

pub fn write_snapshot(path: &Path, snapshot: &Snapshot) {
    let json = serde_json::to_string(snapshot).expect("Failed to serialize snapshot");
    std::fs::write(path, json).expect("Failed to write snapshot");
}

//! Access to persisted records.
//!
//! The engine never talks to a backend directly; request orchestration goes through
//! [`NetworkStore`] so the concrete backend stays swappable.

mod snapshot;

pub use snapshot::{Snapshot, SnapshotStore};

use crate::error::Result;
use crate::types::{ConnectionRecord, Profile, ProfileExtras, SchoolRecord, WaitlistEntry};
use std::future::Future;

/// Repository over the record shapes the engine consumes.
pub trait NetworkStore: Send + Sync {
    fn profile(&self, id: &str) -> impl Future<Output = Result<Option<Profile>>> + Send;

    /// Profiles for the given ids. Unknown ids are skipped.
    fn profiles(&self, ids: &[String]) -> impl Future<Output = Result<Vec<Profile>>> + Send;

    /// Up to `limit` profiles whose display name or username contains `query`,
    /// ignoring case. `exclude_id` is never returned and each profile appears once.
    fn search_profiles(
        &self,
        query: &str,
        exclude_id: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Profile>>> + Send;

    /// Profiles carrying a school reference or school text.
    fn profiles_with_school(&self) -> impl Future<Output = Result<Vec<Profile>>> + Send;

    fn profile_extras(
        &self,
        user_ids: &[String],
    ) -> impl Future<Output = Result<Vec<ProfileExtras>>> + Send;

    fn schools(&self, ids: &[String]) -> impl Future<Output = Result<Vec<SchoolRecord>>> + Send;

    /// Connection rows in which `user_id` is either party.
    fn connections_for(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<ConnectionRecord>>> + Send;

    fn waitlist_entry(
        &self,
        invite_code: &str,
    ) -> impl Future<Output = Result<Option<WaitlistEntry>>> + Send;
}

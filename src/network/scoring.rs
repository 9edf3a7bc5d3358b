//! Network score: a bounded heuristic over profile completeness, connections and clusters.

use crate::types::{Profile, ProfileExtras, non_blank};

/// Points awarded per filled profile field.
const COMPLETENESS_STEP: u32 = 20;

/// Profile fields that count toward completeness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileFields<'a> {
    pub name: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub status: Option<&'a str>,
    pub working_on: Option<&'a str>,
}

impl<'a> ProfileFields<'a> {
    /// Gather completeness fields from a profile and its optional extras row.
    pub fn from_records(profile: &'a Profile, extras: Option<&'a ProfileExtras>) -> Self {
        Self {
            name: profile.display_name.as_deref(),
            avatar: profile.avatar_ref.as_deref(),
            bio: profile.bio.as_deref(),
            status: extras.and_then(|e| e.status_text.as_deref()),
            working_on: extras.and_then(|e| e.working_on_text.as_deref()),
        }
    }

    /// Completeness in `[0, 100]`: 20 points for each non-blank field.
    pub fn completeness(&self) -> u32 {
        let filled = [
            self.name,
            self.avatar,
            self.bio,
            self.status,
            self.working_on,
        ]
        .into_iter()
        .filter(|field| non_blank(*field).is_some())
        .count();
        filled as u32 * COMPLETENESS_STEP
    }
}

/// Breakdown of a network score. Each term saturates before summing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub completeness: u32,
    pub connection_score: u32,
    pub cluster_score: u32,
    pub profile_score: f64,
    pub total: u32,
}

/// Calculate the network score.
///
/// Scoring:
/// - Connections: 2 points each, capped at 40
/// - Clusters: 5 points each, capped at 30
/// - Profile: 30% of completeness, capped at 30
/// - Total: rounded sum, capped at 100
pub fn score_breakdown(
    fields: &ProfileFields<'_>,
    connection_count: usize,
    cluster_count: usize,
) -> ScoreBreakdown {
    let completeness = fields.completeness();
    let connection_score = connection_count.saturating_mul(2).min(40) as u32;
    let cluster_score = cluster_count.saturating_mul(5).min(30) as u32;
    let profile_score = (f64::from(completeness) * 0.3).min(30.0);

    let sum = f64::from(connection_score) + f64::from(cluster_score) + profile_score;
    let total = (sum.round() as u32).min(100);

    ScoreBreakdown {
        completeness,
        connection_score,
        cluster_score,
        profile_score,
        total,
    }
}

/// Network score in `[0, 100]`.
pub fn compute_score(
    fields: &ProfileFields<'_>,
    connection_count: usize,
    cluster_count: usize,
) -> u32 {
    score_breakdown(fields, connection_count, cluster_count).total
}

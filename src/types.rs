//! Record shapes consumed from the backing store and result shapes produced by the engine.

use serde::{Deserialize, Serialize};

/// Fallback shown when a profile has no usable name.
pub const ANONYMOUS_NAME: &str = "Someone";

/// A user profile as stored by the backend.
///
/// Interests are replaced wholesale by the external derivation process, so the list
/// may contain duplicates and near-duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: String,
    #[serde(alias = "full_name")]
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub interests: Option<Vec<String>>,
    #[serde(alias = "school_id")]
    pub school_ref: Option<String>,
    #[serde(alias = "school")]
    pub school_text: Option<String>,
    #[serde(alias = "avatar_url")]
    pub avatar_ref: Option<String>,
    pub bio: Option<String>,
}

impl Profile {
    /// First whitespace-separated token of the display name.
    pub fn first_name(&self) -> &str {
        first_name(self.display_name.as_deref())
    }

    /// Raw interest strings, empty when the profile has none.
    pub fn interests(&self) -> &[String] {
        self.interests.as_deref().unwrap_or_default()
    }

    /// Case-insensitive substring match on display name or username. `needle` must
    /// already be lowercased.
    pub fn matches_name(&self, needle: &str) -> bool {
        [self.display_name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

/// Secondary per-user profile fields kept outside the main profile row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileExtras {
    pub user_id: String,
    #[serde(alias = "college")]
    pub college_text: Option<String>,
    pub status_text: Option<String>,
    pub working_on_text: Option<String>,
}

/// School directory entry. Names are assumed canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Declined,
}

/// One friend-request row. `party_a` is the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    #[serde(alias = "sender_id")]
    pub party_a: String,
    #[serde(alias = "receiver_id")]
    pub party_b: String,
    pub status: ConnectionStatus,
}

impl ConnectionRecord {
    /// The party on the other side of this row relative to `subject`, or `None`
    /// when the subject is not part of it.
    pub fn other_party(&self, subject: &str) -> Option<&str> {
        if self.party_a == subject {
            Some(&self.party_b)
        } else if self.party_b == subject {
            Some(&self.party_a)
        } else {
            None
        }
    }
}

/// Waitlist signup carrying an invite code other people can be referred with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub name: Option<String>,
    pub invite_code: String,
}

/// Compact view of a peer inside a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerSummary {
    pub id: String,
    pub display_name: String,
    pub avatar_ref: Option<String>,
}

impl From<&Profile> for PeerSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            display_name: profile.first_name().to_string(),
            avatar_ref: profile.avatar_ref.clone(),
        }
    }
}

/// Peers sharing one canonical interest with the subject.
///
/// `members` is capped for display while `total_count` is the uncapped count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub tag: String,
    pub members: Vec<PeerSummary>,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolLeaderboardEntry {
    pub school_name: String,
    pub user_count: usize,
    pub rank: usize,
}

pub(crate) fn first_name(name: Option<&str>) -> &str {
    name.and_then(|n| n.split_whitespace().next())
        .unwrap_or(ANONYMOUS_NAME)
}

/// Returns the trimmed string when it carries any content.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Ada Lovelace"), "Ada")]
    #[case(Some("  Grace   Hopper "), "Grace")]
    #[case(Some("   "), ANONYMOUS_NAME)]
    #[case(None, ANONYMOUS_NAME)]
    fn test_first_name(#[case] name: Option<&str>, #[case] expected: &str) {
        check!(first_name(name) == expected);
    }

    #[test]
    fn test_other_party_either_direction() {
        let row = ConnectionRecord {
            party_a: "alice".to_string(),
            party_b: "bob".to_string(),
            status: ConnectionStatus::Accepted,
        };
        check!(row.other_party("alice") == Some("bob"));
        check!(row.other_party("bob") == Some("alice"));
        check!(row.other_party("carol").is_none());
    }

    #[test]
    fn test_profile_accepts_backend_column_names() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": "u1", "full_name": "Ada L", "school": "Hunter", "avatar_url": "a.png"}"#,
        )
        .unwrap();
        check!(profile.display_name.as_deref() == Some("Ada L"));
        check!(profile.school_text.as_deref() == Some("Hunter"));
        check!(profile.avatar_ref.as_deref() == Some("a.png"));
        check!(profile.interests().is_empty());
    }

    #[rstest]
    #[case("ada", true)]
    #[case("lovel", true)]
    #[case("countess", true)]
    #[case("grace", false)]
    fn test_matches_name(#[case] needle: &str, #[case] expected: bool) {
        let profile = Profile {
            id: "u1".to_string(),
            display_name: Some("Ada Lovelace".to_string()),
            username: Some("TheCountess".to_string()),
            ..Profile::default()
        };
        check!(profile.matches_name(needle) == expected);
    }
}

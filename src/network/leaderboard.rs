//! School leaderboard: users counted per canonical school, ranked.

use crate::taxonomy::Normalizer;
use crate::types::{Profile, SchoolLeaderboardEntry};
use ahash::AHashMap;
use std::collections::HashMap;

/// Resolve the school a profile counts toward.
///
/// Precedence, first available wins:
/// 1. structured school reference found in `directory` (name used as-is)
/// 2. college text from the profile extras, normalized
/// 3. legacy school text on the profile, normalized
fn resolve_school(
    normalizer: &Normalizer,
    profile: &Profile,
    directory: &HashMap<String, String>,
    college_by_user: &HashMap<String, String>,
) -> Option<String> {
    let from_directory = profile
        .school_ref
        .as_ref()
        .and_then(|id| directory.get(id))
        .filter(|name| !name.trim().is_empty())
        .cloned();

    from_directory
        .or_else(|| normalizer.normalize_opt(college_by_user.get(&profile.id).map(String::as_str)))
        .or_else(|| normalizer.normalize_opt(profile.school_text.as_deref()))
}

/// Count profiles per resolved school and rank them.
///
/// Ordering is by user count descending, then school name ascending (case-sensitive).
/// Ranks are 1-based positions after sorting. Profiles without any school signal are
/// left out.
pub fn build_leaderboard(
    normalizer: &Normalizer,
    profiles: &[Profile],
    directory: &HashMap<String, String>,
    college_by_user: &HashMap<String, String>,
) -> Vec<SchoolLeaderboardEntry> {
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    for profile in profiles {
        if let Some(school) = resolve_school(normalizer, profile, directory, college_by_user) {
            *counts.entry(school).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });

    tracing::debug!(
        "Ranked {} schools from {} profiles",
        ranked.len(),
        profiles.len()
    );

    ranked
        .into_iter()
        .enumerate()
        .map(|(position, (school_name, user_count))| SchoolLeaderboardEntry {
            school_name,
            user_count,
            rank: position + 1,
        })
        .collect()
}

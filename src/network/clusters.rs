//! Interest clusters: peers grouped under the canonical interests they share with a subject.

use crate::taxonomy::Normalizer;
use crate::types::{Cluster, PeerSummary, Profile};
use ahash::{AHashMap, AHashSet};

/// Members shown per cluster. `total_count` still reflects every member.
pub const MAX_CLUSTER_MEMBERS: usize = 8;

/// Clusters returned per subject.
pub const MAX_CLUSTERS: usize = 10;

#[derive(Default)]
struct ClusterBuilder<'a> {
    members: Vec<&'a Profile>,
    seen: AHashSet<&'a str>,
}

impl<'a> ClusterBuilder<'a> {
    fn register(&mut self, peer: &'a Profile) {
        if self.seen.insert(peer.id.as_str()) {
            self.members.push(peer);
        }
    }

    fn finish(self, tag: String) -> Cluster {
        Cluster {
            tag,
            total_count: self.members.len(),
            members: self
                .members
                .into_iter()
                .take(MAX_CLUSTER_MEMBERS)
                .map(PeerSummary::from)
                .collect(),
        }
    }
}

/// Group `peers` under the canonical interests they share with the subject.
///
/// Only tags present in both the subject's and a peer's normalized interests form a
/// cluster. A peer counts once per tag no matter how many of their raw interests map to
/// it, and a peer listed more than once is considered once. Clusters are ordered by
/// member count descending, then tag ascending, and capped at [`MAX_CLUSTERS`].
pub fn compute_clusters(
    normalizer: &Normalizer,
    subject_interests: &[String],
    peers: &[Profile],
) -> Vec<Cluster> {
    let subject_tags: AHashSet<String> = subject_interests
        .iter()
        .filter_map(|raw| normalizer.normalize_opt(Some(raw.as_str())))
        .collect();

    if subject_tags.is_empty() || peers.is_empty() {
        return vec![];
    }

    let mut builders: AHashMap<String, ClusterBuilder<'_>> = AHashMap::new();
    let mut seen_peers: AHashSet<&str> = AHashSet::with_capacity(peers.len());

    for peer in peers {
        if !seen_peers.insert(peer.id.as_str()) {
            continue;
        }
        for raw in peer.interests() {
            let Some(tag) = normalizer.normalize_opt(Some(raw.as_str())) else {
                continue;
            };
            if subject_tags.contains(&tag) {
                builders.entry(tag).or_default().register(peer);
            }
        }
    }

    let mut clusters: Vec<Cluster> = builders
        .into_iter()
        .filter(|(_, builder)| !builder.members.is_empty())
        .map(|(tag, builder)| builder.finish(tag))
        .collect();

    clusters.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| a.tag.cmp(&b.tag))
    });
    clusters.truncate(MAX_CLUSTERS);

    tracing::debug!(
        "Computed {} clusters from {} subject tags and {} peers",
        clusters.len(),
        subject_tags.len(),
        seen_peers.len()
    );

    clusters
}

mod common;

use assert2::{check, let_assert};
use common::{network, profile};
use network_mcp::{
    CanonicalTable, NetworkService, Normalizer, ProfileFields, SchoolLeaderboardEntry,
    SnapshotStore, build_leaderboard, compute_clusters, compute_score,
};
use rstest::rstest;
use std::collections::HashMap;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn builtin_tables_map_every_key_to_its_canonical_name() {
    for table in [CanonicalTable::interests(), CanonicalTable::schools()] {
        let normalizer = Normalizer::new(table.clone());
        for (key, canonical) in table.iter() {
            check!(normalizer.normalize(key) == canonical);
        }
    }
}

#[rstest]
#[case::school_variant(Normalizer::schools(), "CUNY Hunter College", "HUNTER COLLEGE")]
#[case::school_abbreviation(Normalizer::schools(), "UofT", "University of Toronto")]
#[case::interest_abbreviation(Normalizer::interests(), "ML", "  Machine Learning")]
fn inputs_matching_the_same_entry_agree(
    #[case] normalizer: Normalizer,
    #[case] a: &str,
    #[case] b: &str,
) {
    check!(normalizer.normalize(a) == normalizer.normalize(b));
}

#[test]
fn earlier_table_entry_wins_partial_match() {
    let normalizer = Normalizer::new(CanonicalTable::from_entries([
        ("jazz piano", "Jazz"),
        ("piano lessons", "Piano"),
    ]));
    // "piano" is contained in both cleaned keys
    check!(normalizer.normalize("piano") == "Jazz");
}

#[test]
fn clusters_for_shared_interests() {
    let peers = vec![
        profile("p1", "Peer One", &["artificial intelligence"]),
        profile("p2", "Peer Two", &["machine learning", "music"]),
    ];
    let clusters = compute_clusters(&Normalizer::interests(), &strings(&["AI", "Music"]), &peers);

    check!(clusters.len() == 2);
    check!(clusters[0].tag == "AI & Machine Learning");
    check!(clusters[0].total_count == 2);
    check!(clusters[1].tag == "Music");
    check!(clusters[1].total_count == 1);
}

#[rstest]
#[case(100, 0, 0, 30)]
#[case(100, 25, 10, 100)]
fn network_score_bounds(
    #[case] completeness: u32,
    #[case] connections: usize,
    #[case] clusters: usize,
    #[case] expected: u32,
) {
    let filled = Some("x");
    let fields = ProfileFields {
        name: filled,
        avatar: filled,
        bio: filled,
        status: filled,
        working_on: filled,
    };
    check!(fields.completeness() == completeness);
    check!(compute_score(&fields, connections, clusters) == expected);
}

#[test]
fn leaderboard_merges_school_variants() {
    let mut hunter_long = profile("u1", "A", &[]);
    hunter_long.school_text = Some("CUNY Hunter College".to_string());
    let mut hunter = profile("u2", "B", &[]);
    hunter.school_text = Some("Hunter College".to_string());
    let mut columbia = profile("u3", "C", &[]);
    columbia.school_text = Some("Columbia".to_string());

    let board = build_leaderboard(
        &Normalizer::schools(),
        &[hunter_long, hunter, columbia],
        &HashMap::new(),
        &HashMap::new(),
    );
    check!(
        board
            == vec![
                SchoolLeaderboardEntry {
                    school_name: "Hunter College".to_string(),
                    user_count: 2,
                    rank: 1,
                },
                SchoolLeaderboardEntry {
                    school_name: "Columbia University".to_string(),
                    user_count: 1,
                    rank: 2,
                },
            ]
    );
}

#[test]
fn empty_inputs_produce_empty_outputs() {
    let peers = vec![profile("p1", "Peer", &["music"])];
    check!(compute_clusters(&Normalizer::interests(), &[], &peers).is_empty());
    check!(
        build_leaderboard(&Normalizer::schools(), &[], &HashMap::new(), &HashMap::new())
            .is_empty()
    );
}

#[rstest]
#[tokio::test]
async fn network_profile_counts_each_connection_once(network: NetworkService<SnapshotStore>) {
    let profile = network.network_profile("sam").await.unwrap();

    // ada, alan, grace; linus is pending and tim declined
    check!(profile.connection_count == 3);
    check!(profile.completeness == 100);

    let tags: Vec<&str> = profile.clusters.iter().map(|c| c.tag.as_str()).collect();
    check!(tags == ["AI & Machine Learning", "Music", "Rock Climbing"]);
    check!(profile.clusters[0].total_count == 2);
    check!(profile.clusters[0].members[0].display_name == "Ada");
    check!(profile.clusters[2].members[0].id == "grace");

    // connections 6 + clusters 15 + profile 30
    check!(profile.score == 51);
}

#[rstest]
#[tokio::test]
async fn network_profile_ignores_unconnected_peers(network: NetworkService<SnapshotStore>) {
    let profile = network.network_profile("sam").await.unwrap();
    let member_ids: Vec<&str> = profile
        .clusters
        .iter()
        .flat_map(|c| c.members.iter().map(|m| m.id.as_str()))
        .collect();
    check!(!member_ids.contains(&"ghost"));
    check!(!member_ids.contains(&"linus"));
}

#[rstest]
#[tokio::test]
async fn school_leaderboard_prefers_directory(network: NetworkService<SnapshotStore>) {
    let board = network.school_leaderboard().await.unwrap();
    let rows: Vec<(&str, usize, usize)> = board
        .iter()
        .map(|e| (e.school_name.as_str(), e.user_count, e.rank))
        .collect();
    check!(rows == [("Columbia University", 2, 1), ("Hunter College", 2, 2)]);
}

#[rstest]
#[tokio::test]
async fn referral_lookup(network: NetworkService<SnapshotStore>) {
    let referral = network.lookup_referral(" grace42 ").await.unwrap();
    check!(referral.code == "GRACE42");
    check!(referral.referrer.as_deref() == Some("Grace"));

    let unknown = network.lookup_referral("nobody1").await.unwrap();
    check!(!unknown.is_valid());

    let_assert!(Err(_) = network.lookup_referral("bad code!").await);
}

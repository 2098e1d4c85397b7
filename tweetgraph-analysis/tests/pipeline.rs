//! End-to-end tests for corpus analysis

use std::collections::HashSet;
use tweetgraph_analysis::{
    analyze_corpus, corpus, deduplicate, find_ties_and_triads, hashtag_network,
    mentions_network, retweet_network, AnalysisConfig, Record, StopWords, Tie, Triad,
};

fn scenario() -> Vec<Record> {
    corpus::parse_records(
        r#"[
            {"id": 1, "user": {"screen_name": "u1"}, "retweeted_status": {"user": {"screen_name": "u2"}}},
            {"id": 2, "user": {"screen_name": "u2"}, "entities": {"user_mentions": [{"screen_name": "u3"}]}, "is_quote_status": false},
            {"id": 3, "user": {"screen_name": "u1"}, "text": "same", "entities": {"hashtags": [{"text": "a"}, {"text": "b"}]}}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_three_record_scenario() {
    let records = scenario();

    let retweets = retweet_network(&records);
    assert_eq!(retweets.weight("u1", "u2"), 1);
    assert_eq!(retweets.len(), 1);

    let mentions = mentions_network(&records);
    assert_eq!(mentions.weight("u2", "u3"), 1);
    assert_eq!(mentions.len(), 1);

    let hashtags = hashtag_network(&records);
    assert_eq!(hashtags.get("a").unwrap(), &["b"]);
    assert_eq!(hashtags.get("b").unwrap(), &["a"]);
    assert_eq!(hashtags.len(), 2);

    let analysis = find_ties_and_triads(&[&retweets, &mentions]);
    assert_eq!(analysis.ties, vec![Tie::new("u1", "u2"), Tie::new("u2", "u3")]);
    assert_eq!(analysis.triads, vec![Triad::new("u1", "u2", "u3")]);
}

#[test]
fn test_scenario_through_pipeline() {
    let records = scenario();
    // "same" is an English stop word
    let config = AnalysisConfig {
        number_of_clusters: 1,
        stop_words: StopWords::None,
        seed: Some(42),
        ..Default::default()
    };

    let analysis = analyze_corpus(&records, &config).unwrap();
    assert_eq!(analysis.duplicates, 0);
    assert_eq!(analysis.assignments.len(), 1);
    assert_eq!(analysis.corpus.tie_count(), 2);
    assert_eq!(analysis.corpus.triad_count(), 1);
    // Tables are combined as mentions, retweets, quotes
    assert_eq!(
        analysis.corpus.ties.ties,
        vec![Tie::new("u2", "u3"), Tie::new("u1", "u2")]
    );
    assert_eq!(analysis.corpus.ties.triads, vec![Triad::new("u1", "u2", "u3")]);
    assert_eq!(
        analysis.corpus.summary_line(),
        "Within general data there are 2 ties and 1 triads"
    );

    // Only the record with text is clustered, and it has no interactions
    assert_eq!(analysis.clusters.len(), 1);
    assert_eq!(analysis.clusters[0].record_count, 1);
    assert_eq!(analysis.clusters[0].tie_count(), 0);
    assert_eq!(analysis.clusters[0].hashtags.len(), 2);
}

fn topical_corpus() -> Vec<Record> {
    let posts = [
        (1, "alice", "rust compiler release borrow checker"),
        (2, "bob", "borrow checker errors in rust again"),
        (3, "carol", "new rust compiler lifetimes"),
        (4, "dave", "football match tonight great goal"),
        (5, "erin", "that goal won the football match"),
        (6, "frank", "football striker scores goal"),
        (7, "grace", "baking bread with sourdough starter"),
        (8, "heidi", "sourdough bread recipe flour"),
        (9, "ivan", "flour water salt bread baking"),
    ];

    let mut records: Vec<Record> = posts
        .iter()
        .map(|(id, user, text)| {
            serde_json::from_value(serde_json::json!({
                "id": id,
                "text": text,
                "user": {"screen_name": user},
                "is_quote_status": false,
                "entities": {"hashtags": [], "user_mentions": [{"screen_name": "alice"}]}
            }))
            .unwrap()
        })
        .collect();

    // Duplicate id with different text, and a record without text
    records.push(
        serde_json::from_value(serde_json::json!({
            "id": 2, "text": "completely different", "user": {"screen_name": "mallory"}
        }))
        .unwrap(),
    );
    records.push(
        serde_json::from_value(serde_json::json!({
            "id": 10, "user": {"screen_name": "judy"},
            "retweeted_status": {"user": {"screen_name": "alice"}}
        }))
        .unwrap(),
    );
    records
}

#[test]
fn test_partition_is_complete_and_disjoint() {
    let records = topical_corpus();
    let config = AnalysisConfig {
        number_of_clusters: 3,
        seed: Some(3),
        ..Default::default()
    };

    let analysis = analyze_corpus(&records, &config).unwrap();
    assert_eq!(analysis.duplicates, 1);

    let expected: HashSet<i64> = deduplicate(&records).index.ids().collect();
    let mut seen = HashSet::new();
    for cluster in analysis.members.values() {
        for record in cluster {
            let id = record.id.unwrap();
            assert!(seen.insert(id), "id {} assigned twice", id);
        }
    }
    assert_eq!(seen, expected);
    assert_eq!(analysis.members.len(), 3);
    assert_eq!(analysis.clusters.len(), 3);

    let sizes: usize = analysis.clusters.iter().map(|c| c.record_count).sum();
    assert_eq!(sizes, expected.len());
}

#[test]
fn test_topics_land_in_separate_clusters() {
    let records = topical_corpus();
    let config = AnalysisConfig {
        number_of_clusters: 3,
        seed: Some(11),
        ..Default::default()
    };

    let analysis = analyze_corpus(&records, &config).unwrap();
    let label = |id| analysis.assignments.label_of(id).unwrap();

    assert_eq!(label(1), label(2));
    assert_eq!(label(2), label(3));
    assert_eq!(label(4), label(5));
    assert_eq!(label(5), label(6));
    assert_eq!(label(7), label(8));
    assert_eq!(label(8), label(9));
    let distinct: HashSet<usize> = [label(1), label(4), label(7)].into_iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn test_seeded_analysis_is_deterministic() {
    let records = topical_corpus();
    let config = AnalysisConfig {
        number_of_clusters: 2,
        seed: Some(5),
        ..Default::default()
    };

    let first = analyze_corpus(&records, &config).unwrap();
    let second = analyze_corpus(&records, &config).unwrap();

    let first_labels: Vec<_> = first.assignments.iter().collect();
    let second_labels: Vec<_> = second.assignments.iter().collect();
    assert_eq!(first_labels, second_labels);
    assert_eq!(
        serde_json::to_value(&first.clusters).unwrap(),
        serde_json::to_value(&second.clusters).unwrap()
    );
}

#[test]
fn test_first_original_record_is_resolved_for_duplicates() {
    let records = topical_corpus();
    let config = AnalysisConfig {
        number_of_clusters: 1,
        seed: Some(1),
        ..Default::default()
    };

    let analysis = analyze_corpus(&records, &config).unwrap();
    let bob = analysis.members[&0]
        .iter()
        .find(|r| r.id == Some(2))
        .unwrap();
    assert_eq!(bob.author(), Some("bob"));

    // Networks read the resolved original, not the duplicate
    assert_eq!(analysis.clusters[0].mentions.targets("bob").unwrap()["alice"], 1);
    assert_eq!(analysis.corpus.retweets.weight("judy", "alice"), 1);
    assert_eq!(analysis.corpus.ranking.users.len(), 1);
}

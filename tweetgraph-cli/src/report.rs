//! Plain-text report of a corpus analysis

use std::fmt::{self, Write};
use tweetgraph_analysis::{CorpusAnalysis, Ranked, ScopeAnalysis};

pub fn render(analysis: &CorpusAnalysis<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Removed {} duplicates", analysis.duplicates)?;
    for cluster in &analysis.clusters {
        writeln!(
            out,
            "{} has {} posts; power users: {}; hashtags: {}",
            cluster.scope,
            cluster.record_count,
            format_ranked(&cluster.ranking.users),
            format_ranked(&cluster.ranking.hashtags)
        )?;
    }

    render_networks(&mut out, &analysis.corpus)?;
    for cluster in &analysis.clusters {
        render_networks(&mut out, cluster)?;
    }

    writeln!(out, "{}", analysis.corpus.summary_line())?;
    for cluster in &analysis.clusters {
        writeln!(out, "{}", cluster.summary_line())?;
    }

    Ok(out)
}

fn render_networks(out: &mut String, scope: &ScopeAnalysis) -> fmt::Result {
    writeln!(out, "Networks for {} data", scope.scope)?;
    writeln!(out, "  Mentions network size: {}", scope.mentions.len())?;
    writeln!(out, "  Retweet network size: {}", scope.retweets.len())?;
    writeln!(out, "  Quote network size: {}", scope.quotes.len())?;
    writeln!(out, "  Found {} hashtags", scope.hashtags.len())
}

fn format_ranked(ranked: &[Ranked]) -> String {
    if ranked.is_empty() {
        return "-".to_string();
    }
    ranked
        .iter()
        .map(|r| format!("{} ({})", r.key, r.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ranked() {
        assert_eq!(format_ranked(&[]), "-");
        assert_eq!(
            format_ranked(&[Ranked::new("alice", 3), Ranked::new("bob", 1)]),
            "alice (3), bob (1)"
        );
    }

    #[test]
    fn test_render_includes_summary_lines() {
        let records = tweetgraph_analysis::corpus::parse_records(
            r#"[{"id": 1, "text": "rust compiler", "user": {"screen_name": "a"}},
                {"id": 2, "text": "football goal", "user": {"screen_name": "b"},
                 "retweeted_status": {"user": {"screen_name": "a"}}}]"#,
        )
        .unwrap();
        let config = tweetgraph_analysis::AnalysisConfig {
            number_of_clusters: 1,
            seed: Some(1),
            ..Default::default()
        };
        let analysis = tweetgraph_analysis::analyze_corpus(&records, &config).unwrap();

        let text = render(&analysis).unwrap();
        assert!(text.contains("Removed 0 duplicates"));
        assert!(text.contains("cluster 0 has 2 posts; power users: a (1)"));
        assert!(text.contains("Within general data there are 1 ties and 0 triads"));
        assert!(text.contains("Within cluster 0 data there are 1 ties and 0 triads"));
        assert!(text.contains("Networks for general data\n  Mentions network size: 0\n  Retweet network size: 1\n"));
    }
}

use super::*;

use crate::dom::StaticDocument;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_from_document_decodes_every_payload() {
    let doc = StaticDocument::new()
        .with_text(TREND_LABELS_NODE, r#"["Mar 01","Mar 04"]"#)
        .with_text(OVERALL_SCORES_NODE, "[61, 74.5]")
        .with_text(AVERAGE_SCORES_NODE, r#"{"Clarity": 71.5, "Length": 64}"#)
        .with_text(ISSUE_LABELS_NODE, r#"["Passive voice","Hedging"]"#)
        .with_text(ISSUE_VALUES_NODE, "[4, 2]")
        .with_text(SENTIMENTS_NODE, "[55, 62]")
        .with_text(GRAMMAR_COUNTS_NODE, "[3, 0]")
        .with_text(TOPIC_RELEVANCE_NODE, r#"{"High": 2, "Low": 1}"#);

    let data = DashboardData::from_document(&doc);
    assert_eq!(data.trend_labels, strings(&["Mar 01", "Mar 04"]));
    assert_eq!(data.overall_scores, vec![61.0, 74.5]);
    assert_eq!(data.average_scores.get("Clarity"), Some(&71.5));
    assert_eq!(data.issue_labels, strings(&["Passive voice", "Hedging"]));
    assert_eq!(data.issue_values, vec![4.0, 2.0]);
    assert_eq!(data.sentiments, vec![55.0, 62.0]);
    assert_eq!(data.grammar_counts, vec![3.0, 0.0]);
    assert_eq!(data.topic_relevance.get("High"), Some(&2.0));
}

#[test]
fn test_missing_nodes_fall_back_to_empty() {
    let doc = StaticDocument::new();
    let data = DashboardData::from_document(&doc);
    assert_eq!(data, DashboardData::default());
}

#[test]
fn test_malformed_node_does_not_affect_others() {
    let doc = StaticDocument::new()
        .with_text(TREND_LABELS_NODE, "[\"Mar 01\",")
        .with_text(OVERALL_SCORES_NODE, "[61, 74]");

    let data = DashboardData::from_document(&doc);
    assert!(data.trend_labels.is_empty());
    assert_eq!(data.overall_scores, vec![61.0, 74.0]);
}

#[test]
fn test_wrong_shape_falls_back_to_empty() {
    let doc = StaticDocument::new().with_text(OVERALL_SCORES_NODE, r#"{"score": 61}"#);
    let data = DashboardData::from_document(&doc);
    assert!(data.overall_scores.is_empty());
}

#[test]
fn test_map_payloads_iterate_in_sorted_key_order() {
    let doc = StaticDocument::new()
        .with_text(AVERAGE_SCORES_NODE, r#"{"Length": 64, "Clarity": 71.5}"#);
    let data = DashboardData::from_document(&doc);
    let keys: Vec<&str> = data.average_scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Clarity", "Length"]);
}

use std::collections::BTreeMap;

pub mod fallback;
pub mod payload;

use tracing::info;

use crate::dom::Document;

pub use payload::PayloadError;

pub type ScoreMap = BTreeMap<String, f64>;

pub const TREND_LABELS_NODE: &str = "labels-data";
pub const OVERALL_SCORES_NODE: &str = "scores-data";
pub const AVERAGE_SCORES_NODE: &str = "avg-data";
pub const ISSUE_LABELS_NODE: &str = "issue-labels";
pub const ISSUE_VALUES_NODE: &str = "issue-values";
pub const SENTIMENTS_NODE: &str = "sentiments-data";
pub const GRAMMAR_COUNTS_NODE: &str = "grammar-data";
pub const TOPIC_RELEVANCE_NODE: &str = "topic-data";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub trend_labels: Vec<String>,
    pub overall_scores: Vec<f64>,
    pub average_scores: ScoreMap,
    pub issue_labels: Vec<String>,
    pub issue_values: Vec<f64>,
    pub sentiments: Vec<f64>,
    pub grammar_counts: Vec<f64>,
    pub topic_relevance: ScoreMap,
}

impl DashboardData {
    pub fn from_document<D: Document + ?Sized>(document: &D) -> Self {
        let data = Self {
            trend_labels: payload::decode_or(document, TREND_LABELS_NODE, Vec::new()),
            overall_scores: payload::decode_or(document, OVERALL_SCORES_NODE, Vec::new()),
            average_scores: payload::decode_or(document, AVERAGE_SCORES_NODE, ScoreMap::new()),
            issue_labels: payload::decode_or(document, ISSUE_LABELS_NODE, Vec::new()),
            issue_values: payload::decode_or(document, ISSUE_VALUES_NODE, Vec::new()),
            sentiments: payload::decode_or(document, SENTIMENTS_NODE, Vec::new()),
            grammar_counts: payload::decode_or(document, GRAMMAR_COUNTS_NODE, Vec::new()),
            topic_relevance: payload::decode_or(document, TOPIC_RELEVANCE_NODE, ScoreMap::new()),
        };
        info!(
            trend_labels = data.trend_labels.len(),
            overall_scores = data.overall_scores.len(),
            average_scores = data.average_scores.len(),
            issue_labels = data.issue_labels.len(),
            issue_values = data.issue_values.len(),
            sentiments = data.sentiments.len(),
            grammar_counts = data.grammar_counts.len(),
            topic_relevance = data.topic_relevance.len(),
            "dashboard data loaded"
        );
        data
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

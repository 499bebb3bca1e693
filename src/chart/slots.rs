use std::fmt;

use tracing::warn;

use crate::chart::config::{ChartKind, ChartSpec, Dataset, IndexAxis, LegendPosition, ValueRange};
use crate::input::DashboardData;
use crate::normalize::HeadlineSeries;

pub const NO_ISSUES_NOTICE: &str = "No issues data available";

const TREND_COLOR: &str = "#3b82f6";
const AVG_BAR_COLOR: &str = "#10b981";
const AVG_BAR_EDGE: &str = "#059669";
const SENTIMENT_COLOR: &str = "#8b5cf6";
const SENTIMENT_FILL: &str = "rgba(139, 92, 246, 0.1)";
const GRAMMAR_COLOR: &str = "#ef4444";
const GRAMMAR_EDGE: &str = "#dc2626";
const ISSUE_PALETTE: &[&str] = &[
    "#ef4444", "#3b82f6", "#f59e0b", "#10b981", "#8b5cf6", "#f97316",
];
const TOPIC_PALETTE: &[&str] = &["#10b981", "#f59e0b", "#ef4444"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    ScoreTrend,
    AverageScores,
    Issues,
    SentimentTrend,
    GrammarIssues,
    TopicRelevance,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::ScoreTrend,
        Slot::AverageScores,
        Slot::Issues,
        Slot::SentimentTrend,
        Slot::GrammarIssues,
        Slot::TopicRelevance,
    ];

    pub fn canvas_id(self) -> &'static str {
        match self {
            Slot::ScoreTrend => "scoreTrend",
            Slot::AverageScores => "avgScores",
            Slot::Issues => "issuesChart",
            Slot::SentimentTrend => "sentimentTrend",
            Slot::GrammarIssues => "grammarTrend",
            Slot::TopicRelevance => "topicRelevanceChart",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canvas_id())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotPlan {
    Chart(ChartSpec),
    Placeholder(&'static str),
    Skip(&'static str),
}

pub fn plan_slot(slot: Slot, data: &DashboardData, headline: &HeadlineSeries) -> SlotPlan {
    match slot {
        Slot::ScoreTrend => SlotPlan::Chart(score_trend_spec(headline)),
        Slot::AverageScores => SlotPlan::Chart(average_scores_spec(headline)),
        Slot::Issues => {
            if data.issue_labels.is_empty() || data.issue_values.is_empty() {
                SlotPlan::Placeholder(NO_ISSUES_NOTICE)
            } else {
                SlotPlan::Chart(issues_spec(data))
            }
        }
        // The sentiment and grammar conditions read the raw trend labels, not
        // the normalized ones.
        Slot::SentimentTrend => {
            if data.trend_labels.is_empty() || data.sentiments.is_empty() {
                SlotPlan::Skip("no sentiment data")
            } else {
                SlotPlan::Chart(sentiment_spec(data))
            }
        }
        Slot::GrammarIssues => {
            if data.trend_labels.is_empty() || data.grammar_counts.is_empty() {
                SlotPlan::Skip("no grammar data")
            } else {
                SlotPlan::Chart(grammar_spec(data))
            }
        }
        Slot::TopicRelevance => {
            if data.topic_relevance.is_empty() {
                SlotPlan::Skip("no topic relevance data")
            } else {
                SlotPlan::Chart(topic_spec(data))
            }
        }
    }
}

// Parallel arrays of unequal length truncate to the shorter side.
fn aligned(slot: Slot, labels: &[String], values: &[f64]) -> (Vec<String>, Vec<f64>) {
    if labels.len() == values.len() {
        return (labels.to_vec(), values.to_vec());
    }
    let n = labels.len().min(values.len());
    warn!(
        "{slot}: labels/values length mismatch ({} vs {}); truncating to {n}",
        labels.len(),
        values.len()
    );
    (labels[..n].to_vec(), values[..n].to_vec())
}

fn score_trend_spec(headline: &HeadlineSeries) -> ChartSpec {
    let (labels, values) = aligned(
        Slot::ScoreTrend,
        &headline.trend_labels,
        &headline.overall_scores,
    );
    ChartSpec {
        kind: ChartKind::Line,
        labels,
        datasets: vec![Dataset::line(
            "Overall Score",
            values,
            TREND_COLOR,
            TREND_COLOR,
            false,
        )],
        index_axis: IndexAxis::X,
        value_range: ValueRange::clamped(0.0, 100.0),
        legend: LegendPosition::Top,
    }
}

fn average_scores_spec(headline: &HeadlineSeries) -> ChartSpec {
    let labels = headline.average_scores.keys().cloned().collect();
    let values = headline.average_scores.values().copied().collect();
    ChartSpec {
        kind: ChartKind::Bar,
        labels,
        datasets: vec![Dataset::bar(
            "Average Score",
            values,
            AVG_BAR_COLOR,
            AVG_BAR_EDGE,
        )],
        index_axis: IndexAxis::Y,
        value_range: ValueRange::clamped(0.0, 100.0),
        legend: LegendPosition::Top,
    }
}

fn issues_spec(data: &DashboardData) -> ChartSpec {
    let (labels, values) = aligned(Slot::Issues, &data.issue_labels, &data.issue_values);
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels,
        datasets: vec![Dataset::segmented(values, ISSUE_PALETTE)],
        index_axis: IndexAxis::X,
        value_range: ValueRange::default(),
        legend: LegendPosition::Bottom,
    }
}

fn sentiment_spec(data: &DashboardData) -> ChartSpec {
    let (labels, values) = aligned(Slot::SentimentTrend, &data.trend_labels, &data.sentiments);
    ChartSpec {
        kind: ChartKind::Line,
        labels,
        datasets: vec![Dataset::line(
            "Positivity Score",
            values,
            SENTIMENT_COLOR,
            SENTIMENT_FILL,
            true,
        )],
        index_axis: IndexAxis::X,
        value_range: ValueRange::clamped(0.0, 100.0),
        legend: LegendPosition::Top,
    }
}

fn grammar_spec(data: &DashboardData) -> ChartSpec {
    let (labels, values) = aligned(Slot::GrammarIssues, &data.trend_labels, &data.grammar_counts);
    ChartSpec {
        kind: ChartKind::Bar,
        labels,
        datasets: vec![Dataset::bar(
            "Grammar Issues Count",
            values,
            GRAMMAR_COLOR,
            GRAMMAR_EDGE,
        )],
        index_axis: IndexAxis::X,
        value_range: ValueRange::floored(0.0),
        legend: LegendPosition::Top,
    }
}

fn topic_spec(data: &DashboardData) -> ChartSpec {
    let labels = data.topic_relevance.keys().cloned().collect();
    let values = data.topic_relevance.values().copied().collect();
    ChartSpec {
        kind: ChartKind::Pie,
        labels,
        datasets: vec![Dataset::segmented(values, TOPIC_PALETTE)],
        index_axis: IndexAxis::X,
        value_range: ValueRange::default(),
        legend: LegendPosition::Bottom,
    }
}

use tracing::info;

use crate::input::fallback::{sample_average_scores, sample_overall_scores, sample_trend_labels};
use crate::input::{DashboardData, ScoreMap};

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineSeries {
    pub trend_labels: Vec<String>,
    pub overall_scores: Vec<f64>,
    pub average_scores: ScoreMap,
}

// Only the three headline series get sample data. Issue, sentiment, grammar and
// topic payloads stay empty and their slots degrade at dispatch time.
pub fn normalize_headline(data: &DashboardData) -> HeadlineSeries {
    let trend_labels = if data.trend_labels.is_empty() {
        info!("trend labels empty; substituting sample labels");
        sample_trend_labels()
    } else {
        data.trend_labels.clone()
    };
    let overall_scores = if data.overall_scores.is_empty() {
        info!("overall scores empty; substituting sample scores");
        sample_overall_scores()
    } else {
        data.overall_scores.clone()
    };
    let average_scores = if data.average_scores.is_empty() {
        info!("average scores empty; substituting sample averages");
        sample_average_scores()
    } else {
        data.average_scores.clone()
    };

    HeadlineSeries {
        trend_labels,
        overall_scores,
        average_scores,
    }
}

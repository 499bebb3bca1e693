use crate::input::ScoreMap;

pub const SAMPLE_TREND_LABELS: &[&str] = &["Essay 1", "Essay 2", "Essay 3", "Essay 4", "Essay 5"];

pub const SAMPLE_OVERALL_SCORES: &[f64] = &[75.0, 82.0, 68.0, 91.0, 77.0];

pub const SAMPLE_AVERAGE_SCORES: &[(&str, f64)] = &[
    ("Grammar", 78.0),
    ("Readability", 82.0),
    ("Sentiment", 75.0),
    ("Topic Relevance", 85.0),
];

pub fn sample_trend_labels() -> Vec<String> {
    SAMPLE_TREND_LABELS.iter().map(|s| s.to_string()).collect()
}

pub fn sample_overall_scores() -> Vec<f64> {
    SAMPLE_OVERALL_SCORES.to_vec()
}

pub fn sample_average_scores() -> ScoreMap {
    SAMPLE_AVERAGE_SCORES
        .iter()
        .map(|&(name, score)| (name.to_string(), score))
        .collect()
}

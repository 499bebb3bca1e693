use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    pub const fn clamped(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn floored(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: Option<String>,
    pub values: Vec<f64>,
    pub fill: bool,
    pub tension: f64,
    pub border_width: u32,
    pub border_color: Option<String>,
    pub background_color: Vec<String>,
}

impl Dataset {
    pub fn line(
        label: &str,
        values: Vec<f64>,
        border_color: &str,
        background_color: &str,
        fill: bool,
    ) -> Self {
        Self {
            label: Some(label.to_string()),
            values,
            fill,
            tension: 0.25,
            border_width: 2,
            border_color: Some(border_color.to_string()),
            background_color: vec![background_color.to_string()],
        }
    }

    pub fn bar(label: &str, values: Vec<f64>, background_color: &str, border_color: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            values,
            fill: false,
            tension: 0.0,
            border_width: 1,
            border_color: Some(border_color.to_string()),
            background_color: vec![background_color.to_string()],
        }
    }

    pub fn segmented(values: Vec<f64>, palette: &[&str]) -> Self {
        Self {
            label: None,
            values,
            fill: false,
            tension: 0.0,
            border_width: 2,
            border_color: Some("#ffffff".to_string()),
            background_color: palette.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub index_axis: IndexAxis,
    pub value_range: ValueRange,
    pub legend: LegendPosition,
}

//! Wire types shared with the health data backend

use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive reporting window at calendar-day granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::Validation(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Default reporting window: the last seven days through `today`
    pub fn last_seven_days(today: NaiveDate) -> Self {
        Self {
            start: today - chrono::Duration::days(7),
            end: today,
        }
    }

    /// Query parameters understood by every backend endpoint
    pub fn as_query(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.format("%Y-%m-%d").to_string()),
            ("end_date", self.end.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// One day of activity metrics
///
/// `date` is tolerated as absent so a malformed row still charts under an
/// ordinal label instead of failing the whole refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub steps: u64,
    #[serde(default)]
    pub heart_rate: f64,
    #[serde(default)]
    pub sleep_hours: f64,
    #[serde(default)]
    pub hrv: i64,
}

/// One night of sleep data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Duration of sleep in hours
    #[serde(default)]
    pub duration: f64,
    /// Quality of sleep on a 0-100 scale
    #[serde(default)]
    pub sleep_quality: f64,
    #[serde(default)]
    pub disturbances: i64,
}

/// A dated journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub entry: String,
}

/// Direction of a tracked metric over the reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    /// Produced by the backend when the window holds no samples
    InsufficientData,
}

/// Predicted next value, numeric or already formatted upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NextPrediction {
    Number(f64),
    Text(String),
}

/// Trend analysis for a single metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrendPrediction {
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub next_prediction: Option<NextPrediction>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Per-metric fitness predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FitnessInsights {
    #[serde(default)]
    pub steps_prediction: TrendPrediction,
    #[serde(default)]
    pub heart_rate_prediction: TrendPrediction,
    #[serde(default)]
    pub hrv_prediction: TrendPrediction,
}

/// Aggregated sleep analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SleepInsights {
    #[serde(default)]
    pub average_duration: Option<f64>,
    #[serde(default)]
    pub average_quality: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Share of journal entries per sentiment class, 0-100 each
///
/// The three percentages are upstream-derived and independent; they are not
/// required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SentimentBreakdown {
    #[serde(default)]
    pub positive_percentage: f64,
    #[serde(default)]
    pub negative_percentage: f64,
    #[serde(default)]
    pub neutral_percentage: f64,
}

/// Sentiment analysis over the journal entries in the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JournalSentiments {
    #[serde(default)]
    pub average_sentiment: f64,
    #[serde(default)]
    pub overall_mood: Option<String>,
    #[serde(default)]
    pub sentiment_breakdown: SentimentBreakdown,
    #[serde(default)]
    pub emotional_keywords: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Holistic insights document served by `/insights/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Insights {
    #[serde(default)]
    pub fitness_insights: FitnessInsights,
    #[serde(default)]
    pub sleep_insights: SleepInsights,
    #[serde(default)]
    pub journal_sentiments: JournalSentiments,
    #[serde(default)]
    pub wellness_score: Option<f64>,
    #[serde(default)]
    pub holistic_recommendation: Option<String>,
}

/// Raw, unaligned result of one fetch cycle across all four resources
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HealthSnapshot {
    pub insights: Option<Insights>,
    pub metrics: Vec<MetricRecord>,
    pub sleep: Vec<SleepRecord>,
    pub journal: Vec<JournalEntry>,
}

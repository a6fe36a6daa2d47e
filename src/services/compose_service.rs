//! Compose Service
//!
//! Pure transformation of a raw `HealthSnapshot` into the render-ready
//! dashboard view model. This module is the single source of truth for what
//! renders when upstream data is partial or absent; it never fails.

use crate::api::types::{
    HealthSnapshot, JournalEntry, NextPrediction, SentimentBreakdown, Trend,
};
use serde::{Deserialize, Serialize};

/// Fallback shown when no sentiment recommendation is available
pub const NO_RECOMMENDATION: &str = "No recommendations available at this time.";

/// One chart row; metrics and sleep paired by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyView {
    /// ISO day of the metric record, or `"Day N"` when the record has no date
    pub date: String,
    pub steps: u64,
    pub heart_rate: f64,
    pub sleep_quality_percent: f64,
    pub sleep_duration_hours: f64,
}

/// Latest metric values plus fitness trends for the overview cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricsSummary {
    pub steps: u64,
    pub heart_rate: f64,
    pub sleep_hours: f64,
    pub steps_trend: Option<Trend>,
    pub steps_recommendation: Option<String>,
    pub heart_rate_trend: Option<Trend>,
    pub heart_rate_recommendation: Option<String>,
    pub sleep_recommendation: Option<String>,
}

/// Journal sentiment rollup with defaults for every missing field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub average_sentiment: f64,
    pub overall_mood: String,
    pub breakdown: SentimentBreakdown,
    pub emotional_keywords: Vec<String>,
    pub recommendation: String,
}

impl Default for SentimentSummary {
    fn default() -> Self {
        Self {
            average_sentiment: 0.0,
            overall_mood: "neutral".to_string(),
            breakdown: SentimentBreakdown::default(),
            emotional_keywords: Vec::new(),
            recommendation: NO_RECOMMENDATION.to_string(),
        }
    }
}

/// One recommendation panel card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub title: String,
    pub recommendation: String,
    pub trend: Option<Trend>,
    pub next_prediction: Option<NextPrediction>,
}

/// Fully derived, render-ready output of one refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComposedDashboard {
    pub daily_views: Vec<DailyView>,
    pub metrics_summary: MetricsSummary,
    pub sentiment_summary: SentimentSummary,
    /// Empty when insights are absent; that is a renderable state, not an error
    pub recommendations: Vec<RecommendationEntry>,
    /// Passed through in upstream order; the composer does not re-sort
    pub journal: Vec<JournalEntry>,
    pub holistic_recommendation: Option<String>,
    pub wellness_score: Option<f64>,
}

/// Compose service for view model derivation
pub struct ComposeService;

impl ComposeService {
    /// Derive the dashboard view model from a snapshot
    ///
    /// Pure and deterministic; any well-formed snapshot composes, including
    /// fully empty ones.
    pub fn compose(snapshot: &HealthSnapshot) -> ComposedDashboard {
        ComposedDashboard {
            daily_views: Self::daily_views(snapshot),
            metrics_summary: Self::metrics_summary(snapshot),
            sentiment_summary: Self::sentiment_summary(snapshot),
            recommendations: Self::recommendations(snapshot),
            journal: snapshot.journal.clone(),
            holistic_recommendation: snapshot
                .insights
                .as_ref()
                .and_then(|i| i.holistic_recommendation.clone()),
            wellness_score: snapshot.insights.as_ref().and_then(|i| i.wellness_score),
        }
    }

    /// Metrics is the index backbone: `sleep[i]` pairs with `metrics[i]` by
    /// position, zero-filled past the shorter sequence. Sequences fetched
    /// from independent endpoints can disagree on day coverage; positional
    /// pairing is the preserved contract regardless.
    fn daily_views(snapshot: &HealthSnapshot) -> Vec<DailyView> {
        snapshot
            .metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| {
                let sleep = snapshot.sleep.get(i);
                DailyView {
                    date: metric
                        .date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| format!("Day {}", i + 1)),
                    steps: metric.steps,
                    heart_rate: metric.heart_rate,
                    sleep_quality_percent: sleep.map(|s| s.sleep_quality).unwrap_or(0.0),
                    sleep_duration_hours: sleep.map(|s| s.duration).unwrap_or(0.0),
                }
            })
            .collect()
    }

    fn metrics_summary(snapshot: &HealthSnapshot) -> MetricsSummary {
        let latest = snapshot.metrics.last();
        let fitness = snapshot.insights.as_ref().map(|i| &i.fitness_insights);

        MetricsSummary {
            steps: latest.map(|m| m.steps).unwrap_or(0),
            heart_rate: latest.map(|m| m.heart_rate).unwrap_or(0.0),
            sleep_hours: latest.map(|m| m.sleep_hours).unwrap_or(0.0),
            steps_trend: fitness.and_then(|f| f.steps_prediction.trend),
            steps_recommendation: fitness.and_then(|f| f.steps_prediction.recommendation.clone()),
            heart_rate_trend: fitness.and_then(|f| f.heart_rate_prediction.trend),
            heart_rate_recommendation: fitness
                .and_then(|f| f.heart_rate_prediction.recommendation.clone()),
            sleep_recommendation: snapshot
                .insights
                .as_ref()
                .and_then(|i| i.sleep_insights.recommendation.clone()),
        }
    }

    fn sentiment_summary(snapshot: &HealthSnapshot) -> SentimentSummary {
        let Some(sentiments) = snapshot.insights.as_ref().map(|i| &i.journal_sentiments) else {
            return SentimentSummary::default();
        };

        SentimentSummary {
            average_sentiment: sentiments.average_sentiment,
            overall_mood: sentiments
                .overall_mood
                .clone()
                .unwrap_or_else(|| "neutral".to_string()),
            breakdown: sentiments.sentiment_breakdown,
            emotional_keywords: sentiments.emotional_keywords.clone(),
            recommendation: sentiments
                .recommendation
                .clone()
                .unwrap_or_else(|| NO_RECOMMENDATION.to_string()),
        }
    }

    fn recommendations(snapshot: &HealthSnapshot) -> Vec<RecommendationEntry> {
        let Some(insights) = snapshot.insights.as_ref() else {
            return Vec::new();
        };

        vec![
            RecommendationEntry {
                title: "Fitness Insights".to_string(),
                recommendation: insights
                    .fitness_insights
                    .steps_prediction
                    .recommendation
                    .clone()
                    .unwrap_or_default(),
                trend: insights.fitness_insights.steps_prediction.trend,
                next_prediction: insights
                    .fitness_insights
                    .steps_prediction
                    .next_prediction
                    .clone(),
            },
            RecommendationEntry {
                title: "Heart Rate Monitoring".to_string(),
                recommendation: insights
                    .fitness_insights
                    .heart_rate_prediction
                    .recommendation
                    .clone()
                    .unwrap_or_default(),
                trend: insights.fitness_insights.heart_rate_prediction.trend,
                next_prediction: insights
                    .fitness_insights
                    .heart_rate_prediction
                    .next_prediction
                    .clone(),
            },
            RecommendationEntry {
                title: "Sleep Optimization".to_string(),
                recommendation: insights
                    .sleep_insights
                    .recommendation
                    .clone()
                    .unwrap_or_default(),
                trend: None,
                next_prediction: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        FitnessInsights, Insights, JournalSentiments, MetricRecord, SleepInsights, SleepRecord,
        TrendPrediction,
    };
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn metric(day: &str, steps: u64, heart_rate: f64) -> MetricRecord {
        MetricRecord {
            date: Some(date(day)),
            steps,
            heart_rate,
            sleep_hours: 0.0,
            hrv: 0,
        }
    }

    fn sleep(day: &str, duration: f64, quality: f64) -> SleepRecord {
        SleepRecord {
            date: Some(date(day)),
            duration,
            sleep_quality: quality,
            disturbances: 0,
        }
    }

    fn entry(id: i64, day: &str, text: &str) -> JournalEntry {
        JournalEntry {
            id,
            date: date(day),
            entry: text.to_string(),
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let snapshot = HealthSnapshot {
            insights: Some(Insights {
                wellness_score: Some(70.0),
                holistic_recommendation: Some("Keep at it.".to_string()),
                ..Default::default()
            }),
            metrics: vec![metric("2024-01-01", 4000, 66.0)],
            sleep: vec![sleep("2024-01-01", 7.5, 80.0)],
            journal: vec![entry(1, "2024-01-01", "slept well")],
        };

        assert_eq!(
            ComposeService::compose(&snapshot),
            ComposeService::compose(&snapshot)
        );
    }

    #[test]
    fn test_empty_metrics_yields_no_rows_regardless_of_sleep() {
        let snapshot = HealthSnapshot {
            sleep: vec![sleep("2024-01-01", 8.0, 90.0), sleep("2024-01-02", 7.0, 85.0)],
            ..Default::default()
        };

        let dashboard = ComposeService::compose(&snapshot);
        assert!(dashboard.daily_views.is_empty());
        assert_eq!(dashboard.metrics_summary, MetricsSummary::default());
    }

    #[test]
    fn test_rows_past_sleep_length_are_zero_filled() {
        let metrics: Vec<_> = (1..=5)
            .map(|d| metric(&format!("2024-01-0{}", d), d as u64 * 1000, 60.0))
            .collect();
        let sleeps: Vec<_> = (1..=3)
            .map(|d| sleep(&format!("2024-01-0{}", d), 7.0, 80.0))
            .collect();

        let dashboard = ComposeService::compose(&HealthSnapshot {
            metrics,
            sleep: sleeps,
            ..Default::default()
        });

        assert_eq!(dashboard.daily_views.len(), 5);
        assert_eq!(dashboard.daily_views[2].sleep_quality_percent, 80.0);
        for row in &dashboard.daily_views[3..] {
            assert_eq!(row.sleep_quality_percent, 0.0);
            assert_eq!(row.sleep_duration_hours, 0.0);
        }
    }

    #[test]
    fn test_pairing_is_positional_not_by_date() {
        // Sleep covers a different day than the metric; the row still takes it
        let dashboard = ComposeService::compose(&HealthSnapshot {
            metrics: vec![metric("2024-01-02", 3000, 62.0)],
            sleep: vec![sleep("2024-01-01", 6.5, 70.0)],
            ..Default::default()
        });

        assert_eq!(dashboard.daily_views[0].date, "2024-01-02");
        assert_eq!(dashboard.daily_views[0].sleep_duration_hours, 6.5);
    }

    #[test]
    fn test_dateless_metric_gets_ordinal_label() {
        let dashboard = ComposeService::compose(&HealthSnapshot {
            metrics: vec![
                metric("2024-01-01", 1000, 60.0),
                MetricRecord {
                    date: None,
                    steps: 2000,
                    heart_rate: 61.0,
                    sleep_hours: 0.0,
                    hrv: 0,
                },
            ],
            ..Default::default()
        });

        assert_eq!(dashboard.daily_views[0].date, "2024-01-01");
        assert_eq!(dashboard.daily_views[1].date, "Day 2");
    }

    #[test]
    fn test_absent_insights_yields_exact_sentiment_defaults() {
        let dashboard = ComposeService::compose(&HealthSnapshot::default());

        let summary = dashboard.sentiment_summary;
        assert_eq!(summary.average_sentiment, 0.0);
        assert_eq!(summary.overall_mood, "neutral");
        assert_eq!(summary.breakdown.positive_percentage, 0.0);
        assert_eq!(summary.breakdown.negative_percentage, 0.0);
        assert_eq!(summary.breakdown.neutral_percentage, 0.0);
        assert!(summary.emotional_keywords.is_empty());
        assert_eq!(summary.recommendation, NO_RECOMMENDATION);
    }

    #[test]
    fn test_single_metric_no_sleep_no_insights_scenario() {
        let dashboard = ComposeService::compose(&HealthSnapshot {
            metrics: vec![metric("2024-01-01", 5000, 70.0)],
            ..Default::default()
        });

        assert_eq!(
            dashboard.daily_views,
            vec![DailyView {
                date: "2024-01-01".to_string(),
                steps: 5000,
                heart_rate: 70.0,
                sleep_quality_percent: 0.0,
                sleep_duration_hours: 0.0,
            }]
        );
        assert_eq!(dashboard.metrics_summary.steps, 5000);
        assert!(dashboard.recommendations.is_empty());
    }

    #[test]
    fn test_metrics_summary_uses_latest_entry() {
        let dashboard = ComposeService::compose(&HealthSnapshot {
            metrics: vec![metric("2024-01-01", 1000, 60.0), metric("2024-01-02", 9000, 75.0)],
            ..Default::default()
        });

        assert_eq!(dashboard.metrics_summary.steps, 9000);
        assert_eq!(dashboard.metrics_summary.heart_rate, 75.0);
        assert_eq!(dashboard.metrics_summary.steps_trend, None);
    }

    #[test]
    fn test_recommendation_panel_has_three_entries_when_insights_present() {
        let insights = Insights {
            fitness_insights: FitnessInsights {
                steps_prediction: TrendPrediction {
                    trend: Some(Trend::Increasing),
                    next_prediction: Some(NextPrediction::Number(5500.0)),
                    recommendation: Some("Maintain current activity level.".to_string()),
                },
                heart_rate_prediction: TrendPrediction {
                    trend: Some(Trend::Stable),
                    next_prediction: Some(NextPrediction::Number(68.0)),
                    recommendation: Some("Keep up current practices.".to_string()),
                },
                hrv_prediction: TrendPrediction::default(),
            },
            sleep_insights: SleepInsights {
                average_duration: Some(7.0),
                average_quality: Some(80.0),
                recommendation: Some("Establish a consistent bedtime routine.".to_string()),
            },
            ..Default::default()
        };

        let dashboard = ComposeService::compose(&HealthSnapshot {
            insights: Some(insights),
            ..Default::default()
        });

        let titles: Vec<_> = dashboard
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Fitness Insights", "Heart Rate Monitoring", "Sleep Optimization"]
        );
        assert_eq!(dashboard.recommendations[0].trend, Some(Trend::Increasing));
        assert_eq!(dashboard.recommendations[2].trend, None);
    }

    #[test]
    fn test_sentiment_fields_fall_back_individually() {
        let dashboard = ComposeService::compose(&HealthSnapshot {
            insights: Some(Insights {
                journal_sentiments: JournalSentiments {
                    average_sentiment: 0.42,
                    overall_mood: None,
                    recommendation: None,
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(dashboard.sentiment_summary.average_sentiment, 0.42);
        assert_eq!(dashboard.sentiment_summary.overall_mood, "neutral");
        assert_eq!(dashboard.sentiment_summary.recommendation, NO_RECOMMENDATION);
    }

    #[test]
    fn test_journal_order_is_preserved() {
        let journal = vec![
            entry(2, "2024-01-03", "later entry first"),
            entry(1, "2024-01-01", "earlier entry second"),
        ];

        let dashboard = ComposeService::compose(&HealthSnapshot {
            journal: journal.clone(),
            ..Default::default()
        });

        assert_eq!(dashboard.journal, journal);
    }
}

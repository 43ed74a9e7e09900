// src/analytics/predictor.rs
// Percentage-delta projection over the monthly series. The change is taken
// between the latest point and the point two months earlier, with a divisor
// floor of 1 so a zero base never divides by zero (the percentage is
// distorted for small bases; the callers treat it as indicative only).

use crate::fixtures::MonthlyTrendPoint;

/// Minimum history required before a projection is attempted.
pub const MIN_POINTS: usize = 4;

/// The two service lines carried in the monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendCategory {
    Roads,
    Water,
}

impl TrendCategory {
    pub const ALL: [TrendCategory; 2] = [TrendCategory::Roads, TrendCategory::Water];

    pub fn label(self) -> &'static str {
        match self {
            TrendCategory::Roads => "Roads",
            TrendCategory::Water => "Water",
        }
    }

    fn pick(self, point: &MonthlyTrendPoint) -> u64 {
        match self {
            TrendCategory::Roads => point.roads,
            TrendCategory::Water => point.water,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendAlert {
    Critical,
    Warning,
    Positive,
    Neutral,
}

impl TrendAlert {
    pub fn label(self) -> &'static str {
        match self {
            TrendAlert::Critical => "Critical",
            TrendAlert::Warning => "Warning",
            TrendAlert::Positive => "Positive",
            TrendAlert::Neutral => "Neutral",
        }
    }
}

/// Outcome of a projection attempt for one category.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendForecast {
    Projection {
        category: TrendCategory,
        alert: TrendAlert,
        percent_change: f64,
        latest: u64,
        message: String,
    },
    InsufficientData {
        category: TrendCategory,
        message: String,
    },
}

impl TrendForecast {
    pub fn category(&self) -> TrendCategory {
        match self {
            TrendForecast::Projection { category, .. } => *category,
            TrendForecast::InsufficientData { category, .. } => *category,
        }
    }

    pub fn alert(&self) -> Option<TrendAlert> {
        match self {
            TrendForecast::Projection { alert, .. } => Some(*alert),
            TrendForecast::InsufficientData { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TrendForecast::Projection { message, .. } => message,
            TrendForecast::InsufficientData { message, .. } => message,
        }
    }
}

/// Projects the trend for one category from the monthly series.
pub fn forecast(category: TrendCategory, monthly: &[MonthlyTrendPoint]) -> TrendForecast {
    let series: Vec<u64> = monthly.iter().map(|point| category.pick(point)).collect();
    forecast_series(category, &series)
}

/// Projects trends for every supported category.
pub fn forecast_all(monthly: &[MonthlyTrendPoint]) -> Vec<TrendForecast> {
    TrendCategory::ALL
        .iter()
        .map(|category| forecast(*category, monthly))
        .collect()
}

/// Core projection over a raw count series.
pub fn forecast_series(category: TrendCategory, series: &[u64]) -> TrendForecast {
    if series.len() < MIN_POINTS {
        return TrendForecast::InsufficientData {
            category,
            message: format!(
                "Not enough {} history to project a trend ({} months needed).",
                category.label(),
                MIN_POINTS
            ),
        };
    }

    let recent = &series[series.len() - MIN_POINTS..];
    let latest = recent[3];
    let two_ago = recent[1];
    let base = two_ago.max(1) as f64;
    let percent_change = (latest as f64 - two_ago as f64) / base * 100.0;

    let alert = if percent_change > 15.0 && latest > 30 {
        TrendAlert::Critical
    } else if percent_change > 5.0 {
        TrendAlert::Warning
    } else if percent_change < -5.0 {
        TrendAlert::Positive
    } else {
        TrendAlert::Neutral
    };

    let label = category.label();
    let message = match alert {
        TrendAlert::Critical => format!(
            "{} complaints are surging ({:+.1}% vs two months ago, {} last month). Expect continued growth; crews should be reassigned now.",
            label, percent_change, latest
        ),
        TrendAlert::Warning => format!(
            "{} complaints are trending up ({:+.1}% vs two months ago). Worth watching over the coming weeks.",
            label, percent_change
        ),
        TrendAlert::Positive => format!(
            "{} complaints are declining ({:+.1}% vs two months ago). Recent interventions appear to be working.",
            label, percent_change
        ),
        TrendAlert::Neutral => format!(
            "{} complaints are holding steady ({:+.1}% vs two months ago). No action needed.",
            label, percent_change
        ),
    };

    TrendForecast::Projection {
        category,
        alert,
        percent_change,
        latest,
        message,
    }
}

use civic_pulse::analytics::classifier::{classify, classify_sentiment};
use civic_pulse::analytics::predictor::{forecast, TrendAlert, TrendCategory, TrendForecast};
use civic_pulse::analytics::report::compose_report;
use civic_pulse::fixtures::{
    Category, MonthlyTrendPoint, Priority, Sentiment, COMPLAINTS, DISTRICTS, SNAPSHOT,
};

#[test]
fn test_damaged_road_text_classifies_as_urgent_negative_roads() {
    let result = classify("The road is damaged and dangerous");
    assert_eq!(result.category, Category::Roads);
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.priority, Priority::Urgent);
}

#[test]
fn test_sentiment_follows_keyword_majority() {
    assert_eq!(
        classify_sentiment("The overflow smells terrible and the drain is still broken"),
        Sentiment::Negative
    );
    assert_eq!(
        classify_sentiment("Thank you for the quick and clean repair work"),
        Sentiment::Positive
    );
    // One keyword on each side cancels out.
    assert_eq!(
        classify_sentiment("The broken light was replaced, good job"),
        Sentiment::Neutral
    );
}

#[test]
fn test_roads_fixture_series_projects_critical() {
    // The roads series ends 20, 22, 28, 35: up 59% on a base of 22 with the
    // latest month above the volume gate.
    let forecast = forecast(TrendCategory::Roads, &SNAPSHOT.monthly);
    match forecast {
        TrendForecast::Projection {
            alert,
            percent_change,
            latest,
            ..
        } => {
            assert_eq!(alert, TrendAlert::Critical);
            assert!((percent_change - 59.09).abs() < 0.01);
            assert_eq!(latest, 35);
        }
        TrendForecast::InsufficientData { .. } => panic!("twelve months is enough history"),
    }
}

#[test]
fn test_water_fixture_series_projects_decline() {
    let forecast = forecast(TrendCategory::Water, &SNAPSHOT.monthly);
    assert_eq!(forecast.alert(), Some(TrendAlert::Positive));
    assert!(forecast.message().contains("declining"));
}

#[test]
fn test_short_history_is_insufficient() {
    let monthly: Vec<MonthlyTrendPoint> = SNAPSHOT.monthly.iter().take(3).cloned().collect();
    let forecast = forecast(TrendCategory::Roads, &monthly);
    assert!(matches!(forecast, TrendForecast::InsufficientData { .. }));
}

#[test]
fn test_weekly_brief_composes_from_fixture_data() {
    let brief = compose_report(&COMPLAINTS, &SNAPSHOT.monthly);

    assert!(brief.contains("12 complaints"));
    // Roads and Garbage are tied at three complaints each; Roads wins by
    // enumeration order.
    assert!(brief.contains("Roads issues lead"));
    // Eight negative, two positive, two neutral: mean -0.50.
    assert!(brief.contains("frustrated"));
    assert!(brief.contains("-0.50"));
    assert!(brief.contains("3 item(s) are flagged urgent"));
    // Both trend lines are interpolated.
    assert!(brief.contains("Roads complaints"));
    assert!(brief.contains("Water complaints"));
}

#[test]
fn test_fixture_aggregates_are_internally_consistent() {
    let statuses = &SNAPSHOT.statuses;
    assert_eq!(
        statuses.pending + statuses.in_progress + statuses.resolved,
        SNAPSHOT.total
    );

    let sentiments = &SNAPSHOT.sentiments;
    assert_eq!(
        sentiments.positive + sentiments.negative + sentiments.neutral,
        SNAPSHOT.total
    );

    let category_sum: u64 = SNAPSHOT.categories.iter().map(|(_, count)| count).sum();
    assert_eq!(category_sum, SNAPSHOT.total);

    let priority_sum: u64 = SNAPSHOT.priorities.iter().map(|(_, count)| count).sum();
    assert_eq!(priority_sum, SNAPSHOT.total);

    let district_sum: u64 = DISTRICTS.iter().map(|district| district.complaints).sum();
    assert_eq!(district_sum, SNAPSHOT.total);

    assert_eq!(SNAPSHOT.monthly.len(), 12);
}

#[test]
fn test_sample_complaints_stay_a_sample() {
    // The complaint list is a recent sample, not the source of the
    // city-wide aggregates; the counts are expected to differ.
    assert!((COMPLAINTS.len() as u64) < SNAPSHOT.total);
    assert!(COMPLAINTS.iter().all(|complaint| complaint.id >= 100));
}

// src/analytics/classifier.rs
// Keyword-substring heuristics over complaint text. Intentionally naive:
// a single keyword occurrence anywhere in the lowercased text is a match,
// with no negation handling or phrase weighting.

use crate::fixtures::{Category, Priority, Sentiment};

const POSITIVE_KEYWORDS: [&str; 10] = [
    "thank",
    "great",
    "good",
    "excellent",
    "happy",
    "appreciate",
    "improved",
    "clean",
    "quick",
    "resolved",
];

const NEGATIVE_KEYWORDS: [&str; 16] = [
    "broken",
    "damaged",
    "danger",
    "terrible",
    "worst",
    "dirty",
    "overflow",
    "leak",
    "no water",
    "no power",
    "smell",
    "unsafe",
    "accident",
    "burst",
    "dark",
    "delay",
];

const URGENT_KEYWORDS: [&str; 8] = [
    "urgent",
    "emergency",
    "dangerous",
    "accident",
    "collapse",
    "electrocut",
    "live wire",
    "fire",
];

const HIGH_KEYWORDS: [&str; 7] = [
    "broken",
    "overflow",
    "no water",
    "no power",
    "burst",
    "blocked",
    "leak",
];

const MEDIUM_KEYWORDS: [&str; 5] = [
    "repair",
    "maintenance",
    "delay",
    "irregular",
    "request",
];

fn category_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Roads => &[
            "road",
            "pothole",
            "footpath",
            "highway",
            "speed breaker",
            "flyover",
            "traffic",
        ],
        Category::Water => &["water", "pipeline", "tap", "tanker", "borewell"],
        Category::Electricity => &[
            "power",
            "electric",
            "transformer",
            "voltage",
            "wire",
            "current",
        ],
        Category::Garbage => &["garbage", "trash", "waste", "dustbin", "litter", "dump"],
        Category::Streetlights => &[
            "streetlight",
            "street light",
            "lamp post",
            "light pole",
            "bulb",
        ],
        Category::Drainage => &["drain", "sewer", "sewage", "manhole", "waterlog", "flood"],
        Category::Other => &[],
    }
}

/// Combined result of the three heuristics for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub category: Category,
    pub priority: Priority,
}

/// Runs all three heuristics over the same text.
pub fn classify(text: &str) -> Classification {
    Classification {
        sentiment: classify_sentiment(text),
        category: classify_category(text),
        priority: classify_priority(text),
    }
}

fn match_count(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// Positive or negative by whichever list has strictly more keyword hits;
/// a tie (including zero hits on both sides) reads as neutral.
pub fn classify_sentiment(text: &str) -> Sentiment {
    let text = text.to_lowercase();
    let positive = match_count(&text, &POSITIVE_KEYWORDS);
    let negative = match_count(&text, &NEGATIVE_KEYWORDS);
    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// First category in [`Category::ALL`] order with any keyword hit wins;
/// falls through to the catch-all when nothing matches.
pub fn classify_category(text: &str) -> Category {
    let text = text.to_lowercase();
    for category in Category::ALL {
        if category_keywords(category)
            .iter()
            .any(|kw| text.contains(kw))
        {
            return category;
        }
    }
    Category::Other
}

/// Tiered check: urgent keywords first, then high, then medium. Anything
/// without a tier keyword is low priority.
pub fn classify_priority(text: &str) -> Priority {
    let text = text.to_lowercase();
    if URGENT_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Priority::Urgent
    } else if HIGH_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Priority::High
    } else if MEDIUM_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_negative_majority() {
        let sentiment = classify_sentiment("The pipe is broken and the smell is terrible");
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_positive_majority() {
        let sentiment = classify_sentiment("Thank you, the park is clean and the work was quick");
        assert_eq!(sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_tie_is_neutral() {
        // One hit each side: "broken" vs "good".
        assert_eq!(
            classify_sentiment("The broken bench was replaced with a good one"),
            Sentiment::Neutral
        );
        assert_eq!(classify_sentiment("Please add a bench"), Sentiment::Neutral);
    }

    #[test]
    fn test_category_first_match_order() {
        // "road" and "drain" both present; Roads is checked first.
        assert_eq!(
            classify_category("The drain next to the road is open"),
            Category::Roads
        );
    }

    #[test]
    fn test_category_fallback_to_other() {
        assert_eq!(
            classify_category("The municipal office opens late"),
            Category::Other
        );
    }

    #[test]
    fn test_category_streetlights_reachable() {
        assert_eq!(
            classify_category("The streetlight bulb has fused"),
            Category::Streetlights
        );
    }

    #[test]
    fn test_priority_urgent_wins_over_lower_tiers() {
        // "broken" (high) and "repair" (medium) present, but "emergency" decides.
        assert_eq!(
            classify_priority("Emergency: the broken pole needs repair"),
            Priority::Urgent
        );
    }

    #[test]
    fn test_priority_default_low() {
        assert_eq!(classify_priority("Please plant more trees"), Priority::Low);
    }

    #[test]
    fn test_damaged_road_scenario() {
        let result = classify("The road is damaged and dangerous");
        assert_eq!(result.category, Category::Roads);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.priority, Priority::Urgent);
    }
}

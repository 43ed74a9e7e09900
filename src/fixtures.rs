// src/fixtures.rs
// Static mock records standing in for the live municipal reporting feed.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Roads,
    Water,
    Electricity,
    Garbage,
    Streetlights,
    Drainage,
    Other,
}

impl Category {
    /// Fixed enumeration order. Classifier check order and report
    /// tie-breaking both follow this.
    pub const ALL: [Category; 7] = [
        Category::Roads,
        Category::Water,
        Category::Electricity,
        Category::Garbage,
        Category::Streetlights,
        Category::Drainage,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Roads => "Roads",
            Category::Water => "Water",
            Category::Electricity => "Electricity",
            Category::Garbage => "Garbage",
            Category::Streetlights => "Streetlights",
            Category::Drainage => "Drainage",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Score used by the report's unweighted mean: +1 / -1 / 0.
    pub fn score(self) -> i32 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Negative => -1,
            Sentiment::Neutral => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }
}

/// A single citizen complaint as it arrives from the reporting feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub submitted_at: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub status: Status,
    pub submitted_by: String,
}

/// One month of the reported trend series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    pub month: &'static str,
    pub total: u64,
    pub resolved: u64,
    pub roads: u64,
    pub water: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

/// City-wide aggregates as published by the reporting portal.
///
/// These totals are NOT derived from [`COMPLAINTS`]; that list is a recent
/// sample while the snapshot covers the full year, so the two can disagree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total: u64,
    pub statuses: StatusCounts,
    pub sentiments: SentimentCounts,
    pub categories: Vec<(Category, u64)>,
    pub priorities: Vec<(Priority, u64)>,
    pub monthly: Vec<MonthlyTrendPoint>,
}

/// A city ward with its complaint load and average citizen mood.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub complaints: u64,
    pub avg_sentiment: f64,
}

lazy_static::lazy_static! {
    pub static ref COMPLAINTS: Vec<Complaint> = build_complaints();
    pub static ref SNAPSHOT: AnalyticsSnapshot = build_snapshot();
    pub static ref DISTRICTS: Vec<District> = build_districts();
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, minute, 0).unwrap()
}

fn build_complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: 101,
            title: "Large pothole near metro pillar".to_string(),
            description: "The road opposite the metro station is damaged and dangerous for two-wheelers, especially at night.".to_string(),
            category: Category::Roads,
            district: "Madhapur".to_string(),
            latitude: 17.4483,
            longitude: 78.3915,
            submitted_at: at(7, 14, 9, 30),
            sentiment: Sentiment::Negative,
            priority: Priority::Urgent,
            status: Status::Pending,
            submitted_by: "Ravi Kumar".to_string(),
        },
        Complaint {
            id: 102,
            title: "No water supply for three days".to_string(),
            description: "Our street has had no water supply since Monday. The tanker never arrived despite repeated calls.".to_string(),
            category: Category::Water,
            district: "Charminar".to_string(),
            latitude: 17.3616,
            longitude: 78.4747,
            submitted_at: at(7, 15, 7, 45),
            sentiment: Sentiment::Negative,
            priority: Priority::High,
            status: Status::InProgress,
            submitted_by: "Fatima Begum".to_string(),
        },
        Complaint {
            id: 103,
            title: "Streetlight not working".to_string(),
            description: "The streetlight outside house 12-4 has a broken bulb and the lane is completely dark.".to_string(),
            category: Category::Streetlights,
            district: "Kukatpally".to_string(),
            latitude: 17.4849,
            longitude: 78.4138,
            submitted_at: at(7, 16, 20, 10),
            sentiment: Sentiment::Negative,
            priority: Priority::Medium,
            status: Status::Pending,
            submitted_by: "Srinivas Rao".to_string(),
        },
        Complaint {
            id: 104,
            title: "Garbage pile at market entrance".to_string(),
            description: "Waste has been dumped at the vegetable market entrance for a week. The smell is terrible.".to_string(),
            category: Category::Garbage,
            district: "Secunderabad".to_string(),
            latitude: 17.4399,
            longitude: 78.4983,
            submitted_at: at(7, 18, 8, 0),
            sentiment: Sentiment::Negative,
            priority: Priority::High,
            status: Status::InProgress,
            submitted_by: "Anjali Mehta".to_string(),
        },
        Complaint {
            id: 105,
            title: "Frequent power cuts in the evening".to_string(),
            description: "Power goes out every evening between 7 and 9. The transformer near the park keeps tripping.".to_string(),
            category: Category::Electricity,
            district: "Uppal".to_string(),
            latitude: 17.4058,
            longitude: 78.5592,
            submitted_at: at(7, 19, 21, 15),
            sentiment: Sentiment::Negative,
            priority: Priority::High,
            status: Status::Pending,
            submitted_by: "Mohammed Irfan".to_string(),
        },
        Complaint {
            id: 106,
            title: "Drain overflowing after rain".to_string(),
            description: "The storm drain on 4th street overflows onto the road every time it rains. Sewage mixes with rainwater.".to_string(),
            category: Category::Drainage,
            district: "Charminar".to_string(),
            latitude: 17.3625,
            longitude: 78.4731,
            submitted_at: at(7, 21, 16, 40),
            sentiment: Sentiment::Negative,
            priority: Priority::Urgent,
            status: Status::InProgress,
            submitted_by: "Lakshmi Devi".to_string(),
        },
        Complaint {
            id: 107,
            title: "Thanks for fixing the footpath".to_string(),
            description: "The broken footpath near the school was repaired quickly. Great work by the ward team.".to_string(),
            category: Category::Roads,
            district: "Gachibowli".to_string(),
            latitude: 17.4401,
            longitude: 78.3489,
            submitted_at: at(7, 22, 11, 5),
            sentiment: Sentiment::Positive,
            priority: Priority::Low,
            status: Status::Resolved,
            submitted_by: "Deepak Sharma".to_string(),
        },
        Complaint {
            id: 108,
            title: "Water leak near bus stop".to_string(),
            description: "A pipeline has burst near the bus stop and clean water has been leaking for two days.".to_string(),
            category: Category::Water,
            district: "Miyapur".to_string(),
            latitude: 17.4924,
            longitude: 78.3818,
            submitted_at: at(7, 24, 6, 55),
            sentiment: Sentiment::Negative,
            priority: Priority::High,
            status: Status::Pending,
            submitted_by: "Kavitha Reddy".to_string(),
        },
        Complaint {
            id: 109,
            title: "Request for speed breaker".to_string(),
            description: "Vehicles speed past the primary school gate. A speed breaker would make the crossing safer.".to_string(),
            category: Category::Roads,
            district: "Kukatpally".to_string(),
            latitude: 17.4855,
            longitude: 78.4102,
            submitted_at: at(7, 26, 13, 20),
            sentiment: Sentiment::Neutral,
            priority: Priority::Medium,
            status: Status::Pending,
            submitted_by: "George Thomas".to_string(),
        },
        Complaint {
            id: 110,
            title: "Street sweeping has improved".to_string(),
            description: "The lanes around the temple are noticeably clean this month. Happy with the morning sweeping schedule.".to_string(),
            category: Category::Garbage,
            district: "Secunderabad".to_string(),
            latitude: 17.4412,
            longitude: 78.5010,
            submitted_at: at(7, 27, 9, 0),
            sentiment: Sentiment::Positive,
            priority: Priority::Low,
            status: Status::Resolved,
            submitted_by: "Pooja Agarwal".to_string(),
        },
        Complaint {
            id: 111,
            title: "Exposed electric wire near playground".to_string(),
            description: "A live wire is hanging at head height near the children's playground. This is an emergency, someone could be electrocuted.".to_string(),
            category: Category::Electricity,
            district: "Madhapur".to_string(),
            latitude: 17.4462,
            longitude: 78.3927,
            submitted_at: at(7, 28, 17, 30),
            sentiment: Sentiment::Negative,
            priority: Priority::Urgent,
            status: Status::Pending,
            submitted_by: "Venkatesh Naidu".to_string(),
        },
        Complaint {
            id: 112,
            title: "Dustbins needed at the park".to_string(),
            description: "The new walking track is nice but there are no dustbins along it. Visitors leave litter on the grass.".to_string(),
            category: Category::Garbage,
            district: "Gachibowli".to_string(),
            latitude: 17.4390,
            longitude: 78.3521,
            submitted_at: at(7, 29, 18, 45),
            sentiment: Sentiment::Neutral,
            priority: Priority::Low,
            status: Status::Pending,
            submitted_by: "Harpreet Kaur".to_string(),
        },
    ]
}

fn build_snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total: 1247,
        statuses: StatusCounts {
            pending: 312,
            in_progress: 489,
            resolved: 446,
        },
        sentiments: SentimentCounts {
            positive: 221,
            negative: 684,
            neutral: 342,
        },
        categories: vec![
            (Category::Roads, 385),
            (Category::Water, 298),
            (Category::Electricity, 187),
            (Category::Garbage, 164),
            (Category::Streetlights, 121),
            (Category::Drainage, 58),
            (Category::Other, 34),
        ],
        priorities: vec![
            (Priority::Urgent, 156),
            (Priority::High, 342),
            (Priority::Medium, 478),
            (Priority::Low, 271),
        ],
        monthly: vec![
            month("Jan", 95, 61, 18, 30),
            month("Feb", 102, 70, 21, 27),
            month("Mar", 88, 59, 19, 31),
            month("Apr", 110, 74, 24, 28),
            month("May", 105, 69, 26, 25),
            month("Jun", 98, 66, 23, 29),
            month("Jul", 115, 77, 27, 26),
            month("Aug", 108, 71, 25, 30),
            month("Sep", 92, 60, 20, 24),
            month("Oct", 101, 64, 22, 26),
            month("Nov", 97, 58, 28, 22),
            month("Dec", 112, 49, 35, 18),
        ],
    }
}

fn month(month: &'static str, total: u64, resolved: u64, roads: u64, water: u64) -> MonthlyTrendPoint {
    MonthlyTrendPoint {
        month,
        total,
        resolved,
        roads,
        water,
    }
}

fn build_districts() -> Vec<District> {
    vec![
        district("Madhapur", 17.4483, 78.3915, 212, -0.42),
        district("Kukatpally", 17.4849, 78.4138, 189, -0.18),
        district("Secunderabad", 17.4399, 78.4983, 154, 0.05),
        district("Charminar", 17.3616, 78.4747, 243, -0.31),
        district("Gachibowli", 17.4401, 78.3489, 98, 0.12),
        district("Uppal", 17.4058, 78.5592, 176, -0.25),
        district("Miyapur", 17.4924, 78.3818, 175, -0.08),
    ]
}

fn district(name: &str, latitude: f64, longitude: f64, complaints: u64, avg_sentiment: f64) -> District {
    District {
        name: name.to_string(),
        latitude,
        longitude,
        complaints,
        avg_sentiment,
    }
}

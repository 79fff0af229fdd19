//! Canned analyst responses.
//!
//! The responder table is an ordered list of (keywords, builder) pairs;
//! the first entry whose keyword matches the lowercased topic wins. The
//! ordering is part of the contract — "peak hour overview" resolves to the
//! overview response because that entry comes first.

use serde_json::json;

use super::types::{AnalysisMetadata, AnalysisResult, Rows, row};

struct Responder {
    keywords: &'static [&'static str],
    build: fn() -> AnalysisResult,
}

const RESPONDERS: &[Responder] = &[
    Responder { keywords: &["overview"], build: overview },
    Responder { keywords: &["peak", "hour"], build: peak_hours },
    Responder { keywords: &["speed", "distribution"], build: speed_distribution },
    Responder { keywords: &["geographic", "location", "zone"], build: geographic },
    Responder { keywords: &["seasonal", "trend", "month"], build: seasonal_trends },
    Responder { keywords: &["volume"], build: volume },
    Responder { keywords: &["congestion"], build: congestion },
];

/// Resolve a topic to an analysis result. Never fails: topics that match
/// no responder get the generic fallback with near-zero confidence.
pub fn resolve(topic: &str) -> AnalysisResult {
    let needle = topic.to_lowercase();
    for responder in RESPONDERS {
        if responder.keywords.iter().any(|kw| needle.contains(kw)) {
            return (responder.build)();
        }
    }
    fallback(topic)
}

fn result(
    request_id: &str,
    sql: &str,
    rows: Rows,
    explanation: &str,
    confidence: f64,
    query_type: &str,
) -> AnalysisResult {
    AnalysisResult {
        request_id: request_id.to_string(),
        sql: sql.to_string(),
        rows,
        explanation: explanation.to_string(),
        metadata: AnalysisMetadata {
            confidence,
            query_type: query_type.to_string(),
        },
    }
}

fn overview() -> AnalysisResult {
    result(
        "req_overview",
        "SELECT COUNT(*) AS total_records, AVG(speed) AS avg_speed, \
         MIN(timestamp) AS start_date, MAX(timestamp) AS end_date FROM traffic_data",
        vec![row([
            ("TOTAL_RECORDS", json!(156_789)),
            ("AVG_SPEED", json!(42.7)),
            ("START_DATE", json!("2024-01-01")),
            ("END_DATE", json!("2024-12-31")),
        ])],
        "Traffic dataset analysis shows 156,789 total records with an average \
         speed of 42.7 mph across the full year.",
        0.9,
        "analytical",
    )
}

fn peak_hours() -> AnalysisResult {
    result(
        "req_peak_hours",
        "SELECT HOUR(timestamp) AS hour, COUNT(*) AS count, AVG(speed) AS avg_speed \
         FROM traffic_data GROUP BY HOUR(timestamp) ORDER BY count DESC",
        vec![
            row([("HOUR", json!(8)), ("COUNT", json!(12_890)), ("AVG_SPEED", json!(28.5))]),
            row([("HOUR", json!(17)), ("COUNT", json!(12_456)), ("AVG_SPEED", json!(31.2))]),
            row([("HOUR", json!(9)), ("COUNT", json!(10_234)), ("AVG_SPEED", json!(35.8))]),
            row([("HOUR", json!(16)), ("COUNT", json!(9_876)), ("AVG_SPEED", json!(33.4))]),
            row([("HOUR", json!(18)), ("COUNT", json!(9_123)), ("AVG_SPEED", json!(36.7))]),
        ],
        "Peak traffic occurs at 8 AM (12,890 readings) and 5 PM (12,456 readings) \
         with significantly reduced speeds during these hours.",
        0.92,
        "analytical",
    )
}

fn speed_distribution() -> AnalysisResult {
    result(
        "req_speed_dist",
        "SELECT speed_range, COUNT(*) AS count FROM \
         (SELECT CASE WHEN speed <= 20 THEN '0-20 mph' WHEN speed <= 40 THEN '21-40 mph' \
         WHEN speed <= 60 THEN '41-60 mph' ELSE '61+ mph' END AS speed_range FROM traffic_data) \
         GROUP BY speed_range",
        vec![
            row([("SPEED_RANGE", json!("0-20 mph")), ("COUNT", json!(25_000))]),
            row([("SPEED_RANGE", json!("21-40 mph")), ("COUNT", json!(45_000))]),
            row([("SPEED_RANGE", json!("41-60 mph")), ("COUNT", json!(55_000))]),
            row([("SPEED_RANGE", json!("61+ mph")), ("COUNT", json!(18_500))]),
        ],
        "Most readings fall in the 41-60 mph band; low-speed readings under \
         20 mph concentrate around the two rush-hour windows.",
        0.88,
        "analytical",
    )
}

fn geographic() -> AnalysisResult {
    result(
        "req_geo",
        "SELECT location, COUNT(*) AS count, AVG(speed) AS avg_speed \
         FROM traffic_data GROUP BY location ORDER BY count DESC LIMIT 5",
        vec![
            row([("LOCATION", json!("Downtown")), ("COUNT", json!(34_200)), ("AVG_SPEED", json!(24.1))]),
            row([("LOCATION", json!("Highway 101")), ("COUNT", json!(29_750)), ("AVG_SPEED", json!(58.3))]),
            row([("LOCATION", json!("Riverside")), ("COUNT", json!(21_430)), ("AVG_SPEED", json!(37.9))]),
            row([("LOCATION", json!("Airport Rd")), ("COUNT", json!(18_020)), ("AVG_SPEED", json!(41.5))]),
            row([("LOCATION", json!("Industrial Park")), ("COUNT", json!(12_340)), ("AVG_SPEED", json!(33.0))]),
        ],
        "Downtown carries the highest reading volume at the lowest average \
         speed; Highway 101 moves the fastest traffic in the monitored set.",
        0.85,
        "analytical",
    )
}

fn seasonal_trends() -> AnalysisResult {
    result(
        "req_seasonal",
        "SELECT MONTHNAME(timestamp) AS month, COUNT(*) AS volume \
         FROM traffic_data GROUP BY MONTH(timestamp) ORDER BY MONTH(timestamp)",
        vec![
            row([("MONTH", json!("Jan")), ("VOLUME", json!(11_200))]),
            row([("MONTH", json!("Mar")), ("VOLUME", json!(12_900))]),
            row([("MONTH", json!("May")), ("VOLUME", json!(14_100))]),
            row([("MONTH", json!("Jul")), ("VOLUME", json!(15_800))]),
            row([("MONTH", json!("Sep")), ("VOLUME", json!(13_600))]),
            row([("MONTH", json!("Nov")), ("VOLUME", json!(12_100))]),
        ],
        "Traffic volume climbs steadily into July and tapers through autumn, \
         a pattern consistent with summer travel demand.",
        0.87,
        "analytical",
    )
}

fn volume() -> AnalysisResult {
    result(
        "req_volume",
        "SELECT SUM(vehicle_count) AS total_volume FROM traffic_data",
        vec![row([("TOTAL_VOLUME", json!(2_450_000))])],
        "Monitored corridors recorded roughly 2.45 million vehicle passages \
         over the analysis window.",
        0.9,
        "analytical",
    )
}

fn congestion() -> AnalysisResult {
    result(
        "req_congestion",
        "SELECT corridor, AVG(congestion_index) AS congestion_index \
         FROM traffic_data GROUP BY corridor ORDER BY congestion_index DESC LIMIT 4",
        vec![
            row([("CORRIDOR", json!("Main St")), ("CONGESTION_INDEX", json!(0.82))]),
            row([("CORRIDOR", json!("5th Ave")), ("CONGESTION_INDEX", json!(0.74))]),
            row([("CORRIDOR", json!("Bridge Loop")), ("CONGESTION_INDEX", json!(0.69))]),
            row([("CORRIDOR", json!("Harbor Way")), ("CONGESTION_INDEX", json!(0.51))]),
        ],
        "Main St shows sustained congestion through both commute windows; the \
         remaining corridors congest only during the evening peak.",
        0.83,
        "analytical",
    )
}

/// Generic response for topics no responder recognizes. Mirrors what the
/// upstream service would return when it cannot analyze a request.
fn fallback(topic: &str) -> AnalysisResult {
    result(
        "req_fallback",
        "SELECT 'no matching analysis' AS result",
        vec![row([("RESULT", json!("General traffic data"))])],
        &format!("Unable to analyze '{topic}' - using fallback demonstration data."),
        0.1,
        "fallback",
    )
}

//! Simulated in-memory data store.
//!
//! Supplies the records behind the rendering tools: user profiles, daily
//! metric series, and a dashboard snapshot. All lookups are pure reads
//! against state seeded at construction; nothing here mutates.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::str::FromStr;

use super::error::DataError;

// ============================================================================
// Records
// ============================================================================

/// A user profile record.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub joined: String,
    pub status: String,
    pub avatar: String,
}

/// The category of metrics a series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Sales,
    Performance,
    Engagement,
}

impl MetricKind {
    /// All supported kinds, in the order they are published.
    pub const ALL: &'static [MetricKind] =
        &[Self::Sales, Self::Performance, Self::Engagement];

    /// The wire-format name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Performance => "performance",
            Self::Engagement => "engagement",
        }
    }

    /// Human-readable title, e.g. for page headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Performance => "Performance",
            Self::Engagement => "Engagement",
        }
    }
}

impl FromStr for MetricKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(Self::Sales),
            "performance" => Ok(Self::Performance),
            "engagement" => Ok(Self::Engagement),
            other => Err(DataError::UnknownMetricKind(other.to_string())),
        }
    }
}

/// One day of metrics, shaped per kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetricsRow {
    Sales {
        date: NaiveDate,
        revenue: i64,
        orders: i64,
        avg_order_value: f64,
    },
    Performance {
        date: NaiveDate,
        response_time_ms: i64,
        requests: i64,
        error_rate: f64,
    },
    Engagement {
        date: NaiveDate,
        active_users: i64,
        page_views: i64,
        avg_session_secs: i64,
    },
}

/// Headline counters shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_sessions: i64,
    pub revenue_today: i64,
    pub orders_today: i64,
}

/// A recent-activity feed entry.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    pub time: String,
}

/// Severity of a system alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A system alert shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

/// Everything the dashboard renderer needs for one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub generated_at: DateTime<Utc>,
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityEntry>,
    pub alerts: Vec<Alert>,
}

// ============================================================================
// Data Store
// ============================================================================

/// The simulated backing store.
///
/// Seeded once at construction and read-only afterwards, so concurrent
/// lookups need no coordination.
pub struct DataStore {
    users: Vec<UserRecord>,
}

impl DataStore {
    /// Create a store seeded with the demo records.
    pub fn new() -> Self {
        Self {
            users: seed_users(),
        }
    }

    /// Fetch a user profile by id.
    pub fn user(&self, user_id: &str) -> Result<&UserRecord, DataError> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| DataError::user_not_found(user_id))
    }

    /// All seeded users.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// A daily metric series of `limit` rows ending yesterday.
    ///
    /// Values are synthesized deterministically from the date, so repeated
    /// reads for the same day agree.
    pub fn metrics(&self, kind: MetricKind, limit: usize) -> Vec<MetricsRow> {
        let base_date = Utc::now().date_naive() - Duration::days(limit as i64);
        (0..limit)
            .map(|i| {
                let date = base_date + Duration::days(i as i64);
                synth_row(kind, date)
            })
            .collect()
    }

    /// A dashboard snapshot for the current moment.
    pub fn dashboard(&self) -> DashboardData {
        let now = Utc::now();
        let seed = day_seed(now.date_naive());

        DashboardData {
            generated_at: now,
            stats: DashboardStats {
                total_users: self.users.len(),
                active_sessions: in_range(seed ^ 0x01, 10, 50),
                revenue_today: in_range(seed ^ 0x02, 5_000, 15_000),
                orders_today: in_range(seed ^ 0x03, 50, 150),
            },
            recent_activity: vec![
                ActivityEntry {
                    user: "Alice Johnson".to_string(),
                    action: "Completed order #1234".to_string(),
                    time: "2 minutes ago".to_string(),
                },
                ActivityEntry {
                    user: "Bob Smith".to_string(),
                    action: "Updated profile".to_string(),
                    time: "15 minutes ago".to_string(),
                },
                ActivityEntry {
                    user: "Carol Davis".to_string(),
                    action: "Viewed dashboard".to_string(),
                    time: "1 hour ago".to_string(),
                },
            ],
            alerts: vec![
                Alert {
                    level: AlertLevel::Info,
                    message: "System running smoothly".to_string(),
                },
                Alert {
                    level: AlertLevel::Warning,
                    message: "Database backup pending".to_string(),
                },
            ],
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Seed Data & Synthesis
// ============================================================================

fn seed_users() -> Vec<UserRecord> {
    let user = |id: &str, name: &str, email: &str, role: &str, joined: &str, img: u8| UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        joined: joined.to_string(),
        status: "active".to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={}", img),
    };

    vec![
        user(
            "user_001",
            "Alice Johnson",
            "alice@example.com",
            "Product Manager",
            "2023-01-15",
            1,
        ),
        user(
            "user_002",
            "Bob Smith",
            "bob@example.com",
            "Software Engineer",
            "2022-06-20",
            2,
        ),
        user(
            "user_003",
            "Carol Davis",
            "carol@example.com",
            "UX Designer",
            "2023-03-10",
            3,
        ),
    ]
}

/// Synthesize one metrics row for the given date.
fn synth_row(kind: MetricKind, date: NaiveDate) -> MetricsRow {
    let seed = day_seed(date);
    match kind {
        MetricKind::Sales => MetricsRow::Sales {
            date,
            revenue: in_range(seed ^ 0x10, 5_000, 25_000),
            orders: in_range(seed ^ 0x11, 50, 200),
            avg_order_value: in_range(seed ^ 0x12, 8_000, 15_000) as f64 / 100.0,
        },
        MetricKind::Performance => MetricsRow::Performance {
            date,
            response_time_ms: in_range(seed ^ 0x20, 50, 500),
            requests: in_range(seed ^ 0x21, 10_000, 50_000),
            error_rate: in_range(seed ^ 0x22, 10, 250) as f64 / 100.0,
        },
        MetricKind::Engagement => MetricsRow::Engagement {
            date,
            active_users: in_range(seed ^ 0x30, 1_000, 5_000),
            page_views: in_range(seed ^ 0x31, 50_000, 200_000),
            avg_session_secs: in_range(seed ^ 0x32, 120, 600),
        },
    }
}

fn day_seed(date: NaiveDate) -> u64 {
    // num_days_from_ce is stable for a given date, which keeps the
    // synthesized series repeatable within a day.
    chrono::Datelike::num_days_from_ce(&date) as u64
}

/// Map a seed into `lo..=hi` via a splitmix64-style mix.
fn in_range(seed: u64, lo: i64, hi: i64) -> i64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    lo + (z % (hi - lo + 1) as u64) as i64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_lookup() {
        let store = DataStore::new();
        let user = store.user("user_001").unwrap();
        assert_eq!(user.id, "user_001");
        assert_eq!(user.name, "Alice Johnson");
    }

    #[test]
    fn test_user_lookup_miss() {
        let store = DataStore::new();
        let err = store.user("user_999").unwrap_err();
        assert!(err.to_string().contains("user_999"));
    }

    #[test]
    fn test_seed_user_count() {
        let store = DataStore::new();
        assert_eq!(store.users().len(), 3);
    }

    #[test]
    fn test_metric_kind_roundtrip() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), *kind);
        }
        assert!("bogus".parse::<MetricKind>().is_err());
    }

    #[test]
    fn test_metrics_row_count_and_shape() {
        let store = DataStore::new();
        let rows = store.metrics(MetricKind::Sales, 7);
        assert_eq!(rows.len(), 7);
        for row in &rows {
            match row {
                MetricsRow::Sales { revenue, orders, .. } => {
                    assert!((5_000..=25_000).contains(revenue));
                    assert!((50..=200).contains(orders));
                }
                _ => panic!("expected sales rows"),
            }
        }
    }

    #[test]
    fn test_metrics_are_repeatable() {
        let store = DataStore::new();
        let a = store.metrics(MetricKind::Performance, 5);
        let b = store.metrics(MetricKind::Performance, 5);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_dashboard_snapshot() {
        let store = DataStore::new();
        let data = store.dashboard();
        assert_eq!(data.stats.total_users, 3);
        assert!((10..=50).contains(&data.stats.active_sessions));
        assert_eq!(data.recent_activity.len(), 3);
        assert_eq!(data.alerts.len(), 2);
    }
}

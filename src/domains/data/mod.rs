//! Data domain - the simulated backing store.
//!
//! This domain is the "data provider" side of the tools: pure lookups over
//! records seeded at startup. Handlers read from here and never write.

mod error;
mod store;

pub use error::DataError;
pub use store::{
    ActivityEntry, Alert, AlertLevel, DashboardData, DashboardStats, DataStore, MetricKind,
    MetricsRow, UserRecord,
};

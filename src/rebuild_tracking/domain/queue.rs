use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artifact waiting in the build queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueuedBuild {
    pub id: i64,
    pub artifact: String,
    /// Priority entries are picked before the rest of the queue.
    pub priority: bool,
}

/// A build or discovery currently executing in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunningBuild {
    pub description: String,
    pub status: String,
    pub start_time: Option<DateTime<Utc>>,
}

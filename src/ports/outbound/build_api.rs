use crate::rebuild_tracking::domain::{
    Build, BuildListItem, BuildState, BuildSummary, BuildTool, Page, PageRequest,
};
use crate::shared::Result;
use async_trait::async_trait;

/// Filters of the build history list. `None` filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildHistoryQuery {
    pub page: PageRequest,
    pub gav: Option<String>,
    pub label: Option<String>,
    pub label_value: Option<String>,
    pub state: Option<BuildState>,
    pub tool: Option<BuildTool>,
}

/// BuildApi port for the build history endpoints
///
/// Implementations must be `Send + Sync` so views can hold them across awaits.
#[async_trait]
pub trait BuildApi: Send + Sync {
    /// `GET /api/builds/history`
    async fn list_builds(&self, query: &BuildHistoryQuery) -> Result<Page<BuildListItem>>;

    /// `GET /api/builds/history/{id}`
    async fn get_build(&self, id: i64) -> Result<Build>;

    /// `GET /api/builds/history/discovery-logs/{id}`, returned as plain text
    async fn discovery_logs(&self, build_id: i64) -> Result<String>;

    /// `GET /api/builds/attempts/logs/{id}`, returned as plain text
    async fn attempt_logs(&self, attempt_id: i64) -> Result<String>;

    /// `GET /api/builds/status`, optionally restricted to a label
    async fn build_summary(&self, label: Option<&str>) -> Result<BuildSummary>;
}

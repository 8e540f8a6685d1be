use super::http_client::{HttpConsoleClient, Query};
use crate::ports::outbound::{BuildApi, BuildHistoryQuery, QueueApi};
use crate::rebuild_tracking::domain::{
    Build, BuildListItem, BuildSummary, Page, PageRequest, QueuedBuild, RunningBuild,
};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Method;

fn history_query(query: &BuildHistoryQuery) -> Query {
    Query::new()
        .optional("gav", query.gav.as_deref())
        .optional("label", query.label.as_deref())
        .optional("labelValue", query.label_value.as_deref())
        .page(query.page)
        .optional("state", query.state.map(|s| s.as_query()))
        .optional("tool", query.tool.map(|t| t.as_query()))
}

fn build_path(id: i64) -> String {
    format!("/api/builds/history/{}", id)
}

#[async_trait]
impl BuildApi for HttpConsoleClient {
    async fn list_builds(&self, query: &BuildHistoryQuery) -> Result<Page<BuildListItem>> {
        self.get_json("/api/builds/history", history_query(query))
            .await
    }

    async fn get_build(&self, id: i64) -> Result<Build> {
        self.get_json(&build_path(id), Query::new()).await
    }

    async fn discovery_logs(&self, build_id: i64) -> Result<String> {
        let path = format!("/api/builds/history/discovery-logs/{}", build_id);
        self.get_text(&path).await
    }

    async fn attempt_logs(&self, attempt_id: i64) -> Result<String> {
        let path = format!("/api/builds/attempts/logs/{}", attempt_id);
        self.get_text(&path).await
    }

    async fn build_summary(&self, label: Option<&str>) -> Result<BuildSummary> {
        self.get_json("/api/builds/status", Query::new().optional("label", label))
            .await
    }
}

#[async_trait]
impl QueueApi for HttpConsoleClient {
    async fn queue_build(&self, build_name: &str) -> Result<()> {
        self.send_text(Method::POST, "/api/builds/queue", build_name)
            .await
    }

    async fn queue_artifact(&self, gav: &str) -> Result<()> {
        self.send_text(Method::POST, "/api/builds/queue/add", gav)
            .await
    }

    async fn list_queue(&self, page: PageRequest) -> Result<Page<QueuedBuild>> {
        self.get_json("/api/builds/queue", Query::new().page(page))
            .await
    }

    async fn running_builds(&self) -> Result<Vec<RunningBuild>> {
        self.get_json("/api/builds/running", Query::new()).await
    }
}

use super::http_client::{segment, HttpConsoleClient, Query};
use crate::ports::outbound::{ArtifactApi, ArtifactHistoryQuery, LabelApi};
use crate::rebuild_tracking::domain::{
    Artifact, ArtifactLabelName, ArtifactListItem, ArtifactSummary, EditResult,
    ModifyScmRepoCommand, Page,
};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Method;

fn history_query(query: &ArtifactHistoryQuery) -> Query {
    Query::new()
        .optional("gav", query.gav.as_deref())
        .page(query.page)
        .optional("state", query.state.map(|s| s.as_query()))
}

#[async_trait]
impl ArtifactApi for HttpConsoleClient {
    async fn list_artifacts(&self, query: &ArtifactHistoryQuery) -> Result<Page<ArtifactListItem>> {
        self.get_json("/api/artifacts/history", history_query(query))
            .await
    }

    async fn get_artifact(&self, name: &str) -> Result<Artifact> {
        let path = format!("/api/artifacts/history/{}", segment(name));
        self.get_json(&path, Query::new()).await
    }

    async fn artifact_summary(&self, label: Option<&str>) -> Result<ArtifactSummary> {
        self.get_json(
            "/api/artifacts/summary",
            Query::new().optional("label", label),
        )
        .await
    }

    async fn scm_edit(&self, gav: &str) -> Result<ModifyScmRepoCommand> {
        self.get_json("/api/artifacts/edit", Query::new().param("gav", gav))
            .await
    }

    async fn submit_scm_edit(&self, command: &ModifyScmRepoCommand) -> Result<EditResult> {
        self.post_json("/api/artifacts/edit", command).await
    }

    async fn rebuild_artifact(&self, gav: &str) -> Result<()> {
        self.send_text(Method::POST, "/api/artifacts/edit/rebuild", gav)
            .await
    }
}

#[async_trait]
impl LabelApi for HttpConsoleClient {
    async fn labels(&self) -> Result<Vec<ArtifactLabelName>> {
        self.get_json("/api/artifact-labels", Query::new()).await
    }

    async fn label_values(&self, name: &str, search: Option<&str>) -> Result<Vec<String>> {
        let query = Query::new().param("name", name).optional("search", search);
        self.get_json("/api/artifact-labels/values", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rebuild_tracking::domain::{ArtifactState, PageRequest};

    #[test]
    fn test_artifact_history_query() {
        let query = ArtifactHistoryQuery {
            page: PageRequest::new(1, 20),
            gav: Some("io.netty:netty-codec".to_string()),
            state: Some(ArtifactState::Missing),
        };
        assert_eq!(
            history_query(&query).to_query_string(),
            "?gav=io.netty%3Anetty-codec&page=1&perPage=20&state=missing"
        );
    }
}

use crate::rebuild_tracking::domain::{
    Artifact, ArtifactListItem, ArtifactState, ArtifactSummary, EditResult, ModifyScmRepoCommand,
    Page, PageRequest,
};
use crate::shared::Result;
use async_trait::async_trait;

/// Filters of the artifact history list. `None` filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactHistoryQuery {
    pub page: PageRequest,
    /// Partial GAV; the backend matches `group`, `group:artifact` or a full GAV.
    pub gav: Option<String>,
    pub state: Option<ArtifactState>,
}

/// ArtifactApi port for the artifact history and SCM edit endpoints
#[async_trait]
pub trait ArtifactApi: Send + Sync {
    /// `GET /api/artifacts/history`
    async fn list_artifacts(&self, query: &ArtifactHistoryQuery) -> Result<Page<ArtifactListItem>>;

    /// `GET /api/artifacts/history/{name}`
    async fn get_artifact(&self, name: &str) -> Result<Artifact>;

    /// `GET /api/artifacts/summary`, optionally restricted to a label
    async fn artifact_summary(&self, label: Option<&str>) -> Result<ArtifactSummary>;

    /// `GET /api/artifacts/edit?gav=`
    async fn scm_edit(&self, gav: &str) -> Result<ModifyScmRepoCommand>;

    /// `POST /api/artifacts/edit`
    async fn submit_scm_edit(&self, command: &ModifyScmRepoCommand) -> Result<EditResult>;

    /// `POST /api/artifacts/edit/rebuild` with the GAV as text body
    async fn rebuild_artifact(&self, gav: &str) -> Result<()>;
}

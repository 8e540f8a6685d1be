use async_trait::async_trait;
use rebuild_console::ports::outbound::{
    AdminAction, ArtifactHistoryQuery, BuildHistoryQuery, BuildInfoEditApi, DependencySetApi,
    DeploymentApi, GithubBuildApi, ImageApi, LabelApi,
};
use rebuild_console::prelude::*;
use rebuild_console::rebuild_tracking::domain::{
    Artifact, ArtifactLabelName, ArtifactListItem, ArtifactSummary, Build, BuildEditInfo,
    BuildListItem, BuildSummary, Deployment, DependencySet, EditResult, GithubBuild, Image,
    ModifyScmRepoCommand, Page, PageRequest, QueuedBuild, RunningBuild,
};
use rebuild_console::shared::error::ApiError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockState {
    calls: Vec<String>,
    failing: HashSet<&'static str>,
    rejected_gavs: HashMap<String, String>,
    builds: Vec<BuildListItem>,
    build_count: u64,
    build: Option<Build>,
    artifacts: Vec<ArtifactListItem>,
    artifact: Option<Artifact>,
    scm_edit: Option<ModifyScmRepoCommand>,
    pr_url: Option<String>,
    dependency_set: Option<DependencySet>,
}

/// Mock rebuild service that records every call it receives.
///
/// Clones share their state, so a test can keep one handle while a view owns
/// another.
#[derive(Default, Clone)]
pub struct MockConsoleApi {
    state: Arc<Mutex<MockState>>,
}

impl MockConsoleApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builds(self, builds: Vec<BuildListItem>, count: u64) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.builds = builds;
            state.build_count = count;
        }
        self
    }

    pub fn with_build(self, build: Build) -> Self {
        self.state.lock().unwrap().build = Some(build);
        self
    }

    pub fn with_artifacts(self, artifacts: Vec<ArtifactListItem>) -> Self {
        self.state.lock().unwrap().artifacts = artifacts;
        self
    }

    pub fn with_artifact(self, artifact: Artifact) -> Self {
        self.state.lock().unwrap().artifact = Some(artifact);
        self
    }

    pub fn with_scm_edit(self, command: ModifyScmRepoCommand, pr_url: Option<&str>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.scm_edit = Some(command);
            state.pr_url = pr_url.map(String::from);
        }
        self
    }

    pub fn with_dependency_set(self, set: DependencySet) -> Self {
        self.state.lock().unwrap().dependency_set = Some(set);
        self
    }

    /// Makes every call of `method` fail with a 500.
    pub fn failing(self, method: &'static str) -> Self {
        self.state.lock().unwrap().failing.insert(method);
        self
    }

    /// Makes `queue_artifact` reject one GAV with `details`.
    pub fn rejecting(self, gav: &str, details: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejected_gavs
            .insert(gav.to_string(), details.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls whose description starts with `method`.
    pub fn calls_to(&self, method: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.split(' ').next() == Some(method))
            .collect()
    }

    fn record(&self, method: &'static str, call: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.contains(method) {
            return Err(ApiError {
                status: 500,
                method: "GET".to_string(),
                url: format!("http://mock/{}", method),
                details: Some("Internal Server Error".to_string()),
            }
            .into());
        }
        Ok(())
    }

    fn not_found(what: &str) -> anyhow::Error {
        ApiError {
            status: 404,
            method: "GET".to_string(),
            url: format!("http://mock/{}", what),
            details: None,
        }
        .into()
    }
}

fn page_of<T>(items: Vec<T>, count: u64, page: PageRequest) -> Page<T> {
    Page::new(items, count, page.page, page.per_page)
}

#[async_trait]
impl BuildApi for MockConsoleApi {
    async fn list_builds(&self, query: &BuildHistoryQuery) -> Result<Page<BuildListItem>> {
        self.record(
            "list_builds",
            format!(
                "list_builds page={} per_page={} gav={}",
                query.page.page,
                query.page.per_page,
                query.gav.as_deref().unwrap_or("")
            ),
        )?;
        let state = self.state.lock().unwrap();
        Ok(page_of(state.builds.clone(), state.build_count, query.page))
    }

    async fn get_build(&self, id: i64) -> Result<Build> {
        self.record("get_build", format!("get_build {}", id))?;
        self.state
            .lock()
            .unwrap()
            .build
            .clone()
            .ok_or_else(|| Self::not_found(&id.to_string()))
    }

    async fn discovery_logs(&self, build_id: i64) -> Result<String> {
        self.record("discovery_logs", format!("discovery_logs {}", build_id))?;
        Ok(format!("discovery of {}", build_id))
    }

    async fn attempt_logs(&self, attempt_id: i64) -> Result<String> {
        self.record("attempt_logs", format!("attempt_logs {}", attempt_id))?;
        Ok(format!("attempt {}", attempt_id))
    }

    async fn build_summary(&self, label: Option<&str>) -> Result<BuildSummary> {
        self.record(
            "build_summary",
            format!("build_summary {}", label.unwrap_or("")),
        )?;
        Ok(BuildSummary::default())
    }
}

#[async_trait]
impl QueueApi for MockConsoleApi {
    async fn queue_build(&self, build_name: &str) -> Result<()> {
        self.record("queue_build", format!("queue_build {}", build_name))
    }

    async fn queue_artifact(&self, gav: &str) -> Result<()> {
        self.record("queue_artifact", format!("queue_artifact {}", gav))?;
        match self.state.lock().unwrap().rejected_gavs.get(gav) {
            Some(details) => Err(ApiError {
                status: 400,
                method: "POST".to_string(),
                url: "http://mock/api/builds/queue/add".to_string(),
                details: Some(details.clone()),
            }
            .into()),
            None => Ok(()),
        }
    }

    async fn list_queue(&self, page: PageRequest) -> Result<Page<QueuedBuild>> {
        self.record("list_queue", format!("list_queue page={}", page.page))?;
        Ok(page_of(Vec::new(), 0, page))
    }

    async fn running_builds(&self) -> Result<Vec<RunningBuild>> {
        self.record("running_builds", "running_builds".to_string())?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl ArtifactApi for MockConsoleApi {
    async fn list_artifacts(&self, query: &ArtifactHistoryQuery) -> Result<Page<ArtifactListItem>> {
        self.record(
            "list_artifacts",
            format!(
                "list_artifacts page={} state={}",
                query.page.page,
                query.state.map(|s| s.as_query()).unwrap_or("")
            ),
        )?;
        let items = self.state.lock().unwrap().artifacts.clone();
        let count = items.len() as u64;
        Ok(page_of(items, count, query.page))
    }

    async fn get_artifact(&self, name: &str) -> Result<Artifact> {
        self.record("get_artifact", format!("get_artifact {}", name))?;
        self.state
            .lock()
            .unwrap()
            .artifact
            .clone()
            .ok_or_else(|| Self::not_found(name))
    }

    async fn artifact_summary(&self, label: Option<&str>) -> Result<ArtifactSummary> {
        self.record(
            "artifact_summary",
            format!("artifact_summary {}", label.unwrap_or("")),
        )?;
        Ok(ArtifactSummary::default())
    }

    async fn scm_edit(&self, gav: &str) -> Result<ModifyScmRepoCommand> {
        self.record("scm_edit", format!("scm_edit {}", gav))?;
        self.state
            .lock()
            .unwrap()
            .scm_edit
            .clone()
            .ok_or_else(|| Self::not_found(gav))
    }

    async fn submit_scm_edit(&self, command: &ModifyScmRepoCommand) -> Result<EditResult> {
        self.record(
            "submit_scm_edit",
            format!(
                "submit_scm_edit {} uri={}",
                command.gav,
                command.uri.as_deref().unwrap_or("")
            ),
        )?;
        Ok(EditResult {
            pr_url: self.state.lock().unwrap().pr_url.clone(),
        })
    }

    async fn rebuild_artifact(&self, gav: &str) -> Result<()> {
        self.record("rebuild_artifact", format!("rebuild_artifact {}", gav))
    }
}

#[async_trait]
impl LabelApi for MockConsoleApi {
    async fn labels(&self) -> Result<Vec<ArtifactLabelName>> {
        self.record("labels", "labels".to_string())?;
        Ok(vec![ArtifactLabelName {
            name: "team".to_string(),
        }])
    }

    async fn label_values(&self, name: &str, search: Option<&str>) -> Result<Vec<String>> {
        self.record(
            "label_values",
            format!("label_values {} {}", name, search.unwrap_or("")),
        )?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl ImageApi for MockConsoleApi {
    async fn image_repositories(&self, page: PageRequest) -> Result<Page<String>> {
        self.record(
            "image_repositories",
            format!("image_repositories page={}", page.page),
        )?;
        Ok(page_of(vec!["quay.io/acme/app".to_string()], 1, page))
    }

    async fn images(&self, repository: &str, page: PageRequest) -> Result<Page<Image>> {
        self.record("images", format!("images {}", repository))?;
        Ok(page_of(Vec::new(), 0, page))
    }

    async fn add_image(&self, image: &str) -> Result<()> {
        self.record("add_image", format!("add_image {}", image))
    }
}

#[async_trait]
impl DeploymentApi for MockConsoleApi {
    async fn deployments(&self) -> Result<Vec<Deployment>> {
        self.record("deployments", "deployments".to_string())?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl DependencySetApi for MockConsoleApi {
    async fn dependency_set(&self, id: i64) -> Result<DependencySet> {
        self.record("dependency_set", format!("dependency_set {}", id))?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .dependency_set
            .clone()
            .unwrap_or_default())
    }
}

#[async_trait]
impl GithubBuildApi for MockConsoleApi {
    async fn github_builds(&self, page: PageRequest) -> Result<Page<GithubBuild>> {
        self.record("github_builds", format!("github_builds page={}", page.page))?;
        Ok(page_of(Vec::new(), 0, page))
    }

    async fn github_build(&self, id: i64) -> Result<GithubBuild> {
        self.record("github_build", format!("github_build {}", id))?;
        Ok(GithubBuild::default())
    }
}

#[async_trait]
impl AdminApi for MockConsoleApi {
    async fn run_admin_action(&self, action: AdminAction) -> Result<()> {
        self.record(
            "run_admin_action",
            format!("run_admin_action {}", action.path_segment()),
        )
    }
}

#[async_trait]
impl BuildInfoEditApi for MockConsoleApi {
    async fn build_info(&self, scm_uri: &str) -> Result<BuildEditInfo> {
        self.record("build_info", format!("build_info {}", scm_uri))?;
        Ok(BuildEditInfo {
            scm_uri: scm_uri.to_string(),
            ..BuildEditInfo::default()
        })
    }

    async fn submit_build_info(&self, info: &BuildEditInfo) -> Result<EditResult> {
        self.record(
            "submit_build_info",
            format!("submit_build_info {}", info.scm_uri),
        )?;
        Ok(EditResult {
            pr_url: self.state.lock().unwrap().pr_url.clone(),
        })
    }
}

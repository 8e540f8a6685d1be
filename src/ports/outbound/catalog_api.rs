use crate::rebuild_tracking::domain::{
    ArtifactLabelName, Deployment, DependencySet, GithubBuild, Image, Page, PageRequest,
};
use crate::shared::Result;
use async_trait::async_trait;

/// LabelApi port for artifact labels
#[async_trait]
pub trait LabelApi: Send + Sync {
    /// `GET /api/artifact-labels`
    async fn labels(&self) -> Result<Vec<ArtifactLabelName>>;

    /// `GET /api/artifact-labels/values?name=&search=`
    async fn label_values(&self, name: &str, search: Option<&str>) -> Result<Vec<String>>;
}

/// ImageApi port for analysed container images
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// Image repositories known to the service. `GET /api/image`
    async fn image_repositories(&self, page: PageRequest) -> Result<Page<String>>;

    /// Images of one repository. `GET /api/image/{repository}`
    async fn images(&self, repository: &str, page: PageRequest) -> Result<Page<Image>>;

    /// Submits an image reference for analysis. `PUT /api/image`
    async fn add_image(&self, image: &str) -> Result<()>;
}

/// DeploymentApi port for watched workloads
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// `GET /api/deployment`
    async fn deployments(&self) -> Result<Vec<Deployment>>;
}

/// DependencySetApi port
#[async_trait]
pub trait DependencySetApi: Send + Sync {
    /// `GET /api/dependency-set/{id}`
    async fn dependency_set(&self, id: i64) -> Result<DependencySet>;
}

/// GithubBuildApi port for CI builds reported by the GitHub integration
#[async_trait]
pub trait GithubBuildApi: Send + Sync {
    /// `GET /api/builds/github`
    async fn github_builds(&self, page: PageRequest) -> Result<Page<GithubBuild>>;

    /// `GET /api/builds/github/id/{id}`
    async fn github_build(&self, id: i64) -> Result<GithubBuild>;
}

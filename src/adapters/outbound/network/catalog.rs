use super::http_client::{HttpConsoleClient, Query};
use crate::ports::outbound::{DependencySetApi, DeploymentApi, GithubBuildApi, ImageApi};
use crate::rebuild_tracking::domain::{
    Deployment, DependencySet, GithubBuild, Image, Page, PageRequest,
};
use crate::shared::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine};
use reqwest::Method;

/// The repository travels as one URL-safe Base64 segment.
fn images_path(repository: &str) -> String {
    format!("/api/image/{}", general_purpose::URL_SAFE.encode(repository))
}

#[async_trait]
impl ImageApi for HttpConsoleClient {
    async fn image_repositories(&self, page: PageRequest) -> Result<Page<String>> {
        self.get_json("/api/image", Query::new().page(page)).await
    }

    async fn images(&self, repository: &str, page: PageRequest) -> Result<Page<Image>> {
        self.get_json(&images_path(repository), Query::new().page(page))
            .await
    }

    async fn add_image(&self, image: &str) -> Result<()> {
        self.send_text(Method::PUT, "/api/image", image).await
    }
}

#[async_trait]
impl DeploymentApi for HttpConsoleClient {
    async fn deployments(&self) -> Result<Vec<Deployment>> {
        self.get_json("/api/deployment", Query::new()).await
    }
}

#[async_trait]
impl DependencySetApi for HttpConsoleClient {
    async fn dependency_set(&self, id: i64) -> Result<DependencySet> {
        let path = format!("/api/dependency-set/{}", id);
        self.get_json(&path, Query::new()).await
    }
}

#[async_trait]
impl GithubBuildApi for HttpConsoleClient {
    async fn github_builds(&self, page: PageRequest) -> Result<Page<GithubBuild>> {
        self.get_json("/api/builds/github", Query::new().page(page))
            .await
    }

    async fn github_build(&self, id: i64) -> Result<GithubBuild> {
        let path = format!("/api/builds/github/id/{}", id);
        self.get_json(&path, Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_repository_is_base64_encoded() {
        assert_eq!(images_path("quay.io/acme/app"), "/api/image/cXVheS5pby9hY21lL2FwcA==");
    }

    #[test]
    fn test_image_repository_uses_url_safe_alphabet() {
        // "???" encodes to "Pz8/" with the standard alphabet
        assert_eq!(images_path("???"), "/api/image/Pz8_");
    }
}

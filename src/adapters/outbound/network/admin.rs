use super::http_client::{HttpConsoleClient, Query};
use crate::ports::outbound::{AdminAction, AdminApi, BuildInfoEditApi};
use crate::rebuild_tracking::domain::{BuildEditInfo, EditResult};
use crate::shared::Result;
use async_trait::async_trait;

#[async_trait]
impl AdminApi for HttpConsoleClient {
    async fn run_admin_action(&self, action: AdminAction) -> Result<()> {
        let path = format!("/api/admin/{}", action.path_segment());
        self.post_empty(&path).await
    }
}

#[async_trait]
impl BuildInfoEditApi for HttpConsoleClient {
    async fn build_info(&self, scm_uri: &str) -> Result<BuildEditInfo> {
        self.get_json("/api/build-info/edit", Query::new().param("gav", scm_uri))
            .await
    }

    async fn submit_build_info(&self, info: &BuildEditInfo) -> Result<EditResult> {
        self.post_json("/api/build-info/edit", info).await
    }
}

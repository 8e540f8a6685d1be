use crate::rebuild_tracking::domain::{Page, PageRequest, QueuedBuild, RunningBuild};
use crate::shared::Result;
use async_trait::async_trait;

/// QueueApi port for the build queue endpoints
#[async_trait]
pub trait QueueApi: Send + Sync {
    /// Requests a rebuild of an existing dependency build.
    ///
    /// `POST /api/builds/queue` with the build name as text body
    async fn queue_build(&self, build_name: &str) -> Result<()>;

    /// Queues a new artifact for discovery and build.
    ///
    /// `POST /api/builds/queue/add` with the GAV as text body
    async fn queue_artifact(&self, gav: &str) -> Result<()>;

    /// `GET /api/builds/queue`
    async fn list_queue(&self, page: PageRequest) -> Result<Page<QueuedBuild>>;

    /// `GET /api/builds/running`
    async fn running_builds(&self) -> Result<Vec<RunningBuild>>;
}

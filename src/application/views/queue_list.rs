use async_trait::async_trait;

use super::paged_list::{PageSource, PagedList};
use crate::application::read_models::Cell;
use crate::application::view_state::ListQuery;
use crate::ports::outbound::QueueApi;
use crate::rebuild_tracking::domain::{Page, QueuedBuild};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::Result;

/// Artifacts waiting in the build queue.
pub struct BuildQueueSource<A> {
    api: A,
}

impl<A> BuildQueueSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: QueueApi> PageSource for BuildQueueSource<A> {
    type Filter = ();
    type Item = QueuedBuild;

    fn title(&self) -> String {
        "Build Queue".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Priority", "Artifact"]
    }

    fn row(&self, queued: &QueuedBuild) -> Vec<Cell> {
        let priority = if queued.priority {
            Cell::label(StatusLabels::priority())
        } else {
            Cell::text("")
        };
        vec![priority, Cell::text(queued.artifact.clone())]
    }

    async fn fetch(&self, query: &ListQuery<()>) -> Result<Page<QueuedBuild>> {
        self.api.list_queue(query.page).await
    }
}

pub type BuildQueueList<A> = PagedList<BuildQueueSource<A>>;

pub fn build_queue_list<A: QueueApi>(api: A, per_page: u32) -> BuildQueueList<A> {
    PagedList::new(BuildQueueSource::new(api), per_page)
}

use async_trait::async_trait;

use super::snapshot_list::{SnapshotList, SnapshotSource};
use crate::application::read_models::Cell;
use crate::ports::outbound::QueueApi;
use crate::rebuild_tracking::domain::RunningBuild;
use crate::shared::Result;

pub struct RunningBuildSource<A> {
    api: A,
}

#[async_trait]
impl<A: QueueApi> SnapshotSource for RunningBuildSource<A> {
    type Item = RunningBuild;

    fn title(&self) -> String {
        "Running Builds".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Build", "Status", "Start Time"]
    }

    fn row(&self, running: &RunningBuild) -> Vec<Cell> {
        let started = running
            .start_time
            .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
            .unwrap_or_default();
        vec![
            Cell::text(running.description.clone()),
            Cell::text(running.status.clone()),
            Cell::text(started),
        ]
    }

    async fn fetch_all(&self) -> Result<Vec<RunningBuild>> {
        self.api.running_builds().await
    }
}

pub type RunningBuildList<A> = SnapshotList<RunningBuildSource<A>>;

pub fn running_build_list<A: QueueApi>(api: A) -> RunningBuildList<A> {
    SnapshotList::new(RunningBuildSource { api })
}

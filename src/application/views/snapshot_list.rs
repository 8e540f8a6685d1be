use async_trait::async_trait;

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Cell, Screen, Section};
use crate::application::view_state::{describe_error, DetailState};
use crate::shared::Result;

/// A list the backend returns in one piece, without paging or filters.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    type Item: Send + Sync;

    fn title(&self) -> String;

    fn columns(&self) -> &'static [&'static str];

    fn row(&self, item: &Self::Item) -> Vec<Cell>;

    async fn fetch_all(&self) -> Result<Vec<Self::Item>>;
}

/// Fetched once on creation; [`SnapshotList::reload`] asks for a fresh copy.
pub struct SnapshotList<S: SnapshotSource> {
    source: S,
    state: DetailState<(), Vec<S::Item>>,
}

impl<S: SnapshotSource> SnapshotList<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DetailState::new(()),
        }
    }

    pub fn items(&self) -> &[S::Item] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn reload(&mut self) {
        self.state.reload();
    }

    pub async fn sync(&mut self) -> bool {
        let Some(ticket) = self.state.begin_fetch() else {
            return false;
        };
        let result = self.source.fetch_all().await.map_err(|e| {
            tracing::error!(list = %self.source.title(), error = %e, "failed to load list");
            describe_error(&e)
        });
        self.state.complete(ticket, result)
    }

    pub fn screen(&self) -> Screen {
        Screen::new(self.source.title()).with_sections(self.state.load_state().sections(|| {
            let rows = self.items().iter().map(|item| self.source.row(item)).collect();
            vec![Section::table_or_empty(self.source.columns(), rows)]
        }))
    }
}

#[async_trait]
impl<S: SnapshotSource> InteractiveView for SnapshotList<S> {
    async fn sync(&mut self) -> bool {
        SnapshotList::sync(self).await
    }

    async fn dispatch(&mut self, _command: ViewCommand) -> Result<()> {
        Ok(())
    }

    fn screen(&self) -> Screen {
        SnapshotList::screen(self)
    }
}

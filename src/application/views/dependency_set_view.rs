use async_trait::async_trait;

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Cell, Field, Screen, Section};
use crate::application::view_state::{describe_error, DetailState};
use crate::ports::outbound::DependencySetApi;
use crate::rebuild_tracking::domain::{DependencySet, IdentifiedDependency};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::Result;

pub const NO_JAVA_DEPENDENCIES: &str = "No Java Dependencies";

/// Dependency rows: GAV, source marker and build status labels.
pub fn dependency_table(heading: Option<&str>, dependencies: &[&IdentifiedDependency]) -> Section {
    let rows: Vec<Vec<Cell>> = dependencies
        .iter()
        .map(|dep| {
            vec![
                Cell::text(dep.gav.clone()),
                Cell::label(StatusLabels::trust_source(&dep.source)),
                Cell::Labels(StatusLabels::dependency(dep)),
            ]
        })
        .collect();
    match Section::table_or_empty(&["GAV", "Source", "Status"], rows) {
        Section::Table { columns, rows, .. } => Section::Table {
            heading: heading.map(String::from),
            columns,
            rows,
        },
        empty => empty,
    }
}

/// One dependency set, as embedded in the build SBOM and GitHub build tabs.
///
/// A set id of zero or less means "no set": nothing is fetched or rendered.
pub struct DependencySetView<A> {
    api: A,
    state: DetailState<i64, DependencySet>,
}

impl<A: DependencySetApi> DependencySetView<A> {
    pub fn new(api: A, id: i64) -> Self {
        Self {
            api,
            state: DetailState::new(id),
        }
    }

    pub fn id(&self) -> i64 {
        *self.state.key()
    }

    pub fn is_present(&self) -> bool {
        self.id() > 0
    }

    pub fn data(&self) -> Option<&DependencySet> {
        self.state.data()
    }

    pub fn set_id(&mut self, id: i64) {
        self.state.set_key(id);
    }

    pub async fn sync(&mut self) -> bool {
        if !self.is_present() {
            return false;
        }
        let Some(ticket) = self.state.begin_fetch() else {
            return false;
        };
        let result = self
            .api
            .dependency_set(ticket.query)
            .await
            .map_err(|e| {
                tracing::error!(dependency_set = ticket.query, error = %e, "failed to load dependency set");
                describe_error(&e)
            });
        self.state.complete(ticket, result)
    }

    /// Sections for embedding in another view.
    pub fn sections(&self) -> Vec<Section> {
        if !self.is_present() {
            return Vec::new();
        }
        self.state.load_state().sections(|| {
            let Some(set) = self.state.data() else {
                return Vec::new();
            };
            let health = StatusLabels::dependency_health(true, &set.counts(), NO_JAVA_DEPENDENCIES);
            let mut sections = vec![Section::fields(
                None,
                vec![Field::new("Health", Cell::Labels(health))],
            )];
            if !set.dependencies.is_empty() {
                sections.push(dependency_table(None, &set.sorted_dependencies()));
            }
            sections
        })
    }

    pub fn screen(&self) -> Screen {
        let title = match self.state.data().and_then(|s| s.identifier.clone()) {
            Some(identifier) => format!("Dependency Set {}", identifier),
            None => format!("Dependency Set {}", self.id()),
        };
        Screen::new(title).with_sections(self.sections())
    }
}

#[async_trait]
impl<A: DependencySetApi> InteractiveView for DependencySetView<A> {
    async fn sync(&mut self) -> bool {
        DependencySetView::sync(self).await
    }

    async fn dispatch(&mut self, _command: ViewCommand) -> Result<()> {
        Ok(())
    }

    fn screen(&self) -> Screen {
        DependencySetView::screen(self)
    }
}

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Cell, Screen, Section};
use crate::application::view_state::{describe_error, DetailState};
use crate::ports::outbound::LabelApi;
use crate::rebuild_tracking::domain::ArtifactLabelName;
use crate::shared::error::ConsoleError;
use crate::shared::Result;
use async_trait::async_trait;

pub const ALL_LABELS: &str = "All";

/// Artifact label dropdown. Choosing [`ALL_LABELS`] clears the selection.
pub struct LabelSelector<A> {
    api: A,
    labels: DetailState<(), Vec<ArtifactLabelName>>,
    selected: Option<String>,
}

impl<A: LabelApi> LabelSelector<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            labels: DetailState::new(()),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn labels(&self) -> &[ArtifactLabelName] {
        self.labels.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, label: &str) -> bool {
        let label = label.trim();
        let next = (!label.is_empty() && label != ALL_LABELS).then(|| label.to_string());
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    pub async fn sync(&mut self) -> bool {
        let Some(ticket) = self.labels.begin_fetch() else {
            return false;
        };
        let result = self.api.labels().await.map_err(|e| {
            tracing::error!(error = %e, "failed to load artifact labels");
            describe_error(&e)
        });
        self.labels.complete(ticket, result)
    }

    /// Values recorded for one label, optionally narrowed by a search prefix.
    pub async fn values(&self, name: &str, search: Option<&str>) -> Result<Vec<String>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        self.api.label_values(name, search).await
    }

    pub fn sections(&self) -> Vec<Section> {
        self.labels.load_state().sections(|| {
            let selected = self.selected.as_deref().unwrap_or(ALL_LABELS);
            let marker = |name: &str| if name == selected { "*" } else { "" };
            let mut rows = vec![vec![Cell::text(marker(ALL_LABELS)), Cell::text(ALL_LABELS)]];
            rows.extend(
                self.labels()
                    .iter()
                    .map(|label| vec![Cell::text(marker(&label.name)), Cell::text(label.name.clone())]),
            );
            vec![Section::Table {
                heading: Some("Labels".to_string()),
                columns: vec![String::new(), "Label".to_string()],
                rows,
            }]
        })
    }

    pub fn screen(&self) -> Screen {
        Screen::new("Artifact Labels").with_sections(self.sections())
    }
}

#[async_trait]
impl<A: LabelApi> InteractiveView for LabelSelector<A> {
    async fn sync(&mut self) -> bool {
        LabelSelector::sync(self).await
    }

    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        if let ViewCommand::Filter { field, value } = command {
            if field != "label" {
                return Err(ConsoleError::UnknownFilter {
                    field,
                    available: "label".to_string(),
                }
                .into());
            }
            self.select(&value);
        }
        Ok(())
    }

    fn screen(&self) -> Screen {
        LabelSelector::screen(self)
    }
}

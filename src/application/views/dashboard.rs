use async_trait::async_trait;

use super::command::{InteractiveView, ViewCommand};
use super::label_selector::LabelSelector;
use crate::application::read_models::{Screen, Section};
use crate::application::view_state::{describe_error, DetailState};
use crate::ports::outbound::{ArtifactApi, BuildApi, LabelApi};
use crate::rebuild_tracking::domain::{ArtifactSummary, BuildSummary};
use crate::rebuild_tracking::services::StatusChart;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Home page: the label selector and both status charts.
///
/// The charts are keyed by the selected label, so choosing a label refetches
/// each chart exactly once.
pub struct Dashboard<A> {
    api: A,
    labels: LabelSelector<A>,
    builds: DetailState<Option<String>, BuildSummary>,
    artifacts: DetailState<Option<String>, ArtifactSummary>,
}

impl<A> Dashboard<A>
where
    A: BuildApi + ArtifactApi + LabelApi + Clone,
{
    pub fn new(api: A) -> Self {
        Self {
            labels: LabelSelector::new(api.clone()),
            api,
            builds: DetailState::new(None),
            artifacts: DetailState::new(None),
        }
    }

    pub fn labels(&self) -> &LabelSelector<A> {
        &self.labels
    }

    pub fn build_summary(&self) -> Option<&BuildSummary> {
        self.builds.data()
    }

    pub fn artifact_summary(&self) -> Option<&ArtifactSummary> {
        self.artifacts.data()
    }

    pub fn select_label(&mut self, label: &str) -> bool {
        if !self.labels.select(label) {
            return false;
        }
        let selected = self.labels.selected().map(String::from);
        self.builds.set_key(selected.clone());
        self.artifacts.set_key(selected);
        true
    }

    pub async fn sync(&mut self) -> bool {
        let mut applied = self.labels.sync().await;
        if let Some(ticket) = self.builds.begin_fetch() {
            let result = self
                .api
                .build_summary(ticket.query.as_deref())
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to load build status");
                    describe_error(&e)
                });
            applied |= self.builds.complete(ticket, result);
        }
        if let Some(ticket) = self.artifacts.begin_fetch() {
            let result = self
                .api
                .artifact_summary(ticket.query.as_deref())
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to load artifact summary");
                    describe_error(&e)
                });
            applied |= self.artifacts.complete(ticket, result);
        }
        applied
    }

    pub fn screen(&self) -> Screen {
        let build_chart = self.builds.load_state().sections(|| {
            self.builds
                .data()
                .map(|summary| Section::Chart {
                    chart: StatusChart::for_builds(summary),
                })
                .into_iter()
                .collect()
        });
        let artifact_chart = self.artifacts.load_state().sections(|| {
            self.artifacts
                .data()
                .map(|summary| Section::Chart {
                    chart: StatusChart::for_artifacts(summary),
                })
                .into_iter()
                .collect()
        });
        Screen::new("JVM Build Service")
            .with_sections(self.labels.sections())
            .with_sections(build_chart)
            .with_sections(artifact_chart)
    }
}

#[async_trait]
impl<A> InteractiveView for Dashboard<A>
where
    A: BuildApi + ArtifactApi + LabelApi + Clone,
{
    async fn sync(&mut self) -> bool {
        Dashboard::sync(self).await
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
            self.select_label(&value);
        }
        Ok(())
    }

    fn screen(&self) -> Screen {
        Dashboard::screen(self)
    }
}

use async_trait::async_trait;

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Cell, Field, Screen, Section, TabHeader};
use crate::application::routes::Route;
use crate::application::view_state::{describe_error, DetailState};
use crate::ports::outbound::{ArtifactApi, QueueApi};
use crate::rebuild_tracking::domain::Artifact;
use crate::rebuild_tracking::policies::StatusLabels;
use crate::rebuild_tracking::services::ScmLinks;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Detail view of one stored artifact.
pub struct ArtifactView<A> {
    api: A,
    state: DetailState<String, Artifact>,
}

impl<A: ArtifactApi + QueueApi> ArtifactView<A> {
    pub fn new(api: A, name: impl Into<String>) -> Self {
        Self {
            api,
            state: DetailState::new(name.into()),
        }
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.state.data()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.set_key(name.into());
    }

    pub async fn sync(&mut self) -> bool {
        let Some(ticket) = self.state.begin_fetch() else {
            return false;
        };
        let result = self.api.get_artifact(&ticket.query).await.map_err(|e| {
            tracing::error!(artifact = %ticket.query, error = %e, "failed to load artifact");
            describe_error(&e)
        });
        self.state.complete(ticket, result)
    }

    /// Queues the dependency build that produced this artifact.
    pub async fn rebuild(&mut self) -> Result<()> {
        let build_name = self
            .state
            .data()
            .and_then(|artifact| artifact.dependency_build_name.clone())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ConsoleError::Validation {
                message: "the artifact has no dependency build to rebuild".to_string(),
            })?;
        self.api.queue_build(&build_name).await.inspect_err(|e| {
            tracing::error!(build = %build_name, error = %e, "rebuild request failed");
        })
    }

    pub fn screen(&self) -> Screen {
        let Some(artifact) = self.state.data() else {
            return Screen::new(format!("Artifact {}", self.state.key()))
                .with_sections(self.state.load_state().sections(Vec::new));
        };
        let title = format!(
            "Artifact {}@{}",
            artifact.scm_repo.as_deref().unwrap_or_default(),
            artifact.tag.as_deref().unwrap_or_default()
        );
        Screen::new(title)
            .with_labels(vec![StatusLabels::artifact_outcome(
                artifact.succeeded,
                artifact.missing,
            )])
            .with_tabs(vec![TabHeader {
                name: "Details".to_string(),
                enabled: true,
                selected: true,
            }])
            .with_sections(
                self.state
                    .load_state()
                    .sections(|| vec![details_section(artifact)]),
            )
    }
}

fn details_section(artifact: &Artifact) -> Section {
    let mut fields = vec![
        Field::text("GAV", artifact.gav.clone()),
        Field::text("Internal Id", artifact.name.clone()),
    ];
    if let Some(repo) = &artifact.scm_repo {
        let commit = artifact.commit.clone().unwrap_or_default();
        fields.push(Field::new(
            "External Repository",
            Cell::link_or_text(
                artifact.tag.clone().unwrap_or_else(|| repo.clone()),
                ScmLinks::tree_url(repo, &commit, artifact.context_path.as_deref()),
            ),
        ));
        if !commit.is_empty() {
            fields.push(Field::text("Commit Hash", commit));
        }
    }
    if let Some(build) = artifact
        .dependency_build_name
        .as_deref()
        .filter(|b| !b.is_empty())
    {
        let value = match artifact.dependency_build_id.filter(|id| *id > 0) {
            Some(id) => Cell::Link {
                text: build.to_string(),
                url: Route::Build(id).path(),
            },
            None => Cell::Text(build.to_string()),
        };
        fields.push(Field::new("Dependency Build", value));
    }
    if let Some(message) = artifact.message.as_deref().filter(|m| !m.is_empty()) {
        fields.push(Field::text("Message", message));
    }
    Section::fields(None, fields)
}

#[async_trait]
impl<A: ArtifactApi + QueueApi> InteractiveView for ArtifactView<A> {
    async fn sync(&mut self) -> bool {
        ArtifactView::sync(self).await
    }

    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::Rebuild(_) => self.rebuild().await,
            _ => Ok(()),
        }
    }

    fn screen(&self) -> Screen {
        ArtifactView::screen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency_build(section: &Section) -> Option<&Cell> {
        match section {
            Section::Fields { fields, .. } => fields
                .iter()
                .find(|f| f.label == "Dependency Build")
                .map(|f| &f.value),
            _ => None,
        }
    }

    #[test]
    fn test_dependency_build_links_by_id() {
        let artifact = Artifact {
            dependency_build_name: Some("b-lib".to_string()),
            dependency_build_id: Some(42),
            ..Artifact::default()
        };
        assert_eq!(
            dependency_build(&details_section(&artifact)),
            Some(&Cell::Link {
                text: "b-lib".to_string(),
                url: "/builds/build/42".to_string(),
            })
        );
    }

    #[test]
    fn test_dependency_build_without_id_is_plain_text() {
        let artifact = Artifact {
            dependency_build_name: Some("b-lib".to_string()),
            ..Artifact::default()
        };
        assert_eq!(
            dependency_build(&details_section(&artifact)),
            Some(&Cell::Text("b-lib".to_string()))
        );
    }
}

use async_trait::async_trait;
use std::str::FromStr;

use super::command::{InteractiveView, ViewCommand};
use super::dependency_set_view::DependencySetView;
use crate::application::read_models::{Cell, Field, Screen, Section, TabHeader};
use crate::application::view_state::{describe_error, DetailState};
use crate::ports::outbound::{BuildApi, DependencySetApi, QueueApi};
use crate::rebuild_tracking::domain::{Build, BuildAttempt};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::rebuild_tracking::services::{AttemptLabel, ScmLinks};
use crate::shared::error::ConsoleError;
use crate::shared::Result;

pub fn discovery_logs_path(build_id: i64) -> String {
    format!("/api/builds/history/discovery-logs/{}", build_id)
}

pub fn attempt_logs_path(attempt_id: i64) -> String {
    format!("/api/builds/attempts/logs/{}", attempt_id)
}

/// Tabs of the build detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTab {
    Details,
    Attempts,
    VerificationFailures,
    Shading,
    Sbom,
}

impl BuildTab {
    pub const ALL: [BuildTab; 5] = [
        BuildTab::Details,
        BuildTab::Attempts,
        BuildTab::VerificationFailures,
        BuildTab::Shading,
        BuildTab::Sbom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildTab::Details => "Details",
            BuildTab::Attempts => "Attempts",
            BuildTab::VerificationFailures => "Verification Failures",
            BuildTab::Shading => "Shading",
            BuildTab::Sbom => "SBOM",
        }
    }

    /// Tabs other than Details need the data they show.
    pub fn enabled_for(self, build: &Build) -> bool {
        match self {
            BuildTab::Details => true,
            BuildTab::Attempts => !build.build_attempts.is_empty(),
            BuildTab::VerificationFailures => build.verification_failures().is_some(),
            BuildTab::Shading => !build.shading_details.is_empty(),
            BuildTab::Sbom => build.sbom_dependency_set().is_some(),
        }
    }
}

impl FromStr for BuildTab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        BuildTab::ALL
            .into_iter()
            .find(|tab| tab.name().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid tab: {}. Please specify one of: details, attempts, verification-failures, shading, sbom",
                    s
                )
            })
    }
}

/// Detail view of one dependency build.
pub struct BuildView<A> {
    api: A,
    state: DetailState<i64, Build>,
    tab: BuildTab,
    sbom: DependencySetView<A>,
}

impl<A> BuildView<A>
where
    A: BuildApi + QueueApi + DependencySetApi + Clone,
{
    pub fn new(api: A, id: i64) -> Self {
        Self {
            sbom: DependencySetView::new(api.clone(), 0),
            api,
            state: DetailState::new(id),
            tab: BuildTab::Details,
        }
    }

    pub fn build(&self) -> Option<&Build> {
        self.state.data()
    }

    pub fn tab(&self) -> BuildTab {
        self.tab
    }

    pub fn set_id(&mut self, id: i64) {
        if self.state.set_key(id) {
            self.tab = BuildTab::Details;
        }
    }

    /// Switches tab. Tabs without data are refused.
    pub fn select_tab(&mut self, tab: BuildTab) -> Result<()> {
        let enabled = match self.state.data() {
            Some(build) => tab.enabled_for(build),
            None => tab == BuildTab::Details,
        };
        if !enabled {
            return Err(ConsoleError::TabDisabled {
                tab: tab.name().to_string(),
            }
            .into());
        }
        self.tab = tab;
        Ok(())
    }

    pub async fn sync(&mut self) -> bool {
        let mut applied = false;
        if let Some(ticket) = self.state.begin_fetch() {
            tracing::debug!(build = %ticket.query, "fetching build");
            let result = self.api.get_build(ticket.query).await.map_err(|e| {
                tracing::error!(build = %ticket.query, error = %e, "failed to load build");
                describe_error(&e)
            });
            applied = self.state.complete(ticket, result);
            let sbom_id = self
                .state
                .data()
                .and_then(Build::sbom_dependency_set)
                .unwrap_or(0);
            self.sbom.set_id(sbom_id);
        }
        if self.tab == BuildTab::Sbom {
            applied |= self.sbom.sync().await;
        }
        applied
    }

    /// Queues the build again and flags it as queued.
    pub async fn rebuild(&mut self) -> Result<()> {
        let name = self
            .state
            .data()
            .map(|build| build.name.clone())
            .ok_or_else(|| ConsoleError::Validation {
                message: "the build has not loaded".to_string(),
            })?;
        if let Err(e) = self.api.queue_build(&name).await {
            tracing::error!(build = %name, error = %e, "rebuild request failed");
            return Err(e);
        }
        self.state.patch(|build| build.in_queue = true);
        Ok(())
    }

    pub async fn discovery_logs(&self) -> Result<String> {
        let build = self.state.data().ok_or_else(|| ConsoleError::Validation {
            message: "the build has not loaded".to_string(),
        })?;
        self.api.discovery_logs(build.id).await
    }

    pub async fn attempt_logs(&self, attempt_id: i64) -> Result<String> {
        self.api.attempt_logs(attempt_id).await
    }

    pub fn screen(&self) -> Screen {
        let Some(build) = self.state.data() else {
            return Screen::new(format!("Build {}", self.state.key()))
                .with_sections(self.state.load_state().sections(Vec::new));
        };
        let tabs = BuildTab::ALL
            .into_iter()
            .map(|tab| TabHeader {
                name: tab.name().to_string(),
                enabled: tab.enabled_for(build),
                selected: tab == self.tab,
            })
            .collect();
        let sections = self
            .state
            .load_state()
            .sections(|| self.tab_sections(build));
        Screen::new(format!("Build {}@{}", build.scm_repo, build.tag))
            .with_labels(StatusLabels::build(build))
            .with_tabs(tabs)
            .with_sections(sections)
    }

    fn tab_sections(&self, build: &Build) -> Vec<Section> {
        match self.tab {
            BuildTab::Details => details_sections(build),
            BuildTab::Attempts => vec![attempts_table(&build.build_attempts)],
            BuildTab::VerificationFailures => build
                .verification_failures()
                .map(|failures| {
                    failures
                        .iter()
                        .map(|(key, lines)| Section::text(Some(key.as_str()), lines.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            BuildTab::Shading => vec![shading_table(build)],
            BuildTab::Sbom => self.sbom.sections(),
        }
    }
}

fn details_sections(build: &Build) -> Vec<Section> {
    let context = build.context_path.as_deref();
    let mut fields = vec![
        Field::text("Internal Id", build.name.clone()),
        Field::new(
            "External Repository",
            Cell::link_or_text(
                build.tag.clone(),
                ScmLinks::tree_url(&build.scm_repo, &build.commit, context),
            ),
        ),
        Field::text("Commit Hash", build.commit.clone()),
    ];
    if let Some(attempt) = &build.successful_build {
        if let (Some(url), Some(sha), Some(tag)) = (
            &attempt.git_archive_url,
            &attempt.git_archive_sha,
            &attempt.git_archive_tag,
        ) {
            fields.push(Field::new(
                "Internal Archive",
                Cell::link_or_text(tag.clone(), ScmLinks::tree_url(url, sha, context)),
            ));
        }
    }
    fields.push(Field::new(
        "Discovery Logs",
        Cell::Link {
            text: "Build Discovery Logs".to_string(),
            url: discovery_logs_path(build.id),
        },
    ));
    if !build.artifacts.is_empty() {
        fields.push(Field::text("Artifacts", build.artifacts.join(", ")));
    }

    let mut sections = vec![Section::fields(None, fields)];
    if let Some(attempt) = &build.successful_build {
        sections.push(attempt_details(attempt));
    }
    sections
}

fn attempt_details(attempt: &BuildAttempt) -> Section {
    let heading = AttemptLabel::describe(attempt);
    let mut fields = vec![Field::new("Status", Cell::label(StatusLabels::attempt(attempt)))];
    let optional = [
        ("JDK", &attempt.jdk),
        ("Tool", &attempt.tool),
        ("Maven Version", &attempt.maven_version),
        ("Gradle Version", &attempt.gradle_version),
        ("SBT Version", &attempt.sbt_version),
        ("Ant Version", &attempt.ant_version),
        ("Command Line", &attempt.command_line),
        ("Builder Image", &attempt.builder_image),
        ("Output Image", &attempt.output_image),
        ("Output Image Digest", &attempt.output_image_digest),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            fields.push(Field::text(label, value));
        }
    }
    if attempt.additional_memory > 0 {
        fields.push(Field::text(
            "Additional Memory",
            format!("{} MiB", attempt.additional_memory),
        ));
    }
    fields.push(Field::new(
        "Build Logs",
        Cell::Link {
            text: "Build Logs".to_string(),
            url: attempt_logs_path(attempt.id),
        },
    ));
    if let Some(url) = &attempt.build_pipeline_url {
        fields.push(Field::new(
            "Build Pipeline",
            Cell::link_or_text("Pipeline", Some(url.clone())),
        ));
    }
    Section::fields(Some(heading.as_str()), fields)
}

fn attempts_table(attempts: &[BuildAttempt]) -> Section {
    let rows = attempts
        .iter()
        .map(|attempt| {
            vec![
                Cell::text(AttemptLabel::describe(attempt)),
                Cell::label(StatusLabels::attempt(attempt)),
                Cell::Link {
                    text: "Build Logs".to_string(),
                    url: attempt_logs_path(attempt.id),
                },
            ]
        })
        .collect();
    Section::table_or_empty(&["Attempt", "Status", "Logs"], rows)
}

fn shading_table(build: &Build) -> Section {
    let rows = build
        .shading_details
        .iter()
        .map(|shading| {
            vec![
                Cell::text(shading.contaminant.clone()),
                Cell::text(shading.source.clone().unwrap_or_default()),
                Cell::text(if shading.allowed { "Allowed" } else { "Not Allowed" }),
                Cell::text(if shading.rebuild_available {
                    "Rebuild Available"
                } else {
                    ""
                }),
                Cell::text(shading.contaminated_artifacts.join(", ")),
            ]
        })
        .collect();
    Section::table_or_empty(
        &["Contaminant", "Source", "Allowed", "Rebuild", "Contaminated Artifacts"],
        rows,
    )
}

#[async_trait]
impl<A> InteractiveView for BuildView<A>
where
    A: BuildApi + QueueApi + DependencySetApi + Clone,
{
    async fn sync(&mut self) -> bool {
        BuildView::sync(self).await
    }

    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::Filter { field, value } if field == "tab" => {
                let tab = BuildTab::from_str(&value)
                    .map_err(|message| ConsoleError::Validation { message })?;
                self.select_tab(tab)
            }
            ViewCommand::Rebuild(_) => self.rebuild().await,
            _ => Ok(()),
        }
    }

    fn screen(&self) -> Screen {
        BuildView::screen(self)
    }
}

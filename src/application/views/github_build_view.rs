use async_trait::async_trait;
use std::str::FromStr;

use super::command::{InteractiveView, ViewCommand};
use super::dependency_set_view::DependencySetView;
use super::image_list::NO_JAVA;
use crate::application::read_models::{Cell, Field, Screen, Section, TabHeader};
use crate::application::view_state::{describe_error, DetailState};
use crate::ports::outbound::{DependencySetApi, GithubBuildApi};
use crate::rebuild_tracking::domain::GithubBuild;
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GithubBuildTab {
    RuntimeDependencies,
    AllBuildDependencies,
}

impl GithubBuildTab {
    pub const ALL: [GithubBuildTab; 2] = [
        GithubBuildTab::RuntimeDependencies,
        GithubBuildTab::AllBuildDependencies,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GithubBuildTab::RuntimeDependencies => "Runtime Dependencies",
            GithubBuildTab::AllBuildDependencies => "All Build Dependencies",
        }
    }
}

impl FromStr for GithubBuildTab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "runtime" | "runtime-dependencies" => Ok(GithubBuildTab::RuntimeDependencies),
            "build" | "all-build-dependencies" => Ok(GithubBuildTab::AllBuildDependencies),
            _ => Err(format!(
                "Invalid tab: {}. Please specify 'runtime' or 'build'",
                s
            )),
        }
    }
}

/// Detail view of one GitHub Actions build and its two dependency sets.
pub struct GithubBuildView<A> {
    api: A,
    state: DetailState<i64, GithubBuild>,
    tab: GithubBuildTab,
    runtime: DependencySetView<A>,
    build_time: DependencySetView<A>,
}

impl<A> GithubBuildView<A>
where
    A: GithubBuildApi + DependencySetApi + Clone,
{
    pub fn new(api: A, id: i64) -> Self {
        Self {
            runtime: DependencySetView::new(api.clone(), 0),
            build_time: DependencySetView::new(api.clone(), 0),
            api,
            state: DetailState::new(id),
            tab: GithubBuildTab::RuntimeDependencies,
        }
    }

    pub fn github_build(&self) -> Option<&GithubBuild> {
        self.state.data()
    }

    pub fn tab(&self) -> GithubBuildTab {
        self.tab
    }

    fn tab_view(&self, tab: GithubBuildTab) -> &DependencySetView<A> {
        match tab {
            GithubBuildTab::RuntimeDependencies => &self.runtime,
            GithubBuildTab::AllBuildDependencies => &self.build_time,
        }
    }

    pub fn select_tab(&mut self, tab: GithubBuildTab) -> Result<()> {
        if self.state.data().is_some() && !self.tab_view(tab).is_present() {
            return Err(ConsoleError::TabDisabled {
                tab: tab.name().to_string(),
            }
            .into());
        }
        self.tab = tab;
        Ok(())
    }

    /// Ids start at 1, anything lower never reaches the backend.
    fn is_present(&self) -> bool {
        *self.state.key() > 0
    }

    pub async fn sync(&mut self) -> bool {
        if !self.is_present() {
            return false;
        }
        let mut applied = false;
        if let Some(ticket) = self.state.begin_fetch() {
            let result = self.api.github_build(ticket.query).await.map_err(|e| {
                tracing::error!(github_build = ticket.query, error = %e, "failed to load GitHub build");
                describe_error(&e)
            });
            applied = self.state.complete(ticket, result);
            let (runtime, build_time) = self
                .state
                .data()
                .map(|b| (b.dependency_set_id, b.build_dependency_set_id))
                .unwrap_or((0, 0));
            self.runtime.set_id(runtime);
            self.build_time.set_id(build_time);
        }
        applied |= match self.tab {
            GithubBuildTab::RuntimeDependencies => self.runtime.sync().await,
            GithubBuildTab::AllBuildDependencies => self.build_time.sync().await,
        };
        applied
    }

    pub fn screen(&self) -> Screen {
        let title = format!("Github Actions Build {}", self.state.key());
        if !self.is_present() {
            return Screen::new(title);
        }
        let Some(build) = self.state.data() else {
            return Screen::new(title)
                .with_sections(self.state.load_state().sections(Vec::new));
        };
        let tabs = GithubBuildTab::ALL
            .into_iter()
            .map(|tab| TabHeader {
                name: tab.name().to_string(),
                enabled: self.tab_view(tab).is_present(),
                selected: tab == self.tab,
            })
            .collect();
        let mut fields = vec![Field::new(
            "Health",
            Cell::Labels(StatusLabels::dependency_health(
                build.complete,
                &build.counts(),
                NO_JAVA,
            )),
        )];
        if let Some(url) = &build.url {
            fields.push(Field::new(
                "Workflow Run",
                Cell::link_or_text(url.clone(), Some(url.clone())),
            ));
        }
        let mut sections = vec![Section::fields(None, fields)];
        sections.extend(self.tab_view(self.tab).sections());
        Screen::new(format!("Github Actions Build {}", build.name))
            .with_tabs(tabs)
            .with_sections(sections)
    }
}

#[async_trait]
impl<A> InteractiveView for GithubBuildView<A>
where
    A: GithubBuildApi + DependencySetApi + Clone,
{
    async fn sync(&mut self) -> bool {
        GithubBuildView::sync(self).await
    }

    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::Filter { field, value } if field == "tab" => {
                let tab = GithubBuildTab::from_str(&value)
                    .map_err(|message| ConsoleError::Validation { message })?;
                self.select_tab(tab)
            }
            _ => Ok(()),
        }
    }

    fn screen(&self) -> Screen {
        GithubBuildView::screen(self)
    }
}

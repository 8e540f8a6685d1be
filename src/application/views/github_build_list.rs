use async_trait::async_trait;

use super::image_list::NO_JAVA;
use super::paged_list::{PageSource, PagedList};
use crate::application::read_models::Cell;
use crate::application::routes::Route;
use crate::application::view_state::ListQuery;
use crate::ports::outbound::GithubBuildApi;
use crate::rebuild_tracking::domain::{GithubBuild, Page};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::Result;

/// GitHub Actions builds analysed by the service.
pub struct GithubBuildSource<A> {
    api: A,
}

impl<A> GithubBuildSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: GithubBuildApi> PageSource for GithubBuildSource<A> {
    type Filter = ();
    type Item = GithubBuild;

    fn title(&self) -> String {
        "Github Actions Builds".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Build", "Health", "Workflow Run"]
    }

    fn row(&self, build: &GithubBuild) -> Vec<Cell> {
        vec![
            Cell::link_or_text(build.name.clone(), Some(Route::GithubBuild(build.id).path())),
            Cell::Labels(StatusLabels::dependency_health(
                build.complete,
                &build.counts(),
                NO_JAVA,
            )),
            Cell::link_or_text(build.url.clone().unwrap_or_default(), build.url.clone()),
        ]
    }

    async fn fetch(&self, query: &ListQuery<()>) -> Result<Page<GithubBuild>> {
        self.api.github_builds(query.page).await
    }
}

pub type GithubBuildList<A> = PagedList<GithubBuildSource<A>>;

pub fn github_build_list<A: GithubBuildApi>(api: A, per_page: u32) -> GithubBuildList<A> {
    PagedList::new(GithubBuildSource::new(api), per_page)
}

use async_trait::async_trait;

use super::build_list::{parse_choice, replace};
use super::paged_list::{unknown_filter, ListFilter, PageSource, PagedList};
use crate::application::read_models::{Cell, Field};
use crate::application::routes::Route;
use crate::application::view_state::{ListQuery, TextFilter};
use crate::ports::outbound::{ArtifactApi, ArtifactHistoryQuery};
use crate::rebuild_tracking::domain::{ArtifactListItem, ArtifactState, Page};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactListFilter {
    pub gav: TextFilter,
    pub state: Option<ArtifactState>,
}

impl ListFilter for ArtifactListFilter {
    const FIELDS: &'static [&'static str] = &["gav", "state"];

    fn input(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "gav" => {
                self.gav.input(value);
                Ok(())
            }
            _ => Err(unknown_filter::<Self>(field)),
        }
    }

    fn commit(&mut self, field: &str) -> Result<bool> {
        match field {
            "gav" => Ok(self.gav.commit()),
            _ => Err(unknown_filter::<Self>(field)),
        }
    }

    fn select(&mut self, field: &str, value: &str) -> Result<bool> {
        match field {
            "gav" => Ok(self.gav.set(value)),
            "state" => {
                let state = parse_choice::<ArtifactState>(value.trim())?;
                Ok(replace(&mut self.state, state))
            }
            _ => Err(unknown_filter::<Self>(field)),
        }
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if let Some(gav) = self.gav.query_value() {
            fields.push(Field::text("GAV", gav));
        }
        if let Some(state) = self.state {
            fields.push(Field::text("State", state.as_query()));
        }
        fields
    }
}

/// Artifact history rows, ordered by GAV.
pub struct ArtifactHistorySource<A> {
    api: A,
}

impl<A> ArtifactHistorySource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: ArtifactApi> PageSource for ArtifactHistorySource<A> {
    type Filter = ArtifactListFilter;
    type Item = ArtifactListItem;

    fn title(&self) -> String {
        "Artifacts".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Status", "GAV", "Message"]
    }

    fn row(&self, item: &ArtifactListItem) -> Vec<Cell> {
        vec![
            Cell::label(StatusLabels::artifact_row(item)),
            Cell::link_or_text(
                item.gav.clone(),
                Some(Route::Artifact(item.gav.clone()).path()),
            ),
            Cell::text(item.message.clone().unwrap_or_default()),
        ]
    }

    async fn fetch(&self, query: &ListQuery<ArtifactListFilter>) -> Result<Page<ArtifactListItem>> {
        let history = ArtifactHistoryQuery {
            page: query.page,
            gav: query.filter.gav.query_value(),
            state: query.filter.state,
        };
        self.api.list_artifacts(&history).await
    }

    fn order(&self, items: &mut [ArtifactListItem]) {
        items.sort_by(|a, b| a.gav.cmp(&b.gav));
    }

    /// Asks the backend to rediscover and rebuild the artifact.
    async fn rebuild(&self, item: &ArtifactListItem) -> Result<()> {
        self.api.rebuild_artifact(&item.gav).await
    }
}

pub type ArtifactList<A> = PagedList<ArtifactHistorySource<A>>;

pub fn artifact_list<A: ArtifactApi>(api: A, per_page: u32) -> ArtifactList<A> {
    PagedList::new(ArtifactHistorySource::new(api), per_page)
}

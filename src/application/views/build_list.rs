use async_trait::async_trait;
use std::str::FromStr;

use super::paged_list::{unknown_filter, ListFilter, PageSource, PagedList};
use crate::application::read_models::{Cell, Field};
use crate::application::routes::Route;
use crate::application::view_state::{ListQuery, TextFilter};
use crate::ports::outbound::{BuildApi, BuildHistoryQuery, QueueApi};
use crate::rebuild_tracking::domain::{BuildListItem, BuildState, BuildTool, Page};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Filters of the build list.
///
/// `gav` and `label_value` are search boxes; `label`, `state` and `tool` are
/// dropdowns and apply on selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildListFilter {
    pub gav: TextFilter,
    pub label: Option<String>,
    pub label_value: TextFilter,
    pub state: Option<BuildState>,
    pub tool: Option<BuildTool>,
}

impl BuildListFilter {
    fn text_field(&mut self, field: &str) -> Option<&mut TextFilter> {
        match field {
            "gav" => Some(&mut self.gav),
            "label-value" | "labelValue" => Some(&mut self.label_value),
            _ => None,
        }
    }
}

impl ListFilter for BuildListFilter {
    const FIELDS: &'static [&'static str] = &["gav", "label", "label-value", "state", "tool"];

    fn input(&mut self, field: &str, value: &str) -> Result<()> {
        let text = self
            .text_field(field)
            .ok_or_else(|| unknown_filter::<Self>(field))?;
        text.input(value);
        Ok(())
    }

    fn commit(&mut self, field: &str) -> Result<bool> {
        self.text_field(field)
            .map(TextFilter::commit)
            .ok_or_else(|| unknown_filter::<Self>(field))
    }

    fn select(&mut self, field: &str, value: &str) -> Result<bool> {
        if let Some(text) = self.text_field(field) {
            return Ok(text.set(value));
        }
        let value = value.trim();
        match field {
            "label" => {
                let label = (!value.is_empty() && value != "All").then(|| value.to_string());
                Ok(replace(&mut self.label, label))
            }
            "state" => {
                let state = parse_choice::<BuildState>(value)?;
                Ok(replace(&mut self.state, state))
            }
            "tool" => {
                let tool = parse_choice::<BuildTool>(value)?;
                Ok(replace(&mut self.tool, tool))
            }
            _ => Err(unknown_filter::<Self>(field)),
        }
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if let Some(gav) = self.gav.query_value() {
            fields.push(Field::text("GAV", gav));
        }
        if let Some(label) = &self.label {
            fields.push(Field::text("Label", label.clone()));
        }
        if let Some(value) = self.label_value.query_value() {
            fields.push(Field::text("Label Value", value));
        }
        if let Some(state) = self.state {
            fields.push(Field::text("State", state.as_query()));
        }
        if let Some(tool) = self.tool {
            fields.push(Field::text("Tool", tool.display_name()));
        }
        fields
    }
}

/// Stores `value` and reports whether it differed.
pub(crate) fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Parses a dropdown choice; blank or `all` clears it.
pub(crate) fn parse_choice<T: FromStr<Err = String>>(value: &str) -> Result<Option<T>> {
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    T::from_str(value)
        .map(Some)
        .map_err(|message| ConsoleError::Validation { message }.into())
}

/// Build history rows, ordered by SCM repository.
pub struct BuildHistorySource<A> {
    api: A,
}

impl<A> BuildHistorySource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: BuildApi + QueueApi> PageSource for BuildHistorySource<A> {
    type Filter = BuildListFilter;
    type Item = BuildListItem;

    fn title(&self) -> String {
        "Builds".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Status", "Build ID", "Repo", "Tag", "Artifacts"]
    }

    fn row(&self, item: &BuildListItem) -> Vec<Cell> {
        vec![
            Cell::Labels(StatusLabels::build_row(item)),
            Cell::link_or_text(
                item.name.clone(),
                Some(Route::Build(item.id).path()),
            ),
            Cell::text(item.scm_repo.clone()),
            Cell::text(item.tag.clone()),
            Cell::text(item.artifacts.clone()),
        ]
    }

    async fn fetch(&self, query: &ListQuery<BuildListFilter>) -> Result<Page<BuildListItem>> {
        let filter = &query.filter;
        let history = BuildHistoryQuery {
            page: query.page,
            gav: filter.gav.query_value(),
            label: filter.label.clone(),
            label_value: filter.label_value.query_value(),
            state: filter.state,
            tool: filter.tool,
        };
        self.api.list_builds(&history).await
    }

    fn order(&self, items: &mut [BuildListItem]) {
        items.sort_by(|a, b| a.scm_repo.cmp(&b.scm_repo));
    }

    async fn rebuild(&self, item: &BuildListItem) -> Result<()> {
        self.api.queue_build(&item.name).await
    }

    fn mark_queued(&self, item: &mut BuildListItem) {
        item.in_queue = true;
    }
}

pub type BuildList<A> = PagedList<BuildHistorySource<A>>;

pub fn build_list<A: BuildApi + QueueApi>(api: A, per_page: u32) -> BuildList<A> {
    PagedList::new(BuildHistorySource::new(api), per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_selection_commits_immediately() {
        let mut filter = BuildListFilter::default();
        assert!(filter.select("state", "failed").unwrap());
        assert!(!filter.select("state", "failed").unwrap());
        assert_eq!(filter.state, Some(BuildState::Failed));
        assert!(filter.select("state", "all").unwrap());
        assert_eq!(filter.state, None);
    }

    #[test]
    fn test_typing_does_not_commit() {
        let mut filter = BuildListFilter::default();
        filter.input("gav", "org.apache").unwrap();
        assert!(filter.gav.query_value().is_none());
        assert!(filter.commit("gav").unwrap());
        assert_eq!(filter.gav.query_value().as_deref(), Some("org.apache"));
    }

    #[test]
    fn test_label_all_clears() {
        let mut filter = BuildListFilter::default();
        filter.select("label", "team").unwrap();
        assert!(filter.select("label", "All").unwrap());
        assert!(filter.label.is_none());
    }

    #[test]
    fn test_invalid_choice_and_unknown_field() {
        let mut filter = BuildListFilter::default();
        assert!(filter.select("tool", "bazel").is_err());
        assert!(filter.input("repo", "x").is_err());
    }
}

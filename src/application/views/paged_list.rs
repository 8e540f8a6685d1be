use async_trait::async_trait;

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Cell, Field, Pagination, Screen, Section};
use crate::application::view_state::{describe_error, ListQuery, PagedListState};
use crate::rebuild_tracking::domain::Page;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Filter fields of a list, addressed by name from the command line and the
/// interactive loop.
pub trait ListFilter: Clone + Default + Send + Sync {
    const FIELDS: &'static [&'static str];

    /// Types into a text field. Never changes a committed value.
    fn input(&mut self, field: &str, value: &str) -> Result<()> {
        let _ = value;
        Err(unknown_filter::<Self>(field))
    }

    /// Commits a text field. Returns whether the committed value changed.
    fn commit(&mut self, field: &str) -> Result<bool> {
        Err(unknown_filter::<Self>(field))
    }

    /// Sets a field in one step. Returns whether the committed value changed.
    fn select(&mut self, field: &str, value: &str) -> Result<bool> {
        let _ = value;
        Err(unknown_filter::<Self>(field))
    }

    /// Active filters, shown above the table.
    fn fields(&self) -> Vec<Field> {
        Vec::new()
    }
}

impl ListFilter for () {
    const FIELDS: &'static [&'static str] = &[];
}

pub(crate) fn unknown_filter<F: ListFilter>(field: &str) -> anyhow::Error {
    let available = if F::FIELDS.is_empty() {
        "none".to_string()
    } else {
        F::FIELDS.join(", ")
    };
    ConsoleError::UnknownFilter {
        field: field.to_string(),
        available,
    }
    .into()
}

/// Where a paged list gets its rows from and how it shows them.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Filter: ListFilter;
    type Item: Send + Sync;

    fn title(&self) -> String;

    fn columns(&self) -> &'static [&'static str];

    fn row(&self, item: &Self::Item) -> Vec<Cell>;

    async fn fetch(&self, query: &ListQuery<Self::Filter>) -> Result<Page<Self::Item>>;

    /// Sections shown below the table, e.g. expanded dependency rows.
    fn details(&self, items: &[Self::Item]) -> Vec<Section> {
        let _ = items;
        Vec::new()
    }

    /// Client side ordering applied to each fetched page.
    fn order(&self, items: &mut [Self::Item]) {
        let _ = items;
    }

    /// Row action. Lists without one refuse it.
    async fn rebuild(&self, item: &Self::Item) -> Result<()> {
        let _ = item;
        Err(ConsoleError::Validation {
            message: format!("rows of '{}' cannot be rebuilt", self.title()),
        }
        .into())
    }

    /// Local patch of a row after a successful rebuild request.
    fn mark_queued(&self, item: &mut Self::Item) {
        let _ = item;
    }
}

/// A paged list view: a [`PageSource`] plus the list state it drives.
pub struct PagedList<S: PageSource> {
    source: S,
    state: PagedListState<S::Filter, S::Item>,
}

impl<S: PageSource> PagedList<S> {
    pub fn new(source: S, per_page: u32) -> Self {
        Self {
            source,
            state: PagedListState::new(per_page),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &PagedListState<S::Filter, S::Item> {
        &self.state
    }

    pub fn set_page(&mut self, page: u32) {
        self.state.set_page(page);
    }

    pub fn set_per_page(&mut self, per_page: u32, page: u32) {
        self.state.set_per_page(per_page, page);
    }

    pub fn input(&mut self, field: &str, value: &str) -> Result<()> {
        let mut outcome = Ok(());
        self.state.edit_filter(|filter| {
            outcome = filter.input(field, value);
            false
        });
        outcome
    }

    pub fn commit(&mut self, field: &str) -> Result<bool> {
        let mut outcome = Ok(false);
        self.state.edit_filter(|filter| {
            outcome = filter.commit(field);
            matches!(outcome, Ok(true))
        });
        outcome
    }

    pub fn select(&mut self, field: &str, value: &str) -> Result<bool> {
        let mut outcome = Ok(false);
        self.state.edit_filter(|filter| {
            outcome = filter.select(field, value);
            matches!(outcome, Ok(true))
        });
        outcome
    }

    /// Issues the pending fetch, if any, and applies its result.
    pub async fn sync(&mut self) -> bool {
        let Some(ticket) = self.state.begin_fetch() else {
            return false;
        };
        tracing::debug!(
            list = %self.source.title(),
            page = ticket.query.page.page,
            per_page = ticket.query.page.per_page,
            "fetching page"
        );
        let result = match self.source.fetch(&ticket.query).await {
            Ok(mut page) => {
                self.source.order(&mut page.items);
                Ok(page)
            }
            Err(e) => {
                tracing::error!(list = %self.source.title(), error = %e, "failed to load list");
                Err(describe_error(&e))
            }
        };
        self.state.complete(ticket, result)
    }

    /// Requests a rebuild of one row and flags it as queued on success.
    pub async fn rebuild(&mut self, index: usize) -> Result<()> {
        let len = self.state.items().len();
        let item = self
            .state
            .items()
            .get(index)
            .ok_or(ConsoleError::RowOutOfRange { index, len })?;
        if let Err(e) = self.source.rebuild(item).await {
            tracing::error!(list = %self.source.title(), row = index, error = %e, "rebuild request failed");
            return Err(e);
        }
        let source = &self.source;
        self.state.patch_item(index, |item| source.mark_queued(item));
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        let filters = self.state.filter().fields();
        let mut screen = Screen::new(self.source.title());
        if !filters.is_empty() {
            screen = screen.with_section(Section::fields(Some("Filters"), filters));
        }
        screen
            .with_sections(self.state.load_state().sections(|| {
                let rows = self
                    .state
                    .items()
                    .iter()
                    .map(|item| self.source.row(item))
                    .collect();
                let mut sections = vec![Section::table_or_empty(self.source.columns(), rows)];
                sections.extend(self.source.details(self.state.items()));
                sections
            }))
            .with_pagination(Pagination::new(
                self.state.page(),
                self.state.per_page(),
                self.state.total_count(),
            ))
    }
}

#[async_trait]
impl<S: PageSource> InteractiveView for PagedList<S> {
    async fn sync(&mut self) -> bool {
        PagedList::sync(self).await
    }

    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::Page(page) => self.set_page(page),
            ViewCommand::PerPage(per_page) => self.set_per_page(per_page, 1),
            ViewCommand::Next => {
                let next = self.state.page().saturating_add(1);
                if u64::from(next) <= self.state.page_count() {
                    self.set_page(next);
                }
            }
            ViewCommand::Previous => self.set_page(self.state.page().saturating_sub(1)),
            ViewCommand::Input { field, value } => self.input(&field, &value)?,
            ViewCommand::Commit { field } => {
                self.commit(&field)?;
            }
            ViewCommand::Filter { field, value } => {
                self.select(&field, &value)?;
            }
            ViewCommand::Rebuild(index) => self.rebuild(index).await?,
            ViewCommand::Help | ViewCommand::Quit => {}
        }
        Ok(())
    }

    fn screen(&self) -> Screen {
        PagedList::screen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::EMPTY_HEADING;
    use std::sync::Mutex;

    struct Numbers {
        calls: Mutex<Vec<ListQuery<()>>>,
        fail: bool,
    }

    impl Numbers {
        fn new(fail: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl PageSource for Numbers {
        type Filter = ();
        type Item = u32;

        fn title(&self) -> String {
            "Numbers".to_string()
        }

        fn columns(&self) -> &'static [&'static str] {
            &["Value"]
        }

        fn row(&self, item: &u32) -> Vec<Cell> {
            vec![Cell::text(item.to_string())]
        }

        async fn fetch(&self, query: &ListQuery<()>) -> Result<Page<u32>> {
            self.calls.lock().unwrap().push(query.clone());
            if self.fail {
                anyhow::bail!("connection refused");
            }
            let start = (query.page.page - 1) * query.page.per_page;
            let items = (start..start + query.page.per_page).filter(|n| *n < 5).collect();
            Ok(Page::new(items, 5, query.page.page, query.page.per_page))
        }

        fn order(&self, items: &mut [u32]) {
            items.sort_by(|a, b| b.cmp(a));
        }
    }

    #[tokio::test]
    async fn test_sync_fetches_only_when_dirty() {
        let mut list = PagedList::new(Numbers::new(false), 2);
        assert!(list.sync().await);
        assert!(!list.sync().await);
        list.set_page(2);
        assert!(list.sync().await);
        assert_eq!(list.source().calls.lock().unwrap().len(), 2);
        assert_eq!(list.state().items(), &[3, 2]);
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_error() {
        let mut list = PagedList::new(Numbers::new(true), 2);
        list.sync().await;
        let screen = list.screen();
        assert_eq!(screen.error_message(), Some("connection refused"));
        assert!(!list.sync().await);
    }

    #[tokio::test]
    async fn test_empty_page_renders_placeholder() {
        let mut list = PagedList::new(Numbers::new(false), 2);
        list.set_page(9);
        list.sync().await;
        let screen = list.screen();
        assert!(screen.is_empty_state());
        assert!(screen.sections.iter().any(|s| matches!(
            s,
            Section::Empty { heading, .. } if heading == EMPTY_HEADING
        )));
    }

    #[tokio::test]
    async fn test_rebuild_refused_without_action() {
        let mut list = PagedList::new(Numbers::new(false), 2);
        list.sync().await;
        assert!(list.rebuild(0).await.is_err());
        let err = list.rebuild(7).await.unwrap_err();
        assert!(err.to_string().contains("Row 7 does not exist"));
    }

    #[tokio::test]
    async fn test_unknown_filter_lists_available() {
        let mut list = PagedList::new(Numbers::new(false), 2);
        let err = list.select("gav", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown filter 'gav'"));
    }
}

use super::load_state::LoadState;
use super::sequencer::{FetchTicket, RequestSequencer};
use crate::rebuild_tracking::domain::{Page, PageRequest, DEFAULT_PER_PAGE};

/// Parameters of one list fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub page: PageRequest,
    pub filter: F,
}

/// State of a paginated, filterable list.
///
/// Any change to the page, the page size or a committed filter marks the list
/// dirty; [`PagedListState::begin_fetch`] hands out exactly one ticket per dirty
/// period. A new list starts dirty, so the first sync always fetches.
#[derive(Debug, Clone)]
pub struct PagedListState<F, T> {
    page: u32,
    per_page: u32,
    filter: F,
    items: Vec<T>,
    total_count: u64,
    load: LoadState,
    dirty: bool,
    sequencer: RequestSequencer,
}

impl<F: Clone + Default, T> PagedListState<F, T> {
    pub fn new(per_page: u32) -> Self {
        Self::with_filter(per_page, F::default())
    }

    pub fn with_filter(per_page: u32, filter: F) -> Self {
        Self {
            page: 1,
            per_page: normalize_per_page(per_page),
            filter,
            items: Vec::new(),
            total_count: 0,
            load: LoadState::Loading,
            dirty: true,
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn page_count(&self) -> u64 {
        Page::<()>::page_count(self.total_count, self.per_page)
    }

    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if page != self.page {
            self.page = page;
            self.dirty = true;
        }
    }

    /// Page size change from the pagination control, which also supplies the
    /// page to show (normally 1).
    pub fn set_per_page(&mut self, per_page: u32, page: u32) {
        let per_page = normalize_per_page(per_page);
        let page = page.max(1);
        if per_page != self.per_page || page != self.page {
            self.per_page = per_page;
            self.page = page;
            self.dirty = true;
        }
    }

    /// Mutates the filter. `edit` returns whether a committed value changed;
    /// transient edits return false and leave the list clean.
    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut F) -> bool) -> bool {
        let changed = edit(&mut self.filter);
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Starts a fetch if anything changed since the last one.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket<ListQuery<F>>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        self.load = LoadState::Loading;
        Some(self.sequencer.issue(ListQuery {
            page: PageRequest::new(self.page, self.per_page),
            filter: self.filter.clone(),
        }))
    }

    /// Applies a fetch result. Results of superseded fetches are dropped and
    /// `false` is returned.
    ///
    /// When the backend normalized the page coordinates, the state adopts them
    /// without scheduling another fetch.
    pub fn complete(
        &mut self,
        ticket: FetchTicket<ListQuery<F>>,
        result: Result<Page<T>, String>,
    ) -> bool {
        if !self.sequencer.is_current(&ticket) {
            return false;
        }
        match result {
            Ok(page) => {
                if page.page_no > 0 {
                    self.page = page.page_no;
                }
                if page.per_page > 0 {
                    self.per_page = page.per_page;
                }
                self.items = page.items;
                self.total_count = page.count;
                self.load = LoadState::Success;
            }
            Err(message) => {
                self.items.clear();
                self.total_count = 0;
                self.load = LoadState::Error { message };
            }
        }
        true
    }

    /// Patches one row in place without refetching.
    pub fn patch_item(&mut self, index: usize, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }

    pub fn sort_items_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) {
        self.items.sort_by_key(key);
    }
}

fn normalize_per_page(per_page: u32) -> u32 {
    if per_page == 0 {
        DEFAULT_PER_PAGE
    } else {
        per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = PagedListState<String, u32>;

    fn page(items: Vec<u32>, count: u64, page_no: u32, per_page: u32) -> Page<u32> {
        Page::new(items, count, page_no, per_page)
    }

    #[test]
    fn test_new_list_fetches_once() {
        let mut state = State::new(20);
        let ticket = state.begin_fetch().unwrap();
        assert_eq!(ticket.query.page, PageRequest::new(1, 20));
        assert!(state.begin_fetch().is_none());
        assert!(state.load_state().is_loading());
    }

    #[test]
    fn test_page_change_marks_dirty_once() {
        let mut state = State::new(20);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Ok(page(vec![1], 50, 1, 20)));

        state.set_page(2);
        state.set_page(2);
        let ticket = state.begin_fetch().unwrap();
        assert_eq!(ticket.query.page.page, 2);
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_same_page_is_not_a_change() {
        let mut state = State::new(20);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Ok(page(vec![], 0, 1, 20)));
        state.set_page(1);
        state.set_per_page(20, 1);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_per_page_change_uses_supplied_page() {
        let mut state = State::new(20);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Ok(page(vec![], 100, 1, 20)));
        state.set_page(4);
        let _ = state.begin_fetch();

        state.set_per_page(50, 1);
        let ticket = state.begin_fetch().unwrap();
        assert_eq!(ticket.query.page, PageRequest::new(1, 50));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = State::new(20);
        let first = state.begin_fetch().unwrap();
        state.set_page(2);
        let second = state.begin_fetch().unwrap();

        assert!(state.complete(second, Ok(page(vec![2], 40, 2, 20))));
        assert!(!state.complete(first, Ok(page(vec![1], 40, 1, 20))));
        assert_eq!(state.items(), &[2]);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_error_parks_until_change() {
        let mut state = State::new(20);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Err("boom".to_string()));
        assert_eq!(state.load_state().error(), Some("boom"));
        assert!(state.begin_fetch().is_none());

        state.set_page(3);
        assert!(state.begin_fetch().is_some());
    }

    #[test]
    fn test_server_normalized_paging_is_adopted_without_refetch() {
        let mut state = State::new(20);
        state.set_per_page(0, 1);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Ok(page(vec![1, 2], 2, 1, 20)));
        assert_eq!(state.per_page(), 20);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_transient_filter_edit_is_clean() {
        let mut state = State::new(20);
        let _ = state.begin_fetch();
        assert!(!state.edit_filter(|_| false));
        assert!(!state.is_dirty());
        assert!(state.edit_filter(|f| {
            f.push_str("gav");
            true
        }));
        assert_eq!(state.begin_fetch().unwrap().query.filter, "gav");
    }

    #[test]
    fn test_patch_item() {
        let mut state = State::new(20);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Ok(page(vec![1, 2], 2, 1, 20)));
        assert!(state.patch_item(1, |v| *v = 9));
        assert!(!state.patch_item(5, |v| *v = 9));
        assert_eq!(state.items(), &[1, 9]);
        assert!(!state.is_dirty());
    }
}

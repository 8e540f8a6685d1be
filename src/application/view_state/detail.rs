use super::load_state::LoadState;
use super::sequencer::{FetchTicket, RequestSequencer};

/// State of a view showing one entity, fetched by key.
///
/// Fetches on creation and whenever the key changes. Like
/// [`super::PagedListState`], a failed fetch stays failed until the key changes
/// or [`DetailState::reload`] is called.
#[derive(Debug, Clone)]
pub struct DetailState<K, T> {
    key: K,
    data: Option<T>,
    load: LoadState,
    dirty: bool,
    sequencer: RequestSequencer,
}

impl<K: Clone + PartialEq, T> DetailState<K, T> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            data: None,
            load: LoadState::Loading,
            dirty: true,
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Points the view at another entity. Returns whether the key changed.
    pub fn set_key(&mut self, key: K) -> bool {
        if key == self.key {
            return false;
        }
        self.key = key;
        self.dirty = true;
        true
    }

    /// Fetches the current key again on the next sync.
    pub fn reload(&mut self) {
        self.dirty = true;
    }

    pub fn begin_fetch(&mut self) -> Option<FetchTicket<K>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        self.load = LoadState::Loading;
        Some(self.sequencer.issue(self.key.clone()))
    }

    /// Applies a fetch result; superseded results are dropped.
    pub fn complete(&mut self, ticket: FetchTicket<K>, result: Result<T, String>) -> bool {
        if !self.sequencer.is_current(&ticket) {
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.load = LoadState::Success;
            }
            Err(message) => {
                self.data = None;
                self.load = LoadState::Error { message };
            }
        }
        true
    }

    /// Local change to the loaded entity, e.g. the optimistic queue flag.
    pub fn patch(&mut self, patch: impl FnOnce(&mut T)) -> bool {
        match self.data.as_mut() {
            Some(data) => {
                patch(data);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetches_on_creation_and_key_change() {
        let mut state: DetailState<String, u32> = DetailState::new("a".to_string());
        let ticket = state.begin_fetch().unwrap();
        assert_eq!(ticket.query, "a");
        state.complete(ticket, Ok(1));
        assert_eq!(state.data(), Some(&1));
        assert!(state.begin_fetch().is_none());

        assert!(!state.set_key("a".to_string()));
        assert!(state.set_key("b".to_string()));
        assert_eq!(state.begin_fetch().unwrap().query, "b");
    }

    #[test]
    fn test_stale_result_for_previous_key_is_dropped() {
        let mut state: DetailState<i64, &str> = DetailState::new(1);
        let first = state.begin_fetch().unwrap();
        state.set_key(2);
        let second = state.begin_fetch().unwrap();

        assert!(state.complete(second, Ok("two")));
        assert!(!state.complete(first, Ok("one")));
        assert_eq!(state.data(), Some(&"two"));
    }

    #[test]
    fn test_error_clears_data() {
        let mut state: DetailState<i64, u32> = DetailState::new(1);
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Ok(5));
        state.reload();
        let ticket = state.begin_fetch().unwrap();
        state.complete(ticket, Err("gone".to_string()));
        assert!(state.data().is_none());
        assert_eq!(state.load_state().error(), Some("gone"));
        assert!(!state.patch(|v| *v = 6));
    }
}

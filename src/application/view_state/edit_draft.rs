use super::load_state::LoadState;
use crate::shared::error::ConsoleError;

/// A local, editable copy of a backend record.
///
/// Loaded once when the modal opens. After a submission returns a pull
/// request URL the draft is locked: it can no longer be edited or submitted.
#[derive(Debug, Clone)]
pub struct EditDraft<T> {
    draft: Option<T>,
    load: LoadState,
    pr_url: Option<String>,
}

impl<T: Clone> Default for EditDraft<T> {
    fn default() -> Self {
        Self {
            draft: None,
            load: LoadState::Loading,
            pr_url: None,
        }
    }
}

impl<T: Clone> EditDraft<T> {
    pub fn loaded(&mut self, result: Result<T, String>) {
        match result {
            Ok(record) => {
                self.draft = Some(record);
                self.load = LoadState::Success;
            }
            Err(message) => {
                self.draft = None;
                self.load = LoadState::Error { message };
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    /// Mutable access for form edits; `None` before loading or once locked.
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        if self.is_locked() {
            return None;
        }
        self.draft.as_mut()
    }

    pub fn pr_url(&self) -> Option<&str> {
        self.pr_url.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.pr_url.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_some() && !self.is_locked()
    }

    /// The payload for Confirm.
    ///
    /// # Errors
    /// `AlreadySubmitted` once a pull request exists, `EditNotLoaded` before
    /// the record arrived.
    pub fn submission(&self) -> Result<T, ConsoleError> {
        if let Some(pr_url) = &self.pr_url {
            return Err(ConsoleError::AlreadySubmitted {
                pr_url: pr_url.clone(),
            });
        }
        self.draft.clone().ok_or(ConsoleError::EditNotLoaded)
    }

    pub fn submitted(&mut self, pr_url: Option<String>) {
        if let Some(url) = pr_url.filter(|u| !u.trim().is_empty()) {
            self.pr_url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_locks_after_pull_request() {
        let mut draft: EditDraft<String> = EditDraft::default();
        assert!(matches!(draft.submission(), Err(ConsoleError::EditNotLoaded)));

        draft.loaded(Ok("v1".to_string()));
        draft.draft_mut().unwrap().push_str("-edited");
        assert_eq!(draft.submission().unwrap(), "v1-edited");

        draft.submitted(Some("https://github.com/acme/recipes/pull/7".to_string()));
        assert!(draft.is_locked());
        assert!(!draft.can_submit());
        assert!(draft.draft_mut().is_none());
        assert!(matches!(
            draft.submission(),
            Err(ConsoleError::AlreadySubmitted { .. })
        ));
    }

    #[test]
    fn test_submission_without_pull_request_stays_open() {
        let mut draft: EditDraft<u32> = EditDraft::default();
        draft.loaded(Ok(1));
        draft.submitted(None);
        assert!(draft.can_submit());
    }

    #[test]
    fn test_failed_load() {
        let mut draft: EditDraft<u32> = EditDraft::default();
        draft.loaded(Err("not found".to_string()));
        assert_eq!(draft.load_state().error(), Some("not found"));
        assert!(!draft.can_submit());
    }
}

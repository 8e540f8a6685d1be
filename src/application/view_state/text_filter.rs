use serde::Serialize;

/// A search box: what is typed versus what has been applied.
///
/// Typing only changes the transient text. The committed text, which is
/// what list queries use, changes on [`TextFilter::commit`] (Enter or blur).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextFilter {
    committed: String,
    transient: String,
}

impl TextFilter {
    pub fn input(&mut self, text: &str) {
        self.transient = text.to_string();
    }

    /// Applies the transient text. Returns whether the committed value changed.
    pub fn commit(&mut self) -> bool {
        if self.transient == self.committed {
            return false;
        }
        self.committed = self.transient.clone();
        true
    }

    /// Types `text` and commits it in one step.
    pub fn set(&mut self, text: &str) -> bool {
        self.input(text);
        self.commit()
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn transient(&self) -> &str {
        &self.transient
    }

    /// Committed value as a query parameter; blank filters are omitted.
    pub fn query_value(&self) -> Option<String> {
        let trimmed = self.committed.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

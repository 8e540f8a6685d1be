use async_trait::async_trait;

use crate::application::read_models::Screen;
use crate::shared::Result;

/// A user event aimed at the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Page(u32),
    PerPage(u32),
    Next,
    Previous,
    /// Types into a text filter without applying it.
    Input { field: String, value: String },
    /// Applies what was typed into a text filter (Enter / blur).
    Commit { field: String },
    /// Sets a filter in one step: dropdown selection, or type plus commit.
    Filter { field: String, value: String },
    /// Row action on the zero based row index of the current page.
    Rebuild(usize),
    Help,
    Quit,
}

/// A view that the interactive loop can drive.
#[async_trait]
pub trait InteractiveView: Send {
    /// Fetches if anything changed since the last sync. Returns whether a
    /// fetch completed and was applied.
    async fn sync(&mut self) -> bool;

    async fn dispatch(&mut self, command: ViewCommand) -> Result<()>;

    fn screen(&self) -> Screen;
}

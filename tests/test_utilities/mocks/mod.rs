/// Mock implementations for testing
mod mock_console_api;
mod mock_progress_reporter;

pub use mock_console_api::MockConsoleApi;
pub use mock_progress_reporter::{MockPresenter, MockProgressReporter};

use crate::shared::Result;

/// OutputPresenter port for rendered screens and raw logs
///
/// Implemented by the stdout presenter and by the `--output <path>` writer.
pub trait OutputPresenter {
    /// Writes one rendered screen, or a log body, to the destination.
    ///
    /// # Errors
    /// Returns an error when the destination cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}

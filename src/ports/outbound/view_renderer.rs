use crate::application::read_models::Screen;
use crate::shared::Result;

/// ViewRenderer port for turning a screen read model into output text
///
/// Rendering is pure: the same screen always yields the same text.
pub trait ViewRenderer {
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, screen: &Screen) -> Result<String>;
}

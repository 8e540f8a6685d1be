/// Renderer adapters for the supported output formats
mod json_renderer;
mod text_renderer;

pub use json_renderer::JsonRenderer;
pub use text_renderer::TextRenderer;

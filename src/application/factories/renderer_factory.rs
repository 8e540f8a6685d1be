use crate::adapters::outbound::formatters::{JsonRenderer, TextRenderer};
use crate::ports::outbound::ViewRenderer;

/// Output format of rendered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererType {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for RendererType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(RendererType::Text),
            "json" => Ok(RendererType::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

/// Factory for creating view renderers
///
/// Selects the renderer adapter for the requested output format.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified format
    ///
    /// # Arguments
    /// * `renderer_type` - The output format
    /// * `color` - Whether text output may use ANSI colours. Ignored for JSON.
    pub fn create(renderer_type: RendererType, color: bool) -> Box<dyn ViewRenderer> {
        match renderer_type {
            RendererType::Text if color => Box::new(TextRenderer::new()),
            RendererType::Text => Box::new(TextRenderer::plain()),
            RendererType::Json => Box::new(JsonRenderer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::Screen;
    use std::str::FromStr;

    #[test]
    fn test_renderer_type_from_str() {
        assert_eq!(RendererType::from_str("JSON").unwrap(), RendererType::Json);
        assert_eq!(RendererType::from_str("text").unwrap(), RendererType::Text);
        assert!(RendererType::from_str("markdown").is_err());
    }

    #[test]
    fn test_create_json_renderer() {
        let renderer = RendererFactory::create(RendererType::Json, true);
        let output = renderer.render(&Screen::new("Deployments")).unwrap();
        assert!(output.starts_with('{'));
    }

    #[test]
    fn test_create_plain_text_renderer() {
        let renderer = RendererFactory::create(RendererType::Text, false);
        let output = renderer.render(&Screen::new("Deployments")).unwrap();
        assert!(output.starts_with("Deployments\n"));
    }
}

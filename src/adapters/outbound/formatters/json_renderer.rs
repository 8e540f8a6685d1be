use crate::application::read_models::Screen;
use crate::ports::outbound::ViewRenderer;
use crate::shared::Result;

/// JsonRenderer adapter for machine readable output
///
/// Emits the screen read model as pretty printed JSON, one document per
/// rendered view.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for JsonRenderer {
    fn render(&self, screen: &Screen) -> Result<String> {
        Ok(serde_json::to_string_pretty(screen)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{Cell, Pagination, Section};

    #[test]
    fn test_json_output_structure() {
        let screen = Screen::new("Build Queue")
            .with_section(Section::table_or_empty(
                &["Priority", "Artifact"],
                vec![vec![Cell::text(""), Cell::text("io.acme:lib:1.0")]],
            ))
            .with_pagination(Pagination::new(1, 20, 1));
        let output = JsonRenderer::new().render(&screen).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["title"], "Build Queue");
        assert_eq!(value["sections"][0]["kind"], "table");
        assert_eq!(value["sections"][0]["rows"][0][1]["text"], "io.acme:lib:1.0");
        assert_eq!(value["pagination"]["totalCount"], 1);
        assert!(value.get("tabs").is_none());
    }
}

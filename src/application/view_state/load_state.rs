use serde::Serialize;

use crate::application::read_models::Section;

/// Fetch status of one view instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Success,
    Error { message: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoadState::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Sections for this state: the loading placeholder, the error heading,
    /// or whatever `content` produces once loaded.
    pub fn sections(&self, content: impl FnOnce() -> Vec<Section>) -> Vec<Section> {
        match self {
            LoadState::Loading => vec![Section::Loading],
            LoadState::Error { message } => vec![Section::Error {
                message: message.clone(),
            }],
            LoadState::Success => content(),
        }
    }
}

/// Flattens an error and its causes into the message shown in the error state.
pub fn describe_error(error: &anyhow::Error) -> String {
    format!("{:#}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_for_each_state() {
        assert_eq!(
            LoadState::Loading.sections(Vec::new),
            vec![Section::Loading]
        );
        let error = LoadState::Error {
            message: "boom".to_string(),
        };
        assert_eq!(error.error(), Some("boom"));
        assert!(matches!(
            error.sections(Vec::new).as_slice(),
            [Section::Error { .. }]
        ));
        assert_eq!(
            LoadState::Success.sections(|| vec![Section::empty()]),
            vec![Section::empty()]
        );
    }

    #[test]
    fn test_describe_error_includes_context() {
        let err = anyhow::anyhow!("connection refused").context("Failed to load builds");
        assert_eq!(
            describe_error(&err),
            "Failed to load builds: connection refused"
        );
    }
}

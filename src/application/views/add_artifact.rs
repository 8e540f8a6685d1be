use async_trait::async_trait;
use futures::future::join_all;
use std::fmt;

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Field, Screen, Section};
use crate::application::view_state::describe_error;
use crate::ports::outbound::QueueApi;
use crate::rebuild_tracking::services::parse_gav_list;
use crate::shared::error::{ApiError, ConsoleError};
use crate::shared::Result;

/// Name of the text box in interactive commands.
pub const GAVS_FIELD: &str = "gavs";

/// Outcome of queueing one GAV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub gav: String,
    /// `None` when accepted, otherwise the reason given by the backend.
    pub rejection: Option<String>,
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rejection {
            None => write!(f, "{}@submitted", self.gav),
            Some(reason) => write!(f, "{}@{}", self.gav, reason),
        }
    }
}

/// The Add Artifact form: a free text box of GAVs and the results of the
/// last submission.
pub struct AddArtifactForm<A> {
    api: A,
    input: String,
    results: Vec<SubmissionResult>,
}

impl<A: QueueApi> AddArtifactForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            input: String::new(),
            results: Vec::new(),
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &[SubmissionResult] {
        &self.results
    }

    /// Queues every GAV in the input concurrently and waits for all of them.
    ///
    /// Results keep input order. The input is cleared afterwards; blank input
    /// sends nothing.
    pub async fn submit(&mut self) -> &[SubmissionResult] {
        let gavs = parse_gav_list(&self.input);
        if gavs.is_empty() {
            return &self.results;
        }
        tracing::debug!(count = gavs.len(), "queueing artifacts");
        let api = &self.api;
        let outcomes = join_all(gavs.iter().map(|gav| api.queue_artifact(gav))).await;
        self.results = gavs
            .into_iter()
            .zip(outcomes)
            .map(|(gav, outcome)| {
                let rejection = outcome.err().map(|e| {
                    tracing::error!(gav = %gav, error = %e, "failed to queue artifact");
                    rejection_reason(&e)
                });
                SubmissionResult { gav, rejection }
            })
            .collect();
        self.input.clear();
        &self.results
    }

    pub fn screen(&self) -> Screen {
        let mut screen = Screen::new("Add Artifact");
        if !self.input.is_empty() {
            screen = screen.with_section(Section::fields(
                None,
                vec![Field::text("GAVs", self.input.clone())],
            ));
        }
        if self.results.is_empty() {
            return screen;
        }
        screen.with_section(Section::text(
            Some("Results"),
            self.results.iter().map(ToString::to_string).collect(),
        ))
    }
}

fn check_field(field: &str) -> Result<()> {
    if field != GAVS_FIELD {
        return Err(ConsoleError::UnknownFilter {
            field: field.to_string(),
            available: GAVS_FIELD.to_string(),
        }
        .into());
    }
    Ok(())
}

#[async_trait]
impl<A: QueueApi> InteractiveView for AddArtifactForm<A> {
    async fn sync(&mut self) -> bool {
        false
    }

    /// `type gavs <text>` fills the box, `commit gavs` submits it and
    /// `filter gavs <text>` does both.
    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::Input { field, value } => {
                check_field(&field)?;
                self.set_input(&value);
            }
            ViewCommand::Commit { field } => {
                check_field(&field)?;
                self.submit().await;
            }
            ViewCommand::Filter { field, value } => {
                check_field(&field)?;
                self.set_input(&value);
                self.submit().await;
            }
            _ => {}
        }
        Ok(())
    }

    fn screen(&self) -> Screen {
        AddArtifactForm::screen(self)
    }
}

fn rejection_reason(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ApiError>() {
        Some(api_error) => api_error.reason(),
        None => describe_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_display() {
        let ok = SubmissionResult {
            gav: "com.foo:bar:1.0".to_string(),
            rejection: None,
        };
        assert_eq!(ok.to_string(), "com.foo:bar:1.0@submitted");
        let rejected = SubmissionResult {
            gav: "com.foo:baz:2.0".to_string(),
            rejection: Some("Unknown artifact".to_string()),
        };
        assert_eq!(rejected.to_string(), "com.foo:baz:2.0@Unknown artifact");
        assert!(!rejected.is_accepted());
    }

    #[test]
    fn test_rejection_reason_prefers_api_details() {
        let error: anyhow::Error = ApiError {
            status: 400,
            method: "POST".to_string(),
            url: "http://localhost:8080/api/builds/queue/add".to_string(),
            details: Some("GAV not found".to_string()),
        }
        .into();
        assert_eq!(rejection_reason(&error), "GAV not found");
        assert_eq!(
            rejection_reason(&anyhow::anyhow!("connection refused")),
            "connection refused"
        );
    }
}

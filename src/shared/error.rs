use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a rejected action from a broken
/// invocation or an unreachable backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every request was accepted
    Success = 0,
    /// The backend rejected at least one submitted action
    ActionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ActionFailed => write!(f, "Action Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// A non-success response from the rebuild service.
///
/// `details` carries the `details` field of the JSON error body when the
/// backend sent one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Request failed with status code {status}: {method} {url}{}", details_suffix(.details))]
pub struct ApiError {
    pub status: u16,
    pub method: String,
    pub url: String,
    pub details: Option<String>,
}

impl ApiError {
    /// The text shown next to a rejected submission.
    pub fn reason(&self) -> String {
        match &self.details {
            Some(details) if !details.trim().is_empty() => details.clone(),
            _ => format!("status code {}", self.status),
        }
    }
}

fn details_suffix(details: &Option<String>) -> String {
    match details {
        Some(d) if !d.trim().is_empty() => format!("\nDetails: {}", d),
        _ => String::new(),
    }
}

/// Application-specific errors for the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Invalid server URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http:// or https:// URL, e.g. http://localhost:8080")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Unknown route: {path}\n\n💡 Hint: Run `rebuild-console routes` to list the available pages")]
    UnknownRoute { path: String },

    #[error("The '{tab}' tab has no data for this record")]
    TabDisabled { tab: String },

    #[error("This edit was already submitted: {pr_url}\n\n💡 Hint: Reopen the edit to submit another change")]
    AlreadySubmitted { pr_url: String },

    #[error("Nothing to submit: the edit form has not finished loading")]
    EditNotLoaded,

    #[error("'{action}' must be confirmed\n\n💡 Hint: Pass --yes to run this action")]
    ConfirmationRequired { action: String },

    #[error("Row {index} does not exist on this page ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Unknown filter '{field}'\n\n💡 Hint: Available filters: {available}")]
    UnknownFilter { field: String, available: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for user supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

use std::str::FromStr;

use crate::rebuild_tracking::domain::{BuildAttempt, BuildTool};

/// Human readable name of a build attempt, e.g. `JDK 17 Maven 3.8.8 2024-03-01T10:15:30Z`.
pub struct AttemptLabel;

impl AttemptLabel {
    /// The backend label when present, otherwise one derived from the tooling.
    pub fn describe(attempt: &BuildAttempt) -> String {
        if !attempt.label.trim().is_empty() {
            return attempt.label.clone();
        }
        Self::derive(attempt)
    }

    fn derive(attempt: &BuildAttempt) -> String {
        let mut parts = Vec::new();
        if let Some(jdk) = attempt.jdk.as_deref().filter(|j| !j.is_empty()) {
            parts.push(format!("JDK {}", jdk));
        }
        let tool = attempt
            .tool
            .as_deref()
            .and_then(|t| BuildTool::from_str(t).ok());
        if let Some(tool) = tool {
            let version = match tool {
                BuildTool::Maven => attempt.maven_version.as_deref(),
                BuildTool::Gradle => attempt.gradle_version.as_deref(),
                BuildTool::Sbt => attempt.sbt_version.as_deref(),
                BuildTool::Ant => attempt.ant_version.as_deref(),
            };
            match version.filter(|v| !v.is_empty()) {
                Some(v) => parts.push(format!("{} {}", tool.display_name(), v)),
                None => parts.push(tool.display_name().to_string()),
            }
        }
        if let Some(start) = attempt.start_time {
            parts.push(start.to_rfc3339_opts(chrono::SecondsFormat::Secs, true));
        }
        if parts.is_empty() {
            format!("Attempt {}", attempt.id)
        } else {
            parts.join(" ")
        }
    }
}

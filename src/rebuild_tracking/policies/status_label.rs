use serde::Serialize;

use crate::rebuild_tracking::domain::{
    ArtifactListItem, Build, BuildAttempt, BuildListItem, DependencyCounts, IdentifiedDependency,
};
use crate::rebuild_tracking::policies::{TrustPolicy, TrustSource};

/// Colour family of a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Green,
    Orange,
    Red,
    Blue,
}

/// A short coloured status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    pub text: String,
    pub color: LabelColor,
}

impl StatusLabel {
    pub fn new(text: impl Into<String>, color: LabelColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Maps entity state onto the labels shown next to it.
pub struct StatusLabels;

impl StatusLabels {
    pub const IN_BUILD_QUEUE: &'static str = "In Build Queue";

    /// Outcome label of a build. Contamination wins over success.
    pub fn build_outcome(succeeded: bool, contaminated: bool) -> StatusLabel {
        if contaminated {
            StatusLabel::new("Build Contaminated", LabelColor::Orange)
        } else if succeeded {
            StatusLabel::new("Build Successful", LabelColor::Green)
        } else {
            StatusLabel::new("Build Failed", LabelColor::Red)
        }
    }

    pub fn build_row(item: &BuildListItem) -> Vec<StatusLabel> {
        let mut labels = vec![Self::build_outcome(item.succeeded, item.contaminated)];
        if item.in_queue {
            labels.push(Self::in_queue());
        }
        labels
    }

    pub fn build(build: &Build) -> Vec<StatusLabel> {
        let mut labels = vec![Self::build_outcome(build.succeeded, build.contaminated)];
        if let Some(attempt) = &build.successful_build {
            if !attempt.passed_verification {
                labels.push(StatusLabel::new("Failed Verification", LabelColor::Orange));
            }
        }
        if build.in_queue {
            labels.push(Self::in_queue());
        }
        labels
    }

    pub fn attempt(attempt: &BuildAttempt) -> StatusLabel {
        if attempt.successful {
            StatusLabel::new("Build Successful", LabelColor::Green)
        } else {
            StatusLabel::new("Build Failed", LabelColor::Red)
        }
    }

    pub fn artifact_outcome(succeeded: bool, missing: bool) -> StatusLabel {
        if succeeded {
            StatusLabel::new("Artifact Successful", LabelColor::Green)
        } else if missing {
            StatusLabel::new("Artifact Missing", LabelColor::Orange)
        } else {
            StatusLabel::new("Artifact Failed", LabelColor::Red)
        }
    }

    pub fn artifact_row(item: &ArtifactListItem) -> StatusLabel {
        Self::artifact_outcome(item.succeeded, item.missing)
    }

    /// Labels of a dependency row in an image or dependency set.
    pub fn dependency(dep: &IdentifiedDependency) -> Vec<StatusLabel> {
        let mut labels = Vec::new();
        if dep.in_queue {
            labels.push(Self::in_queue());
        }
        if dep.build_attempt_id.is_some() {
            labels.push(StatusLabel::new("Rebuilt Artifact", LabelColor::Green));
        } else if dep.build_success {
            labels.push(StatusLabel::new(
                "Rebuilt Artifact Available, Image Rebuild Required",
                LabelColor::Orange,
            ));
        } else if dep.dependency_build_identifier.is_some() {
            labels.push(StatusLabel::new("Rebuild Failed", LabelColor::Red));
        } else {
            labels.push(StatusLabel::new("Unknown Source", LabelColor::Orange));
        }
        if let Some(target) = &dep.shaded_into {
            labels.push(StatusLabel::new(
                format!("Shaded into {}", target),
                LabelColor::Blue,
            ));
        }
        labels
    }

    /// Health labels of an image, GitHub build or dependency set.
    ///
    /// `empty_text` is shown when there are no Java dependencies at all.
    pub fn dependency_health(
        analysis_complete: bool,
        counts: &DependencyCounts,
        empty_text: &str,
    ) -> Vec<StatusLabel> {
        if !analysis_complete {
            return vec![StatusLabel::new(
                "Image Analysis in Progress",
                LabelColor::Blue,
            )];
        }
        if counts.total == 0 {
            return vec![StatusLabel::new(empty_text, LabelColor::Blue)];
        }
        let mut labels = Vec::new();
        if counts.untrusted > 0 {
            labels.push(StatusLabel::new(
                format!("{} Untrusted Dependencies", counts.untrusted),
                LabelColor::Red,
            ));
        }
        let trusted = counts.total - counts.untrusted;
        if trusted > 0 {
            labels.push(StatusLabel::new(
                format!("{} Rebuilt Dependencies", trusted),
                LabelColor::Green,
            ));
        }
        if counts.available_builds > 0 {
            labels.push(StatusLabel::new(
                format!("{} Available Rebuilt Dependencies", counts.available_builds),
                LabelColor::Orange,
            ));
        }
        labels
    }

    /// Source marker of a dependency row.
    pub fn trust_source(source: &str) -> StatusLabel {
        match TrustPolicy::classify(source) {
            TrustSource::Rebuilt => StatusLabel::new("Rebuilt", LabelColor::Green),
            TrustSource::RedHat => StatusLabel::new("Red Hat", LabelColor::Green),
            TrustSource::Unknown if source.is_empty() => {
                StatusLabel::new("Untrusted", LabelColor::Red)
            }
            TrustSource::Unknown => StatusLabel::new(source, LabelColor::Red),
        }
    }

    pub fn priority() -> StatusLabel {
        StatusLabel::new("Priority", LabelColor::Red)
    }

    fn in_queue() -> StatusLabel {
        StatusLabel::new(Self::IN_BUILD_QUEUE, LabelColor::Blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(labels: &[StatusLabel]) -> Vec<&str> {
        labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_contamination_wins_over_success() {
        let label = StatusLabels::build_outcome(true, true);
        assert_eq!(label.text, "Build Contaminated");
        assert_eq!(label.color, LabelColor::Orange);
    }

    #[test]
    fn test_build_row_in_queue() {
        let item = BuildListItem {
            succeeded: false,
            in_queue: true,
            ..BuildListItem::default()
        };
        assert_eq!(
            texts(&StatusLabels::build_row(&item)),
            vec!["Build Failed", "In Build Queue"]
        );
    }

    #[test]
    fn test_build_failed_verification() {
        let build = Build {
            succeeded: true,
            successful_build: Some(BuildAttempt {
                successful: true,
                passed_verification: false,
                ..BuildAttempt::default()
            }),
            ..Build::default()
        };
        assert_eq!(
            texts(&StatusLabels::build(&build)),
            vec!["Build Successful", "Failed Verification"]
        );
    }

    #[test]
    fn test_artifact_outcome() {
        assert_eq!(
            StatusLabels::artifact_outcome(true, true).text,
            "Artifact Successful"
        );
        assert_eq!(
            StatusLabels::artifact_outcome(false, true).text,
            "Artifact Missing"
        );
        assert_eq!(
            StatusLabels::artifact_outcome(false, false).text,
            "Artifact Failed"
        );
    }

    #[test]
    fn test_dependency_labels() {
        let mut dep = IdentifiedDependency {
            gav: "g:a:1".to_string(),
            source: "central".to_string(),
            ..IdentifiedDependency::default()
        };
        assert_eq!(texts(&StatusLabels::dependency(&dep)), vec!["Unknown Source"]);

        dep.dependency_build_identifier = Some("b1".to_string());
        assert_eq!(texts(&StatusLabels::dependency(&dep)), vec!["Rebuild Failed"]);

        dep.build_success = true;
        dep.in_queue = true;
        assert_eq!(
            texts(&StatusLabels::dependency(&dep)),
            vec![
                "In Build Queue",
                "Rebuilt Artifact Available, Image Rebuild Required"
            ]
        );

        dep.build_attempt_id = Some("7".to_string());
        dep.in_queue = false;
        dep.shaded_into = Some("g:fat:1".to_string());
        assert_eq!(
            texts(&StatusLabels::dependency(&dep)),
            vec!["Rebuilt Artifact", "Shaded into g:fat:1"]
        );
    }

    #[test]
    fn test_dependency_health() {
        let counts = DependencyCounts {
            total: 10,
            trusted: 7,
            untrusted: 3,
            available_builds: 2,
        };
        assert_eq!(
            texts(&StatusLabels::dependency_health(true, &counts, "No Java")),
            vec![
                "3 Untrusted Dependencies",
                "7 Rebuilt Dependencies",
                "2 Available Rebuilt Dependencies"
            ]
        );
        assert_eq!(
            texts(&StatusLabels::dependency_health(
                true,
                &DependencyCounts::default(),
                "No Java"
            )),
            vec!["No Java"]
        );
        assert_eq!(
            texts(&StatusLabels::dependency_health(false, &counts, "No Java")),
            vec!["Image Analysis in Progress"]
        );
    }
}

use serde::{Deserialize, Serialize};

/// Build counts by outcome, optionally restricted to a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildSummary {
    pub total_builds: u64,
    pub successful_builds: u64,
    pub contaminated_builds: u64,
    pub running_builds: u64,
    pub failing_builds: u64,
}

/// Artifact counts by outcome, optionally restricted to a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactSummary {
    pub total: u64,
    pub built: u64,
    pub failed: u64,
    pub missing: u64,
}

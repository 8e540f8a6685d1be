use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Row of the build history list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildListItem {
    pub id: i64,
    pub name: String,
    pub scm_repo: String,
    pub tag: String,
    pub succeeded: bool,
    pub contaminated: bool,
    /// Comma separated GAVs produced by the build, truncated by the backend.
    pub artifacts: String,
    pub in_queue: bool,
}

/// A dependency build with its attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Build {
    pub id: i64,
    pub name: String,
    pub scm_repo: String,
    pub tag: String,
    pub commit: String,
    pub context_path: Option<String>,
    pub succeeded: bool,
    pub contaminated: bool,
    pub verified: bool,
    pub artifacts: Vec<String>,
    pub successful_build: Option<BuildAttempt>,
    pub build_attempts: Vec<BuildAttempt>,
    pub shading_details: Vec<ShadingDetails>,
    pub in_queue: bool,
    pub build_sbom_dependency_set_id: i64,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            scm_repo: String::new(),
            tag: String::new(),
            commit: String::new(),
            context_path: None,
            succeeded: false,
            contaminated: false,
            verified: false,
            artifacts: Vec::new(),
            successful_build: None,
            build_attempts: Vec::new(),
            shading_details: Vec::new(),
            in_queue: false,
            build_sbom_dependency_set_id: -1,
        }
    }
}

impl Build {
    /// Upstream differences reported by the successful attempt, if any.
    pub fn verification_failures(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        self.successful_build
            .as_ref()
            .map(|attempt| &attempt.upstream_differences)
            .filter(|diffs| !diffs.is_empty())
    }

    /// The SBOM dependency set of the build; ids of zero or less mean none.
    pub fn sbom_dependency_set(&self) -> Option<i64> {
        Some(self.build_sbom_dependency_set_id).filter(|id| *id > 0)
    }
}

/// One execution of a dependency build recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildAttempt {
    pub id: i64,
    pub build_id: String,
    pub label: String,
    pub jdk: Option<String>,
    pub maven_version: Option<String>,
    pub gradle_version: Option<String>,
    pub sbt_version: Option<String>,
    pub ant_version: Option<String>,
    pub tool: Option<String>,
    pub builder_image: Option<String>,
    pub pre_build_image: Option<String>,
    pub hermetic_builder_image: Option<String>,
    pub output_image: Option<String>,
    pub output_image_digest: Option<String>,
    pub command_line: Option<String>,
    pub pre_build_script: Option<String>,
    pub post_build_script: Option<String>,
    pub enforce_version: Option<String>,
    pub disable_sub_modules: bool,
    pub additional_memory: i32,
    pub repositories: Option<String>,
    pub allowed_differences: Option<String>,
    pub build_logs_url: Option<String>,
    pub build_pipeline_url: Option<String>,
    pub maven_repository: Option<String>,
    pub successful: bool,
    pub passed_verification: bool,
    pub contaminated: bool,
    pub upstream_differences: BTreeMap<String, Vec<String>>,
    pub git_archive_sha: Option<String>,
    pub git_archive_tag: Option<String>,
    pub git_archive_url: Option<String>,
    pub diagnostic_docker_file: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub shading_details: Vec<ShadingDetails>,
    pub artifacts: Vec<String>,
    pub build_sbom_dependency_set_id: i64,
}

/// A contaminant found shaded into rebuilt artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadingDetails {
    pub contaminant: String,
    pub contaminated_artifacts: Vec<String>,
    pub build_id: Option<String>,
    pub source: Option<String>,
    pub allowed: bool,
    pub rebuild_available: bool,
}

/// Outcome filter of the build list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    Successful,
    Failed,
    Contaminated,
}

impl BuildState {
    pub fn as_query(self) -> &'static str {
        match self {
            BuildState::Successful => "successful",
            BuildState::Failed => "failed",
            BuildState::Contaminated => "contaminated",
        }
    }
}

impl std::str::FromStr for BuildState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "successful" | "success" => Ok(BuildState::Successful),
            "failed" => Ok(BuildState::Failed),
            "contaminated" => Ok(BuildState::Contaminated),
            _ => Err(format!(
                "Invalid build state: {}. Please specify 'successful', 'failed' or 'contaminated'",
                s
            )),
        }
    }
}

/// Build tool filter of the build list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
    Sbt,
    Ant,
}

impl BuildTool {
    pub fn as_query(self) -> &'static str {
        match self {
            BuildTool::Maven => "maven",
            BuildTool::Gradle => "gradle",
            BuildTool::Sbt => "sbt",
            BuildTool::Ant => "ant",
        }
    }

    /// Name used in attempt labels, e.g. "Gradle 8.4".
    pub fn display_name(self) -> &'static str {
        match self {
            BuildTool::Maven => "Maven",
            BuildTool::Gradle => "Gradle",
            BuildTool::Sbt => "SBT",
            BuildTool::Ant => "Ant",
        }
    }
}

impl std::str::FromStr for BuildTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven" | "mvn" => Ok(BuildTool::Maven),
            "gradle" => Ok(BuildTool::Gradle),
            "sbt" => Ok(BuildTool::Sbt),
            "ant" => Ok(BuildTool::Ant),
            _ => Err(format!(
                "Invalid build tool: {}. Please specify 'maven', 'gradle', 'sbt' or 'ant'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_build_with_attempt() {
        let json = r#"{
            "id": 7,
            "name": "a1b2c3",
            "scmRepo": "https://github.com/apache/commons-lang.git",
            "tag": "rel/commons-lang-3.12.0",
            "commit": "deadbeef",
            "contextPath": "",
            "succeeded": true,
            "contaminated": false,
            "verified": false,
            "artifacts": ["org.apache.commons:commons-lang3:3.12.0"],
            "successfulBuild": {
                "id": 11,
                "jdk": "17",
                "tool": "maven",
                "mavenVersion": "3.8.8",
                "successful": true,
                "upstreamDifferences": {"org.apache.commons:commons-lang3:3.12.0": ["+META-INF/x"]},
                "startTime": "2024-03-01T10:15:30Z"
            },
            "buildAttempts": [],
            "shadingDetails": [],
            "inQueue": false,
            "buildSbomDependencySetId": 5
        }"#;
        let build: Build = serde_json::from_str(json).unwrap();
        assert_eq!(build.name, "a1b2c3");
        let attempt = build.successful_build.as_ref().unwrap();
        assert_eq!(attempt.maven_version.as_deref(), Some("3.8.8"));
        assert!(attempt.start_time.is_some());
        assert_eq!(build.verification_failures().unwrap().len(), 1);
        assert_eq!(build.sbom_dependency_set(), Some(5));
    }

    #[test]
    fn test_missing_sbom_set_is_none() {
        let build = Build::default();
        assert_eq!(build.sbom_dependency_set(), None);
        assert!(build.verification_failures().is_none());

        let zero = Build {
            build_sbom_dependency_set_id: 0,
            ..Build::default()
        };
        assert_eq!(zero.sbom_dependency_set(), None);
    }

    #[test]
    fn test_build_state_and_tool_from_str() {
        use std::str::FromStr;
        assert_eq!(
            BuildState::from_str("Contaminated").unwrap().as_query(),
            "contaminated"
        );
        assert_eq!(BuildTool::from_str("mvn").unwrap(), BuildTool::Maven);
        assert_eq!(BuildTool::Sbt.display_name(), "SBT");
        assert!(BuildTool::from_str("bazel").is_err());
    }

    #[test]
    fn test_deserialize_list_item_tolerates_missing_fields() {
        let item: BuildListItem =
            serde_json::from_str(r#"{"id":1,"name":"b","inQueue":true}"#).unwrap();
        assert!(item.in_queue);
        assert!(item.scm_repo.is_empty());
    }
}

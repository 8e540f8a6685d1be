use serde::{Deserialize, Serialize};

/// Row of the artifact history list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactListItem {
    pub id: i64,
    pub gav: String,
    pub succeeded: bool,
    pub missing: bool,
    pub message: Option<String>,
}

/// Full artifact record, linked to the dependency build that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artifact {
    pub id: i64,
    pub name: String,
    pub gav: String,
    pub scm_repo: Option<String>,
    pub tag: Option<String>,
    pub commit: Option<String>,
    pub context_path: Option<String>,
    pub dependency_build_name: Option<String>,
    pub dependency_build_id: Option<i64>,
    pub succeeded: bool,
    pub missing: bool,
    pub message: Option<String>,
}

/// Terminal outcome filter of the artifact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactState {
    Complete,
    Missing,
    Failed,
}

impl ArtifactState {
    pub fn as_query(self) -> &'static str {
        match self {
            ArtifactState::Complete => "complete",
            ArtifactState::Missing => "missing",
            ArtifactState::Failed => "failed",
        }
    }
}

impl std::str::FromStr for ArtifactState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complete" | "successful" => Ok(ArtifactState::Complete),
            "missing" => Ok(ArtifactState::Missing),
            "failed" => Ok(ArtifactState::Failed),
            _ => Err(format!(
                "Invalid artifact state: {}. Please specify 'complete', 'missing' or 'failed'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_artifact_with_null_message() {
        let json = r#"{"id":3,"gav":"io.netty:netty-codec:4.1.100.Final","succeeded":true,"missing":false,"message":null}"#;
        let item: ArtifactListItem = serde_json::from_str(json).unwrap();
        assert!(item.succeeded);
        assert!(item.message.is_none());
    }

    #[test]
    fn test_artifact_state_from_str() {
        assert_eq!(
            ArtifactState::from_str("MISSING").unwrap(),
            ArtifactState::Missing
        );
        assert_eq!(
            ArtifactState::from_str("complete").unwrap().as_query(),
            "complete"
        );
        assert!(ArtifactState::from_str("pending").is_err());
    }
}

use serde::{Deserialize, Serialize};

/// Name of an artifact label, e.g. a product or a release stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactLabelName {
    pub name: String,
}

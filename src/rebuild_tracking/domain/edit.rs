use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The editable SCM location of an artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifyScmRepoCommand {
    pub gav: String,
    /// Apply to every artifact in the group rather than this artifact only.
    pub group: bool,
    /// Apply to this version and lower.
    pub version: bool,
    pub legacy: bool,
    pub uri: Option<String>,
    pub path: Option<String>,
}

/// Build recipe of an SCM repository.
///
/// Only the fields the console edits are typed; everything else is carried
/// through unchanged so a submission never drops recipe settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecipeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_memory: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_args: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The editable build information of an SCM repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildEditInfo {
    pub build_info: BuildRecipeInfo,
    pub scm_uri: String,
    /// Apply to this version and lower.
    pub version: bool,
}

/// Response of an edit submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditResult {
    pub pr_url: Option<String>,
}

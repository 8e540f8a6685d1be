use crate::application::read_models::{Cell, Field, Screen, Section};
use crate::application::view_state::{describe_error, EditDraft};
use crate::ports::outbound::ArtifactApi;
use crate::rebuild_tracking::domain::{EditResult, ModifyScmRepoCommand};
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Changes to the SCM location recorded for an artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScmEditChanges {
    pub group: Option<bool>,
    pub version: Option<bool>,
    pub legacy: Option<bool>,
    pub uri: Option<String>,
    pub path: Option<String>,
}

impl ScmEditChanges {
    pub fn apply(&self, command: &mut ModifyScmRepoCommand) {
        if let Some(group) = self.group {
            command.group = group;
        }
        if let Some(version) = self.version {
            command.version = version;
        }
        if let Some(legacy) = self.legacy {
            command.legacy = legacy;
        }
        if let Some(uri) = &self.uri {
            command.uri = Some(uri.clone()).filter(|u| !u.trim().is_empty());
        }
        if let Some(path) = &self.path {
            command.path = Some(path.clone()).filter(|p| !p.trim().is_empty());
        }
    }
}

/// Edit modal for an artifact's SCM information.
pub struct ArtifactEdit<A> {
    api: A,
    gav: String,
    draft: EditDraft<ModifyScmRepoCommand>,
    opened: bool,
}

impl<A: ArtifactApi> ArtifactEdit<A> {
    pub fn new(api: A, gav: impl Into<String>) -> Self {
        Self {
            api,
            gav: gav.into(),
            draft: EditDraft::default(),
            opened: false,
        }
    }

    pub fn draft(&self) -> &EditDraft<ModifyScmRepoCommand> {
        &self.draft
    }

    /// Loads the editable record. Only the first call fetches.
    pub async fn open(&mut self) -> bool {
        if self.opened {
            return false;
        }
        self.opened = true;
        let result = self.api.scm_edit(&self.gav).await.map_err(|e| {
            tracing::error!(gav = %self.gav, error = %e, "failed to load SCM edit");
            describe_error(&e)
        });
        self.draft.loaded(result);
        true
    }

    pub fn edit(&mut self, changes: &ScmEditChanges) -> Result<()> {
        let command = draft_or_error(&mut self.draft)?;
        changes.apply(command);
        Ok(())
    }

    /// Submits the draft. Refused without a request once a pull request exists.
    pub async fn confirm(&mut self) -> Result<EditResult> {
        let command = self.draft.submission()?;
        let result = self.api.submit_scm_edit(&command).await.inspect_err(|e| {
            tracing::error!(gav = %self.gav, error = %e, "SCM edit submission failed");
        })?;
        self.draft.submitted(result.pr_url.clone());
        Ok(result)
    }

    pub fn screen(&self) -> Screen {
        let screen = Screen::new(format!("Edit {}", self.gav));
        let sections = self.draft.load_state().sections(|| {
            let Some(command) = self.draft.draft() else {
                return Vec::new();
            };
            let mut fields = vec![
                Field::text("GAV", command.gav.clone()),
                Field::text("Group", yes_no(command.group)),
                Field::text("Version Specific", yes_no(command.version)),
                Field::text("Legacy", yes_no(command.legacy)),
                Field::text("SCM URI", command.uri.clone().unwrap_or_default()),
                Field::text("Path", command.path.clone().unwrap_or_default()),
            ];
            if let Some(url) = self.draft.pr_url() {
                fields.push(Field::new(
                    "Pull Request",
                    Cell::link_or_text(url, Some(url.to_string())),
                ));
            }
            vec![Section::fields(None, fields)]
        });
        screen.with_sections(sections)
    }
}

pub(crate) fn draft_or_error<T: Clone>(draft: &mut EditDraft<T>) -> Result<&mut T> {
    if let Some(pr_url) = draft.pr_url() {
        return Err(ConsoleError::AlreadySubmitted {
            pr_url: pr_url.to_string(),
        }
        .into());
    }
    draft
        .draft_mut()
        .ok_or_else(|| ConsoleError::EditNotLoaded.into())
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

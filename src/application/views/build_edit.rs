use super::artifact_edit::{draft_or_error, yes_no};
use crate::application::read_models::{Cell, Field, Screen, Section};
use crate::application::view_state::{describe_error, EditDraft};
use crate::ports::outbound::BuildInfoEditApi;
use crate::rebuild_tracking::domain::{BuildEditInfo, EditResult};
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Edit modal for the build recipe of an SCM repository.
///
/// Without an SCM repository there is nothing to look up: the modal never
/// fetches and stays in the loading state.
pub struct BuildEdit<A> {
    api: A,
    scm_uri: String,
    draft: EditDraft<BuildEditInfo>,
    opened: bool,
}

impl<A: BuildInfoEditApi> BuildEdit<A> {
    pub fn new(api: A, scm_uri: impl Into<String>) -> Self {
        Self {
            api,
            scm_uri: scm_uri.into(),
            draft: EditDraft::default(),
            opened: false,
        }
    }

    pub fn draft(&self) -> &EditDraft<BuildEditInfo> {
        &self.draft
    }

    pub async fn open(&mut self) -> bool {
        if self.opened || self.scm_uri.trim().is_empty() {
            return false;
        }
        self.opened = true;
        let result = self.api.build_info(&self.scm_uri).await.map_err(|e| {
            tracing::error!(scm_uri = %self.scm_uri, error = %e, "failed to load build info");
            describe_error(&e)
        });
        self.draft.loaded(result);
        true
    }

    pub fn toggle_version(&mut self) -> Result<bool> {
        let info = draft_or_error(&mut self.draft)?;
        info.version = !info.version;
        Ok(info.version)
    }

    pub fn set_additional_memory(&mut self, mebibytes: u32) -> Result<()> {
        let info = draft_or_error(&mut self.draft)?;
        info.build_info.additional_memory = Some(mebibytes);
        Ok(())
    }

    /// Appends an empty argument for the user to fill in.
    pub fn add_additional_arg(&mut self) -> Result<usize> {
        let info = draft_or_error(&mut self.draft)?;
        let args = info.build_info.additional_args.get_or_insert_with(Vec::new);
        args.push(String::new());
        Ok(args.len() - 1)
    }

    pub fn set_additional_arg(&mut self, index: usize, value: &str) -> Result<()> {
        let info = draft_or_error(&mut self.draft)?;
        let args = info.build_info.additional_args.get_or_insert_with(Vec::new);
        let len = args.len();
        let slot = args
            .get_mut(index)
            .ok_or(ConsoleError::RowOutOfRange { index, len })?;
        *slot = value.to_string();
        Ok(())
    }

    pub async fn confirm(&mut self) -> Result<EditResult> {
        let info = self.draft.submission()?;
        let result = self.api.submit_build_info(&info).await.inspect_err(|e| {
            tracing::error!(scm_uri = %self.scm_uri, error = %e, "build info submission failed");
        })?;
        self.draft.submitted(result.pr_url.clone());
        Ok(result)
    }

    pub fn screen(&self) -> Screen {
        let sections = self.draft.load_state().sections(|| {
            let Some(info) = self.draft.draft() else {
                return Vec::new();
            };
            let recipe = &info.build_info;
            let mut fields = vec![
                Field::text("SCM URI", info.scm_uri.clone()),
                Field::text("Version Specific", yes_no(info.version)),
                Field::text(
                    "Additional Memory",
                    recipe
                        .additional_memory
                        .map(|m| format!("{} MiB", m))
                        .unwrap_or_default(),
                ),
            ];
            for (i, arg) in recipe.additional_args.iter().flatten().enumerate() {
                fields.push(Field::text(&format!("Argument {}", i), arg.clone()));
            }
            if let Some(url) = self.draft.pr_url() {
                fields.push(Field::new(
                    "Pull Request",
                    Cell::link_or_text(url, Some(url.to_string())),
                ));
            }
            vec![Section::fields(None, fields)]
        });
        Screen::new(format!("Edit Build Recipe {}", self.scm_uri)).with_sections(sections)
    }
}

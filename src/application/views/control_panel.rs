use async_trait::async_trait;

use super::command::{InteractiveView, ViewCommand};
use crate::application::read_models::{Cell, Screen, Section};
use crate::ports::outbound::{AdminAction, AdminApi};
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Administrative actions. Destructive ones only run when confirmed.
pub struct ControlPanel<A> {
    api: A,
}

impl<A: AdminApi> ControlPanel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run(&self, action: AdminAction, confirmed: bool) -> Result<()> {
        if action.is_destructive() && !confirmed {
            return Err(ConsoleError::ConfirmationRequired {
                action: action.path_segment().to_string(),
            }
            .into());
        }
        tracing::info!(action = action.path_segment(), "running admin action");
        self.api.run_admin_action(action).await.inspect_err(|e| {
            tracing::error!(action = action.path_segment(), error = %e, "admin action failed");
        })
    }

    pub fn screen(&self) -> Screen {
        let rows = AdminAction::ALL
            .into_iter()
            .map(|action| {
                vec![
                    Cell::text(action.path_segment()),
                    Cell::text(action.description()),
                    Cell::text(if action.is_destructive() {
                        "Requires --yes"
                    } else {
                        ""
                    }),
                ]
            })
            .collect();
        Screen::new("Control Panel").with_section(Section::table_or_empty(
            &["Action", "Description", "Confirmation"],
            rows,
        ))
    }
}

#[async_trait]
impl<A: AdminApi> InteractiveView for ControlPanel<A> {
    async fn sync(&mut self) -> bool {
        false
    }

    /// Actions only run from `rebuild-console admin`, where they can be
    /// confirmed.
    async fn dispatch(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::Help | ViewCommand::Quit => Ok(()),
            _ => Err(ConsoleError::Validation {
                message: "run actions with `rebuild-console admin <action>`".to_string(),
            }
            .into()),
        }
    }

    fn screen(&self) -> Screen {
        ControlPanel::screen(self)
    }
}

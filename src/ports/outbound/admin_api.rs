use crate::rebuild_tracking::domain::{BuildEditInfo, EditResult};
use crate::shared::Result;
use async_trait::async_trait;

/// Administrative operations of the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    RebuildAll,
    RebuildFailed,
    ClearBuildQueue,
    CleanOutDatabase,
}

impl AdminAction {
    pub const ALL: [AdminAction; 4] = [
        AdminAction::RebuildAll,
        AdminAction::RebuildFailed,
        AdminAction::ClearBuildQueue,
        AdminAction::CleanOutDatabase,
    ];

    /// Path segment under `/api/admin/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            AdminAction::RebuildAll => "rebuild-all",
            AdminAction::RebuildFailed => "rebuild-failed",
            AdminAction::ClearBuildQueue => "clear-build-queue",
            AdminAction::CleanOutDatabase => "clean-out-database",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AdminAction::RebuildAll => "Queue every known build for a rebuild",
            AdminAction::RebuildFailed => "Queue every failed build for a rebuild",
            AdminAction::ClearBuildQueue => "Remove every entry from the build queue",
            AdminAction::CleanOutDatabase => "Delete all stored build and artifact records",
        }
    }

    /// Actions that discard work or data and need explicit confirmation.
    pub fn is_destructive(self) -> bool {
        !matches!(self, AdminAction::RebuildFailed)
    }
}

impl std::str::FromStr for AdminAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AdminAction::ALL
            .into_iter()
            .find(|action| action.path_segment() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid admin action: {}. Please specify one of: {}",
                    s,
                    AdminAction::ALL.map(|a| a.path_segment()).join(", ")
                )
            })
    }
}

/// AdminApi port for `/api/admin/*`
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn run_admin_action(&self, action: AdminAction) -> Result<()>;
}

/// BuildInfoEditApi port for build recipe edits
#[async_trait]
pub trait BuildInfoEditApi: Send + Sync {
    /// `GET /api/build-info/edit?gav=<scm uri>`
    async fn build_info(&self, scm_uri: &str) -> Result<BuildEditInfo>;

    /// `POST /api/build-info/edit`
    async fn submit_build_info(&self, info: &BuildEditInfo) -> Result<EditResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_admin_action_round_trips_path_segment() {
        for action in AdminAction::ALL {
            assert_eq!(
                AdminAction::from_str(action.path_segment()).unwrap(),
                action
            );
        }
    }

    #[test]
    fn test_unknown_admin_action_lists_choices() {
        let err = AdminAction::from_str("import-froms3").unwrap_err();
        assert!(err.contains("rebuild-all, rebuild-failed"));
    }

    #[test]
    fn test_only_rebuild_failed_skips_confirmation() {
        assert!(!AdminAction::RebuildFailed.is_destructive());
        assert!(AdminAction::CleanOutDatabase.is_destructive());
        assert!(AdminAction::ClearBuildQueue.is_destructive());
        assert!(AdminAction::RebuildAll.is_destructive());
    }
}

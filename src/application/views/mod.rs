/// Views of the console
///
/// Each view owns its state, talks to the backend through the outbound ports
/// and describes itself as a [`crate::application::read_models::Screen`].
pub mod add_artifact;
pub mod artifact_edit;
pub mod artifact_list;
pub mod artifact_view;
pub mod build_edit;
pub mod build_list;
pub mod build_view;
pub mod command;
pub mod control_panel;
pub mod dashboard;
pub mod dependency_set_view;
pub mod deployment_list;
pub mod github_build_list;
pub mod github_build_view;
pub mod image_list;
pub mod label_selector;
pub mod navigator;
pub mod paged_list;
pub mod queue_list;
pub mod running_builds;
pub mod snapshot_list;

pub use add_artifact::{AddArtifactForm, SubmissionResult, GAVS_FIELD};
pub use artifact_edit::{ArtifactEdit, ScmEditChanges};
pub use artifact_list::{artifact_list, ArtifactList, ArtifactListFilter};
pub use artifact_view::ArtifactView;
pub use build_edit::BuildEdit;
pub use build_list::{build_list, BuildList, BuildListFilter};
pub use build_view::{BuildTab, BuildView};
pub use command::{InteractiveView, ViewCommand};
pub use control_panel::ControlPanel;
pub use dashboard::Dashboard;
pub use dependency_set_view::DependencySetView;
pub use deployment_list::{deployment_list, DeploymentList};
pub use github_build_list::{github_build_list, GithubBuildList};
pub use github_build_view::{GithubBuildTab, GithubBuildView};
pub use image_list::{
    image_list, image_repository_list, ImageList, ImageRepositoryList, ImageRepositorySource,
};
pub use label_selector::{LabelSelector, ALL_LABELS};
pub use navigator::view_for;
pub use paged_list::{ListFilter, PageSource, PagedList};
pub use queue_list::{build_queue_list, BuildQueueList};
pub use running_builds::{running_build_list, RunningBuildList};
pub use snapshot_list::{SnapshotList, SnapshotSource};

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the views use to reach the rebuild
/// service, the console and the output destination.
pub mod admin_api;
pub mod artifact_api;
pub mod build_api;
pub mod catalog_api;
pub mod output_presenter;
pub mod progress_reporter;
pub mod queue_api;
pub mod view_renderer;

pub use admin_api::{AdminAction, AdminApi, BuildInfoEditApi};
pub use artifact_api::{ArtifactApi, ArtifactHistoryQuery};
pub use build_api::{BuildApi, BuildHistoryQuery};
pub use catalog_api::{DependencySetApi, DeploymentApi, GithubBuildApi, ImageApi, LabelApi};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use queue_api::QueueApi;
pub use view_renderer::ViewRenderer;

/// Every backend resource the console talks to.
///
/// Blanket implemented, so a single client type satisfies all views.
pub trait ConsoleApi:
    BuildApi
    + QueueApi
    + ArtifactApi
    + LabelApi
    + ImageApi
    + DeploymentApi
    + DependencySetApi
    + GithubBuildApi
    + AdminApi
    + BuildInfoEditApi
{
}

impl<T> ConsoleApi for T where
    T: BuildApi
        + QueueApi
        + ArtifactApi
        + LabelApi
        + ImageApi
        + DeploymentApi
        + DependencySetApi
        + GithubBuildApi
        + AdminApi
        + BuildInfoEditApi
{
}

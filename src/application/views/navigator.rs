use super::command::InteractiveView;
use super::{
    artifact_list, build_list, build_queue_list, deployment_list, github_build_list, image_list,
    image_repository_list, running_build_list, AddArtifactForm, ArtifactView, BuildView,
    ControlPanel, Dashboard, GithubBuildView,
};
use crate::application::routes::Route;
use crate::ports::outbound::ConsoleApi;

/// Builds the view shown at `route`.
pub fn view_for<A>(route: &Route, api: A, per_page: u32) -> Box<dyn InteractiveView>
where
    A: ConsoleApi + Clone + 'static,
{
    match route {
        Route::Home => Box::new(Dashboard::new(api)),
        Route::Builds => Box::new(build_list(api, per_page)),
        Route::Build(id) => Box::new(BuildView::new(api, *id)),
        Route::RunningBuilds => Box::new(running_build_list(api)),
        Route::BuildQueue => Box::new(build_queue_list(api, per_page)),
        Route::Artifacts => Box::new(artifact_list(api, per_page)),
        Route::Artifact(name) => Box::new(ArtifactView::new(api, name.clone())),
        Route::AddArtifact => Box::new(AddArtifactForm::new(api)),
        Route::GithubBuilds => Box::new(github_build_list(api, per_page)),
        Route::GithubBuild(id) => Box::new(GithubBuildView::new(api, *id)),
        Route::Deployments => Box::new(deployment_list(api)),
        Route::ImageRepositories => Box::new(image_repository_list(api, per_page)),
        Route::Images(repository) => Box::new(image_list(api, repository, per_page)),
        Route::ControlPanel => Box::new(ControlPanel::new(api)),
    }
}

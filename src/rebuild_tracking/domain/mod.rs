pub mod artifact;
pub mod build;
pub mod dependency;
pub mod edit;
pub mod github;
pub mod image;
pub mod label;
pub mod page;
pub mod queue;
pub mod summary;

pub use artifact::{Artifact, ArtifactListItem, ArtifactState};
pub use build::{Build, BuildAttempt, BuildListItem, BuildState, BuildTool, ShadingDetails};
pub use dependency::{DependencyCounts, DependencySet, IdentifiedDependency};
pub use edit::{BuildEditInfo, BuildRecipeInfo, EditResult, ModifyScmRepoCommand};
pub use github::GithubBuild;
pub use image::{Deployment, Image};
pub use label::ArtifactLabelName;
pub use page::{Page, PageRequest, DEFAULT_PER_PAGE};
pub use queue::{QueuedBuild, RunningBuild};
pub use summary::{ArtifactSummary, BuildSummary};

use async_trait::async_trait;

use super::snapshot_list::{SnapshotList, SnapshotSource};
use crate::application::read_models::Cell;
use crate::ports::outbound::DeploymentApi;
use crate::rebuild_tracking::domain::Deployment;
use crate::rebuild_tracking::policies::{LabelColor, StatusLabel};
use crate::shared::Result;

pub const ANALYSIS_IN_PROGRESS: &str = "Image Analysis in Progress";

/// Health text of a deployment: the untrusted share of its Java
/// dependencies across all images.
pub fn deployment_health(deployment: &Deployment) -> StatusLabel {
    if !deployment.analysis_complete {
        return StatusLabel::new(ANALYSIS_IN_PROGRESS, LabelColor::Blue);
    }
    let counts = deployment.counts();
    if counts.total == 0 {
        return StatusLabel::new("No Java", LabelColor::Blue);
    }
    let color = if counts.untrusted == 0 {
        LabelColor::Green
    } else {
        LabelColor::Red
    };
    StatusLabel::new(
        format!("{}/{} Untrusted Dependencies", counts.untrusted, counts.total),
        color,
    )
}

pub struct DeploymentSource<A> {
    api: A,
}

#[async_trait]
impl<A: DeploymentApi> SnapshotSource for DeploymentSource<A> {
    type Item = Deployment;

    fn title(&self) -> String {
        "Deployments".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Deployment", "Images", "Health"]
    }

    fn row(&self, deployment: &Deployment) -> Vec<Cell> {
        let images = deployment
            .images
            .iter()
            .map(|image| image.full_name())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            Cell::text(deployment.qualified_name()),
            Cell::text(images),
            Cell::label(deployment_health(deployment)),
        ]
    }

    async fn fetch_all(&self) -> Result<Vec<Deployment>> {
        self.api.deployments().await
    }
}

pub type DeploymentList<A> = SnapshotList<DeploymentSource<A>>;

pub fn deployment_list<A: DeploymentApi>(api: A) -> DeploymentList<A> {
    SnapshotList::new(DeploymentSource { api })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rebuild_tracking::domain::{IdentifiedDependency, Image};

    fn dep(source: &str) -> IdentifiedDependency {
        IdentifiedDependency {
            gav: "g:a:1".to_string(),
            source: source.to_string(),
            ..IdentifiedDependency::default()
        }
    }

    #[test]
    fn test_health_ratio_over_all_images() {
        let deployment = Deployment {
            namespace: "prod".to_string(),
            name: "shop".to_string(),
            analysis_complete: true,
            images: vec![
                Image {
                    dependencies: vec![dep("central"), dep("rebuilt")],
                    ..Image::default()
                },
                Image {
                    dependencies: vec![dep("redhat")],
                    ..Image::default()
                },
            ],
        };
        assert_eq!(
            deployment_health(&deployment).text,
            "1/3 Untrusted Dependencies"
        );
    }

    #[test]
    fn test_health_without_java_or_analysis() {
        let mut deployment = Deployment {
            analysis_complete: true,
            ..Deployment::default()
        };
        assert_eq!(deployment_health(&deployment).text, "No Java");
        deployment.analysis_complete = false;
        assert_eq!(deployment_health(&deployment).text, ANALYSIS_IN_PROGRESS);
    }
}

use serde::{Deserialize, Serialize};

use super::dependency::{DependencyCounts, IdentifiedDependency};

/// A container image and the Java dependencies found inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub repository: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
    pub analysis_complete: bool,
    pub dependencies: Vec<IdentifiedDependency>,
}

impl Image {
    /// `repository[:tag][@digest]`
    pub fn full_name(&self) -> String {
        let mut name = self.repository.clone();
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            name.push(':');
            name.push_str(tag);
        }
        if let Some(digest) = self.digest.as_deref().filter(|d| !d.is_empty()) {
            name.push('@');
            name.push_str(digest);
        }
        name
    }

    pub fn counts(&self) -> DependencyCounts {
        DependencyCounts::from_dependencies(&self.dependencies)
    }
}

/// A workload in a namespace and the images it runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deployment {
    pub namespace: String,
    pub name: String,
    pub analysis_complete: bool,
    pub images: Vec<Image>,
}

impl Deployment {
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    /// Counts summed over every image.
    pub fn counts(&self) -> DependencyCounts {
        self.images
            .iter()
            .map(Image::counts)
            .fold(DependencyCounts::default(), |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let image = Image {
            repository: "quay.io/acme/app".to_string(),
            tag: Some("1.2".to_string()),
            digest: Some("sha256:abc".to_string()),
            ..Image::default()
        };
        assert_eq!(image.full_name(), "quay.io/acme/app:1.2@sha256:abc");

        let bare = Image {
            repository: "quay.io/acme/app".to_string(),
            tag: Some(String::new()),
            ..Image::default()
        };
        assert_eq!(bare.full_name(), "quay.io/acme/app");
    }

    #[test]
    fn test_deployment_counts_sum_images() {
        let dep = |source: &str| IdentifiedDependency {
            gav: "g:a:1".to_string(),
            source: source.to_string(),
            ..IdentifiedDependency::default()
        };
        let deployment = Deployment {
            namespace: "prod".to_string(),
            name: "web".to_string(),
            analysis_complete: true,
            images: vec![
                Image {
                    dependencies: vec![dep("rebuilt"), dep("central")],
                    ..Image::default()
                },
                Image {
                    dependencies: vec![dep("central")],
                    ..Image::default()
                },
            ],
        };
        let counts = deployment.counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.untrusted, 2);
        assert_eq!(deployment.qualified_name(), "prod/web");
    }
}

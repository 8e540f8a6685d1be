use serde::{Deserialize, Serialize};

use super::dependency::{DependencyCounts, IdentifiedDependency};

/// A CI build reported by the GitHub integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GithubBuild {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub complete: bool,
    /// Runtime dependency set; zero means not yet analysed.
    pub dependency_set_id: i64,
    /// Dependency set covering every build-time dependency.
    pub build_dependency_set_id: i64,
    pub total_dependencies: usize,
    pub untrusted_dependencies: usize,
    pub available_builds: usize,
    pub dependencies: Vec<IdentifiedDependency>,
}

impl GithubBuild {
    /// Totals as reported by the backend.
    pub fn counts(&self) -> DependencyCounts {
        DependencyCounts {
            total: self.total_dependencies,
            trusted: self
                .total_dependencies
                .saturating_sub(self.untrusted_dependencies),
            untrusted: self.untrusted_dependencies,
            available_builds: self.available_builds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_build() {
        let json = r#"{"id":4,"name":"acme/app#12","url":"https://github.com/acme/app/actions/runs/12",
            "complete":true,"dependencySetId":9,"buildDependencySetId":0,
            "totalDependencies":30,"untrustedDependencies":3,"availableBuilds":1}"#;
        let build: GithubBuild = serde_json::from_str(json).unwrap();
        assert_eq!(build.dependency_set_id, 9);
        assert_eq!(build.build_dependency_set_id, 0);
        assert!(build.dependencies.is_empty());
        assert_eq!(build.counts().trusted, 27);
    }
}

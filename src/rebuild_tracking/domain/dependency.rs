use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::rebuild_tracking::policies::TrustPolicy;

/// A Java dependency found in an image or build, with where it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentifiedDependency {
    pub gav: String,
    /// Trust source: `rebuilt`, `redhat`, or anything else for unknown origin.
    pub source: String,
    pub dependency_build_identifier: Option<String>,
    pub build_attempt_id: Option<String>,
    pub in_queue: bool,
    pub build_success: bool,
    /// GAV of the artifact this dependency was shaded into, if any.
    pub shaded_into: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl IdentifiedDependency {
    pub fn is_trusted(&self) -> bool {
        TrustPolicy::is_trusted_source(&self.source)
    }

    /// An untrusted dependency for which a successful rebuild already exists.
    pub fn has_available_build(&self) -> bool {
        !self.is_trusted() && self.build_success
    }
}

/// Trust counts over a collection of dependencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCounts {
    pub total: usize,
    pub trusted: usize,
    pub untrusted: usize,
    pub available_builds: usize,
}

impl DependencyCounts {
    pub fn from_dependencies(dependencies: &[IdentifiedDependency]) -> Self {
        let trusted = dependencies.iter().filter(|d| d.is_trusted()).count();
        Self {
            total: dependencies.len(),
            trusted,
            untrusted: dependencies.len() - trusted,
            available_builds: dependencies
                .iter()
                .filter(|d| d.has_available_build())
                .count(),
        }
    }
}

impl std::ops::Add for DependencyCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            trusted: self.trusted + other.trusted,
            untrusted: self.untrusted + other.untrusted,
            available_builds: self.available_builds + other.available_builds,
        }
    }
}

/// A stored set of identified dependencies, e.g. the SBOM of a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependencySet {
    pub id: i64,
    pub identifier: Option<String>,
    pub dependencies: Vec<IdentifiedDependency>,
    pub total_dependencies: usize,
    pub trusted_dependencies: usize,
    pub untrusted_dependencies: usize,
    pub available_builds: usize,
}

impl DependencySet {
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

    /// Dependencies ordered by GAV.
    pub fn sorted_dependencies(&self) -> Vec<&IdentifiedDependency> {
        let mut sorted: Vec<&IdentifiedDependency> = self.dependencies.iter().collect();
        sorted.sort_by(|a, b| a.gav.cmp(&b.gav));
        sorted
    }
}

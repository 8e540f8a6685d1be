use serde::Serialize;

use crate::rebuild_tracking::domain::{ArtifactSummary, BuildSummary};
use crate::rebuild_tracking::policies::LabelColor;

/// One slice of a status chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub count: u64,
    /// Share of the total, 0 to 100. Zero when the total is zero.
    pub percent: f64,
    pub color: LabelColor,
}

impl ChartSlice {
    /// Legend entry, e.g. `Successful: 12`.
    pub fn legend(&self) -> String {
        format!("{}: {}", self.name, self.count)
    }
}

/// A status breakdown ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChart {
    pub title: &'static str,
    pub total: u64,
    pub slices: Vec<ChartSlice>,
}

impl StatusChart {
    pub fn for_builds(summary: &BuildSummary) -> Self {
        let total = summary.total_builds;
        Self {
            title: "Build Status",
            total,
            slices: vec![
                slice("Successful", summary.successful_builds, total, LabelColor::Green),
                slice("Failed", summary.failing_builds, total, LabelColor::Red),
                slice("Running", summary.running_builds, total, LabelColor::Blue),
                slice(
                    "Contaminated",
                    summary.contaminated_builds,
                    total,
                    LabelColor::Orange,
                ),
            ],
        }
    }

    pub fn for_artifacts(summary: &ArtifactSummary) -> Self {
        let total = summary.total;
        Self {
            title: "Artifact Status",
            total,
            slices: vec![
                slice("Successful", summary.built, total, LabelColor::Green),
                slice("Failed", summary.failed, total, LabelColor::Red),
                slice("Missing", summary.missing, total, LabelColor::Orange),
            ],
        }
    }
}

fn slice(name: &'static str, count: u64, total: u64, color: LabelColor) -> ChartSlice {
    let percent = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    ChartSlice {
        name,
        count,
        percent,
        color,
    }
}

//! Navigation shell
//!
//! Every page of the console has a route path. The paths match the browser
//! console, so links printed by one view can be opened with `open <path>`.

use crate::application::read_models::{Cell, Screen, Section};
use crate::shared::error::ConsoleError;
use crate::shared::Result;

const PRODUCT: &str = "JVM Build Service";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Builds,
    /// A dependency build, by its numeric id.
    Build(i64),
    RunningBuilds,
    BuildQueue,
    Artifacts,
    Artifact(String),
    AddArtifact,
    GithubBuilds,
    GithubBuild(i64),
    Deployments,
    ImageRepositories,
    Images(String),
    ControlPanel,
}

impl Route {
    /// Parses a route path. Trailing slashes are ignored and parameters are
    /// percent-decoded.
    pub fn parse(path: &str) -> Result<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        let unknown = || ConsoleError::UnknownRoute {
            path: trimmed.to_string(),
        };

        let route = match normalized {
            "/" => Route::Home,
            "/builds/all" => Route::Builds,
            "/builds/running" => Route::RunningBuilds,
            "/builds/queue" => Route::BuildQueue,
            "/artifacts/all" => Route::Artifacts,
            "/artifacts/create" => Route::AddArtifact,
            "/builds/github/all" => Route::GithubBuilds,
            "/deployments" => Route::Deployments,
            "/images" => Route::ImageRepositories,
            "/admin/control-panel" => Route::ControlPanel,
            other => {
                if let Some(name) = parameter(other, "/builds/github/build/") {
                    Route::GithubBuild(name.parse().map_err(|_| unknown())?)
                } else if let Some(id) = parameter(other, "/builds/build/") {
                    Route::Build(id.parse().map_err(|_| unknown())?)
                } else if let Some(name) = parameter(other, "/artifacts/artifact/") {
                    Route::Artifact(name)
                } else if let Some(repository) = parameter(other, "/images/") {
                    Route::Images(repository)
                } else {
                    return Err(unknown().into());
                }
            }
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Builds => "/builds/all".to_string(),
            Route::Build(id) => format!("/builds/build/{}", id),
            Route::RunningBuilds => "/builds/running".to_string(),
            Route::BuildQueue => "/builds/queue".to_string(),
            Route::Artifacts => "/artifacts/all".to_string(),
            Route::Artifact(name) => {
                format!("/artifacts/artifact/{}", urlencoding::encode(name))
            }
            Route::AddArtifact => "/artifacts/create".to_string(),
            Route::GithubBuilds => "/builds/github/all".to_string(),
            Route::GithubBuild(id) => format!("/builds/github/build/{}", id),
            Route::Deployments => "/deployments".to_string(),
            Route::ImageRepositories => "/images".to_string(),
            Route::Images(repository) => format!("/images/{}", encode_segments(repository)),
            Route::ControlPanel => "/admin/control-panel".to_string(),
        }
    }

    /// Window title of the page.
    pub fn title(&self) -> String {
        let page = match self {
            Route::Home => return PRODUCT.to_string(),
            Route::Builds => "Build List",
            Route::Build(_) => "Build",
            Route::RunningBuilds => "Running Build List",
            Route::BuildQueue => "Build Queue",
            Route::Artifacts => "Artifact List",
            Route::Artifact(_) => "Artifact",
            Route::AddArtifact => "Add Artifact",
            Route::GithubBuilds => "Github Actions Builds",
            Route::GithubBuild(_) => "Github Actions Build",
            Route::Deployments => "Deployments",
            Route::ImageRepositories => "Image Repositories",
            Route::Images(_) => "Images",
            Route::ControlPanel => "Control Panel",
        };
        format!("{} | {}", PRODUCT, page)
    }
}

fn parameter(path: &str, prefix: &str) -> Option<String> {
    let raw = path.strip_prefix(prefix).filter(|rest| !rest.is_empty())?;
    Some(
        urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

/// Percent-encodes each `/` separated part, keeping the separators readable.
fn encode_segments(value: &str) -> String {
    value
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// A group of the navigation sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub label: &'static str,
    pub entries: Vec<(&'static str, Route)>,
}

/// The sidebar, in display order. Parameterised pages are reached from
/// their lists and have no entry.
pub fn navigation() -> Vec<NavGroup> {
    vec![
        NavGroup {
            label: "Home",
            entries: vec![("Home", Route::Home)],
        },
        NavGroup {
            label: "Builds",
            entries: vec![
                ("All Builds", Route::Builds),
                ("Running Builds", Route::RunningBuilds),
                ("Build Queue", Route::BuildQueue),
            ],
        },
        NavGroup {
            label: "Artifacts",
            entries: vec![
                ("All Artifacts", Route::Artifacts),
                ("Add Artifact", Route::AddArtifact),
            ],
        },
        NavGroup {
            label: "CI",
            entries: vec![("Github Actions", Route::GithubBuilds)],
        },
        NavGroup {
            label: "Images",
            entries: vec![
                ("Deployments", Route::Deployments),
                ("Image Repositories", Route::ImageRepositories),
            ],
        },
        NavGroup {
            label: "Admin",
            entries: vec![("Control Panel", Route::ControlPanel)],
        },
    ]
}

/// The sidebar as a table of groups, pages and their paths.
pub fn navigation_screen() -> Screen {
    let rows = navigation()
        .into_iter()
        .flat_map(|group| {
            group.entries.into_iter().map(move |(label, route)| {
                vec![
                    Cell::text(group.label),
                    Cell::text(label),
                    Cell::text(route.path()),
                ]
            })
        })
        .collect();
    Screen::new(PRODUCT).with_section(Section::table_or_empty(&["Group", "Page", "Path"], rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/builds/all/").unwrap(), Route::Builds);
        assert_eq!(
            Route::parse("/admin/control-panel").unwrap(),
            Route::ControlPanel
        );
    }

    #[test]
    fn test_parse_parameterised_routes() {
        assert_eq!(
            Route::parse("/builds/build/1207").unwrap(),
            Route::Build(1207)
        );
        assert_eq!(
            Route::parse("/builds/github/build/42").unwrap(),
            Route::GithubBuild(42)
        );
        assert_eq!(
            Route::parse("/images/quay.io/acme/app").unwrap(),
            Route::Images("quay.io/acme/app".to_string())
        );
        assert_eq!(
            Route::parse("/artifacts/artifact/io.netty%3Anetty-codec%3A4.1.100.Final").unwrap(),
            Route::Artifact("io.netty:netty-codec:4.1.100.Final".to_string())
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert!(Route::parse("/nope").is_err());
        assert!(Route::parse("/builds/build/").is_err());
        assert!(Route::parse("/builds/github/build/abc").is_err());
        assert!(Route::parse("/builds/build/b-lib").is_err());
    }

    #[test]
    fn test_paths_round_trip_through_parse() {
        for group in navigation() {
            for (_, route) in group.entries {
                assert_eq!(Route::parse(&route.path()).unwrap(), route);
            }
        }
    }

    #[test]
    fn test_parameters_are_encoded_in_paths() {
        let artifact = Route::Artifact("com.acme:lib 100%:1.0".to_string());
        assert_eq!(
            artifact.path(),
            "/artifacts/artifact/com.acme%3Alib%20100%25%3A1.0"
        );
        assert_eq!(Route::parse(&artifact.path()).unwrap(), artifact);

        let images = Route::Images("quay.io/acme/my app".to_string());
        assert_eq!(images.path(), "/images/quay.io/acme/my%20app");
        assert_eq!(Route::parse(&images.path()).unwrap(), images);
    }

    #[test]
    fn test_navigation_screen_lists_every_entry() {
        let screen = navigation_screen();
        let (columns, rows) = screen.table().unwrap();
        assert_eq!(columns, &["Group", "Page", "Path"]);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[1][1].plain(), "All Builds");
        assert_eq!(rows[1][2].plain(), "/builds/all");
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Home.title(), "JVM Build Service");
        assert_eq!(Route::Builds.title(), "JVM Build Service | Build List");
    }
}

//! rebuild-console - Terminal console for the JVM Build Service
//!
//! This library provides the views, state machines and REST adapters behind
//! the `rebuild-console` binary, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rebuild_tracking`): Build, artifact and image records plus status policies
//! - **Application Layer** (`application`): Views, their state machines and routes
//! - **Ports** (`ports`): Interface definitions for the backend and the terminal
//! - **Adapters** (`adapters`): REST client, renderers, presenters and the interactive loop
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rebuild_console::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let client = HttpConsoleClient::new("http://localhost:8080", None)?;
//! let renderer = TextRenderer::plain();
//!
//! // Load the first page of the build history
//! let mut builds = build_list(client, 20);
//! settle(&mut builds).await;
//!
//! println!("{}", renderer.render(&builds.screen())?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod rebuild_tracking;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{parse_command, run_interactive, settle};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonRenderer, TextRenderer};
    pub use crate::adapters::outbound::network::HttpConsoleClient;
    pub use crate::application::read_models::Screen;
    pub use crate::application::routes::Route;
    pub use crate::application::views::{
        artifact_list, build_list, view_for, AddArtifactForm, ArtifactView, BuildView, Dashboard,
        InteractiveView, ViewCommand,
    };
    pub use crate::ports::outbound::{
        AdminApi, ArtifactApi, BuildApi, ConsoleApi, OutputPresenter, ProgressReporter, QueueApi,
        ViewRenderer,
    };
    pub use crate::shared::Result;
}

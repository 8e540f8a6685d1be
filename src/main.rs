mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod rebuild_tracking;
mod shared;

use adapters::inbound::{run_interactive, settle};
use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::network::HttpConsoleClient;
use application::factories::{PresenterFactory, PresenterType, RendererFactory};
use application::read_models::{Screen, Section};
use application::routes::{navigation_screen, Route};
use application::views::{
    artifact_list, build_list, build_queue_list, deployment_list, github_build_list, image_list,
    image_repository_list, running_build_list, view_for, AddArtifactForm, ArtifactEdit,
    ArtifactView, BuildEdit, BuildTab, BuildView, ControlPanel, Dashboard, DependencySetView,
    GithubBuildView, ImageRepositorySource, InteractiveView, LabelSelector, ScmEditChanges,
};
use cli::{ArtifactsCommand, Args, BuildsCommand, Command, GithubCommand, ImagesCommand, LabelsCommand};
use config::{discover_config, load_config_from_path, CliOverrides, Settings, SERVER_ENV};
use ports::outbound::{BuildApi, OutputPresenter, ProgressReporter, ViewRenderer};
use shared::error::ExitCode;
use shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments; clap exits with code 2 on invalid input
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(
        CliOverrides {
            server_url: args.server.clone(),
            per_page: args.per_page,
            format: args.format,
        },
        std::env::var(SERVER_ENV).ok(),
        file,
    )?;

    init_tracing(args.verbose, args.quiet, settings.log_level.as_deref());
    tracing::debug!(server = %settings.server_url, per_page = settings.per_page, "resolved settings");

    let color = !args.no_color
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    // Create adapters (Dependency Injection)
    let console = Console {
        api: HttpConsoleClient::new(&settings.server_url, settings.timeout)?,
        per_page: settings.per_page,
        renderer: RendererFactory::create(settings.format, color),
        presenter: PresenterFactory::create(PresenterType::from_output(args.output.as_deref())),
        progress: if args.quiet {
            StderrProgressReporter::quiet()
        } else {
            StderrProgressReporter::new()
        },
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(console.execute(args.command))
}

/// `-v`/`-q` win over `RUST_LOG`, which wins over the config file.
fn init_tracing(verbose: u8, quiet: bool, config_level: Option<&str>) {
    let level = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(format!("warn,rebuild_console={}", level)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,rebuild_console={}",
                config_level.unwrap_or("warn")
            ))
        }),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

struct Console {
    api: HttpConsoleClient,
    per_page: u32,
    renderer: Box<dyn ViewRenderer>,
    presenter: Box<dyn OutputPresenter>,
    progress: StderrProgressReporter,
}

impl Console {
    fn present(&self, screen: &Screen) -> Result<()> {
        self.presenter.present(&self.renderer.render(screen)?)
    }

    async fn load(&self, view: &mut dyn InteractiveView) {
        self.progress.begin_loading(&view.screen().title);
        settle(view).await;
        self.progress.end_loading();
    }

    /// Loads and renders a view. A failed load is rendered, then reported
    /// through the exit code.
    async fn show(&self, view: &mut dyn InteractiveView) -> Result<ExitCode> {
        self.load(view).await;
        let screen = view.screen();
        self.present(&screen)?;
        Ok(load_outcome(&screen))
    }

    async fn execute(&self, command: Command) -> Result<ExitCode> {
        let api = self.api.clone();
        let per_page = self.per_page;
        match command {
            Command::Dashboard { label } => {
                let mut view = Dashboard::new(api);
                if let Some(label) = label {
                    view.select_label(&label);
                }
                self.show(&mut view).await
            }
            Command::Builds(command) => self.builds(command).await,
            Command::Artifacts(command) => self.artifacts(command).await,
            Command::Deployments => self.show(&mut deployment_list(api)).await,
            Command::Images(command) => self.images(command).await,
            Command::DependencySet { id } => self.show(&mut DependencySetView::new(api, id)).await,
            Command::Github(GithubCommand::List { page }) => {
                let mut view = github_build_list(api, per_page);
                view.set_page(page.page);
                self.show(&mut view).await
            }
            Command::Github(GithubCommand::View { id, tab }) => {
                let mut view = GithubBuildView::new(api, id);
                view.select_tab(tab)?;
                self.show(&mut view).await
            }
            Command::Labels(LabelsCommand::List) => self.show(&mut LabelSelector::new(api)).await,
            Command::Labels(LabelsCommand::Values { name, search }) => {
                let selector = LabelSelector::new(api);
                let values = selector.values(&name, search.as_deref()).await?;
                let screen = Screen::new(format!("Values of {}", name))
                    .with_section(if values.is_empty() {
                        Section::empty()
                    } else {
                        Section::text(None, values)
                    });
                self.present(&screen)?;
                Ok(ExitCode::Success)
            }
            Command::Admin { action, yes } => {
                let panel = ControlPanel::new(api);
                panel.run(action, yes).await?;
                self.progress
                    .report_completion(&format!("✅ {} requested", action.path_segment()));
                Ok(ExitCode::Success)
            }
            Command::Routes => {
                self.present(&navigation_screen())?;
                Ok(ExitCode::Success)
            }
            Command::Open { path } => {
                let route = Route::parse(&path)?;
                let mut view = view_for(&route, api, per_page);
                self.show(view.as_mut()).await
            }
            Command::Browse { path } => {
                let route = Route::parse(&path)?;
                let mut view = view_for(&route, api, per_page);
                self.progress.report(&format!(
                    "{} (type 'help' for commands)",
                    route.title()
                ));
                let stdin = std::io::stdin();
                run_interactive(
                    view.as_mut(),
                    stdin.lock(),
                    self.renderer.as_ref(),
                    self.presenter.as_ref(),
                    &self.progress,
                )
                .await?;
                Ok(ExitCode::Success)
            }
        }
    }

    async fn builds(&self, command: BuildsCommand) -> Result<ExitCode> {
        let api = self.api.clone();
        match command {
            BuildsCommand::List {
                page,
                gav,
                label,
                label_value,
                state,
                tool,
            } => {
                let mut view = build_list(api, self.per_page);
                for (field, value) in [("gav", gav), ("label", label), ("label-value", label_value)] {
                    if let Some(value) = value {
                        view.select(field, &value)?;
                    }
                }
                if let Some(state) = state {
                    view.select("state", state.as_query())?;
                }
                if let Some(tool) = tool {
                    view.select("tool", tool.as_query())?;
                }
                view.set_page(page.page);
                self.show(&mut view).await
            }
            BuildsCommand::View { id, tab } => {
                let mut view = BuildView::new(api, id);
                if tab != BuildTab::Details {
                    self.load(&mut view).await;
                    if view.build().is_some() {
                        view.select_tab(tab)?;
                    }
                }
                self.show(&mut view).await
            }
            BuildsCommand::Queue { page } => {
                let mut view = build_queue_list(api, self.per_page);
                view.set_page(page.page);
                self.show(&mut view).await
            }
            BuildsCommand::Running => self.show(&mut running_build_list(api)).await,
            BuildsCommand::Rebuild { id } => {
                let mut view = BuildView::new(api, id);
                self.load(&mut view).await;
                if view.build().is_none() {
                    self.present(&view.screen())?;
                    return Ok(ExitCode::ApplicationError);
                }
                let name = view.build().map(|build| build.name.clone()).unwrap_or_default();
                view.rebuild().await?;
                self.progress
                    .report_completion(&format!("✅ Queued {} for rebuild", name));
                Ok(ExitCode::Success)
            }
            BuildsCommand::Add { gavs } => self.add_artifacts(&gavs).await,
            BuildsCommand::DiscoveryLogs { id } => {
                let mut view = BuildView::new(api, id);
                self.load(&mut view).await;
                if view.build().is_none() {
                    self.present(&view.screen())?;
                    return Ok(ExitCode::ApplicationError);
                }
                self.presenter.present(&view.discovery_logs().await?)?;
                Ok(ExitCode::Success)
            }
            BuildsCommand::AttemptLogs { id } => {
                self.presenter.present(&api.attempt_logs(id).await?)?;
                Ok(ExitCode::Success)
            }
            BuildsCommand::Edit {
                scm_uri,
                toggle_version,
                memory,
                args,
                submit,
            } => {
                let mut edit = BuildEdit::new(api, scm_uri);
                self.progress.begin_loading("build info");
                edit.open().await;
                self.progress.end_loading();
                if edit.draft().draft().is_none() {
                    let screen = edit.screen();
                    self.present(&screen)?;
                    return Ok(load_outcome(&screen));
                }
                if toggle_version {
                    edit.toggle_version()?;
                }
                if let Some(memory) = memory {
                    edit.set_additional_memory(memory)?;
                }
                for arg in &args {
                    let index = edit.add_additional_arg()?;
                    edit.set_additional_arg(index, arg)?;
                }
                if submit {
                    let result = edit.confirm().await?;
                    self.report_edit(result.pr_url.as_deref());
                }
                self.present(&edit.screen())?;
                Ok(ExitCode::Success)
            }
        }
    }

    async fn artifacts(&self, command: ArtifactsCommand) -> Result<ExitCode> {
        let api = self.api.clone();
        match command {
            ArtifactsCommand::List { page, gav, state } => {
                let mut view = artifact_list(api, self.per_page);
                if let Some(gav) = gav {
                    view.select("gav", &gav)?;
                }
                if let Some(state) = state {
                    view.select("state", state.as_query())?;
                }
                view.set_page(page.page);
                self.show(&mut view).await
            }
            ArtifactsCommand::View { name } => self.show(&mut ArtifactView::new(api, name)).await,
            ArtifactsCommand::Rebuild { name } => {
                let mut view = ArtifactView::new(api, name.clone());
                self.load(&mut view).await;
                if view.artifact().is_none() {
                    self.present(&view.screen())?;
                    return Ok(ExitCode::ApplicationError);
                }
                view.rebuild().await?;
                self.progress
                    .report_completion(&format!("✅ Queued the build of {} for rebuild", name));
                Ok(ExitCode::Success)
            }
            ArtifactsCommand::Edit {
                gav,
                group,
                version,
                legacy,
                uri,
                path,
                submit,
            } => {
                let mut edit = ArtifactEdit::new(api, gav);
                self.progress.begin_loading("SCM information");
                edit.open().await;
                self.progress.end_loading();
                if edit.draft().draft().is_none() {
                    let screen = edit.screen();
                    self.present(&screen)?;
                    return Ok(load_outcome(&screen));
                }
                edit.edit(&ScmEditChanges {
                    group,
                    version,
                    legacy,
                    uri,
                    path,
                })?;
                if submit {
                    let result = edit.confirm().await?;
                    self.report_edit(result.pr_url.as_deref());
                }
                self.present(&edit.screen())?;
                Ok(ExitCode::Success)
            }
            ArtifactsCommand::Add { gavs } => self.add_artifacts(&gavs).await,
        }
    }

    async fn images(&self, command: ImagesCommand) -> Result<ExitCode> {
        let api = self.api.clone();
        match command {
            ImagesCommand::Repositories { page } => {
                let mut view = image_repository_list(api, self.per_page);
                view.set_page(page.page);
                self.show(&mut view).await
            }
            ImagesCommand::List { repository, page } => {
                let mut view = image_list(api, &repository, self.per_page);
                view.set_page(page.page);
                self.show(&mut view).await
            }
            ImagesCommand::Add { image } => {
                ImageRepositorySource::new(api).add_image(&image).await?;
                self.progress
                    .report_completion(&format!("✅ Submitted {} for analysis", image.trim()));
                Ok(ExitCode::Success)
            }
        }
    }

    /// Exit code 1 when the backend rejected any of the GAVs.
    async fn add_artifacts(&self, gavs: &[String]) -> Result<ExitCode> {
        let mut form = AddArtifactForm::new(self.api.clone());
        form.set_input(&gavs.join(","));
        self.progress.begin_loading("queue requests");
        let rejected = form.submit().await.iter().any(|r| !r.is_accepted());
        self.progress.end_loading();
        self.present(&form.screen())?;
        Ok(if rejected {
            ExitCode::ActionFailed
        } else {
            ExitCode::Success
        })
    }

    fn report_edit(&self, pr_url: Option<&str>) {
        match pr_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => self
                .progress
                .report_completion(&format!("✅ Pull request created: {}", url)),
            None => self.progress.report_completion("✅ Edit submitted"),
        }
    }
}

fn load_outcome(screen: &Screen) -> ExitCode {
    if screen.error_message().is_some() {
        ExitCode::ApplicationError
    } else {
        ExitCode::Success
    }
}

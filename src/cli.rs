use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::factories::RendererType;
use crate::application::views::{BuildTab, GithubBuildTab};
use crate::ports::outbound::AdminAction;
use crate::rebuild_tracking::domain::{ArtifactState, BuildState, BuildTool};

/// Terminal console for the JVM dependency rebuild service
#[derive(Parser, Debug)]
#[command(name = "rebuild-console")]
#[command(version)]
#[command(
    about = "Browse and manage dependency rebuilds of the JVM Build Service",
    long_about = None
)]
pub struct Args {
    /// Base URL of the rebuild service (overrides REBUILD_CONSOLE_SERVER and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Path to a config file (defaults to ./rebuild-console.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<RendererType>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<String>,

    /// Rows per page of paged lists
    #[arg(long, global = true)]
    pub per_page: Option<u32>,

    /// Disable coloured status labels
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors to stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build and artifact status charts
    Dashboard {
        /// Restrict the charts to one artifact label
        #[arg(long)]
        label: Option<String>,
    },
    /// Dependency builds
    #[command(subcommand)]
    Builds(BuildsCommand),
    /// Artifacts
    #[command(subcommand)]
    Artifacts(ArtifactsCommand),
    /// Watched deployments and their image health
    Deployments,
    /// Analysed container images
    #[command(subcommand)]
    Images(ImagesCommand),
    /// Dependencies of one dependency set
    DependencySet {
        id: i64,
    },
    /// GitHub Actions builds
    #[command(subcommand)]
    Github(GithubCommand),
    /// Artifact labels
    #[command(subcommand)]
    Labels(LabelsCommand),
    /// Administrative actions
    Admin {
        /// rebuild-all, rebuild-failed, clear-build-queue or clean-out-database
        action: AdminAction,
        /// Confirm a destructive action
        #[arg(long)]
        yes: bool,
    },
    /// List the pages of the console
    Routes,
    /// Render the page at a route path, e.g. /builds/build/<id>
    Open {
        path: String,
    },
    /// Interactively browse the page at a route path
    Browse {
        #[arg(default_value = "/")]
        path: String,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Subcommand, Debug)]
pub enum BuildsCommand {
    /// The build history
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Partial GAV: group, group:artifact or group:artifact:version
        #[arg(long)]
        gav: Option<String>,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        label_value: Option<String>,
        #[arg(long)]
        state: Option<BuildState>,
        #[arg(long)]
        tool: Option<BuildTool>,
    },
    /// One build, by its numeric id
    View {
        id: i64,
        /// details, attempts, verification-failures, shading or sbom
        #[arg(long, default_value = "details")]
        tab: BuildTab,
    },
    /// The build queue
    Queue {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Builds currently running in the cluster
    Running,
    /// Queue an existing build for a rebuild
    Rebuild {
        id: i64,
    },
    /// Queue new artifacts by GAV
    Add {
        /// GAVs, separated by commas or given as separate arguments
        #[arg(required = true)]
        gavs: Vec<String>,
    },
    /// Print the dependency discovery logs of a build
    DiscoveryLogs {
        id: i64,
    },
    /// Print the logs of one build attempt
    AttemptLogs {
        id: i64,
    },
    /// Edit the build recipe of an SCM repository
    Edit {
        scm_uri: String,
        /// Toggle "apply to this version and lower"
        #[arg(long)]
        toggle_version: bool,
        /// Additional memory for the build in MiB
        #[arg(long, value_name = "MIB")]
        memory: Option<u32>,
        /// Append an additional build argument (repeatable)
        #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
        args: Vec<String>,
        /// Submit the edit
        #[arg(long)]
        submit: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ArtifactsCommand {
    /// The artifact history
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        gav: Option<String>,
        #[arg(long)]
        state: Option<ArtifactState>,
    },
    /// One artifact
    View {
        name: String,
    },
    /// Queue the dependency build of an artifact for a rebuild
    Rebuild {
        name: String,
    },
    /// Edit the SCM location of an artifact
    Edit {
        gav: String,
        /// Apply to every artifact of the group
        #[arg(long)]
        group: Option<bool>,
        /// Apply to this version and lower
        #[arg(long)]
        version: Option<bool>,
        #[arg(long)]
        legacy: Option<bool>,
        /// SCM repository URI; an empty value clears it
        #[arg(long)]
        uri: Option<String>,
        /// Path within the repository; an empty value clears it
        #[arg(long)]
        path: Option<String>,
        /// Submit the edit
        #[arg(long)]
        submit: bool,
    },
    /// Queue new artifacts by GAV
    Add {
        #[arg(required = true)]
        gavs: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImagesCommand {
    /// Image repositories known to the service
    Repositories {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Images of one repository
    List {
        repository: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Submit an image for analysis
    Add {
        image: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum GithubCommand {
    /// GitHub Actions builds
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// One GitHub Actions build
    View {
        id: i64,
        /// runtime or build
        #[arg(long, default_value = "runtime")]
        tab: GithubBuildTab,
    },
}

#[derive(Subcommand, Debug)]
pub enum LabelsCommand {
    /// Artifact label names
    List,
    /// Values recorded for one label
    Values {
        name: String,
        /// Only values starting with this text
        #[arg(long)]
        search: Option<String>,
    },
}

//! hgspeed - Mercurial commit logs for performance dashboards
//!
//! Binary entry point.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hgspeed::config::{DEFAULT_LOG_FILTER, LogFormat, Settings};
use hgspeed::hg::HgRepository;
use hgspeed::model::{Revision, UpdateMode};
use hgspeed::render::render_entries;

#[derive(Parser)]
#[command(name = "hgspeed")]
#[command(about = "Mercurial commit logs for performance dashboards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    settings: Settings,
}

/// Which project to operate on
#[derive(Args)]
struct ProjectArgs {
    /// Project name (also the clone's directory name)
    name: String,

    /// Clone source
    #[arg(long, env = "HGSPEED_REPO_URL")]
    repo_url: String,

    /// Use this working copy instead of <base-path>/<name>
    #[arg(long)]
    working_copy: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the repository, or pull and update an existing clone
    Sync {
        #[command(flatten)]
        project: ProjectArgs,

        /// Only clone when missing; leave an existing clone untouched
        #[arg(long)]
        no_update: bool,
    },

    /// Print the commit log between two revisions
    Log {
        #[command(flatten)]
        project: ProjectArgs,

        /// Start revision (excluded when it comes back as the last entry)
        start: String,

        /// End revision
        end: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a commit's date in RFC 3339 form
    Date {
        #[command(flatten)]
        project: ProjectArgs,

        /// Commit hash or revision number
        commit: String,
    },

    /// Print the Mercurial version and whether it is supported
    Version,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.settings.log_format)?;
    run(cli)
}

/// Install the stderr tracing subscriber
fn init_tracing(format: LogFormat) -> color_eyre::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
    Ok(())
}

fn run(cli: Cli) -> color_eyre::Result<()> {
    let settings = cli.settings;
    let repository = |args: &ProjectArgs| {
        let project = settings.project(&args.name, &args.repo_url, args.working_copy.as_deref());
        HgRepository::with_executor(project, settings.executor())
    };

    match cli.command {
        Commands::Sync { project, no_update } => {
            let mode = if no_update {
                UpdateMode::CloneOnly
            } else {
                UpdateMode::Pull
            };
            repository(&project).update_repo(mode)?;
        }
        Commands::Log {
            project,
            start,
            end,
            json,
        } => {
            let entries = repository(&project).logs(&Revision::new(end), &Revision::new(start))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if !entries.is_empty() {
                println!("{}", render_entries(&entries));
            }
        }
        Commands::Date { project, commit } => {
            println!("{}", repository(&project).commit_date(&Revision::new(commit))?);
        }
        Commands::Version => {
            let executor = settings.executor();
            let version = executor.version()?;
            executor.check_version()?;
            println!("Mercurial {version} (supported)");
        }
    }

    Ok(())
}

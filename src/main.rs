use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use git_next_version::cli::orchestration::{run_workflow, WorkflowArgs, WorkflowOutcome};
use git_next_version::config;
use git_next_version::domain::VersionStyle;
use git_next_version::git::Git2Repository;
use git_next_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-next-version",
    about = "Compute the next version for a package from commits since the last release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        env = "LATEST_VERSION_TAG",
        help = "Latest released version tag, e.g. v1.2.3"
    )]
    tag: Option<String>,

    #[arg(
        short,
        long,
        env = "FIRST_COMMIT",
        help = "Revision bounding the commit range (exclusive); commits after it up to HEAD are examined"
    )]
    since: Option<String>,

    #[arg(long, env = "VERSION_STYLE", help = "Versioning scheme: X.Y.Z or X.Y")]
    style: Option<String>,

    #[arg(
        long,
        env = "IGNORE_PATHS",
        value_delimiter = ',',
        help = "Glob patterns for paths that never justify a bump (comma-separated in the environment)"
    )]
    ignore_path: Vec<String>,

    #[arg(
        long,
        env = "FORCE_PATCH_IF_NO_COMMIT_TOKEN",
        help = "Default tokenless commits with non-ignored changes to a patch bump"
    )]
    force_patch: bool,

    #[arg(long, help = "Enable debug diagnostics on stderr")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-next-version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    setup_logging(args.debug);

    match run(args) {
        Ok(outcome) => {
            ui::display_status(&outcome.to_string());

            // The version line is the whole machine-readable contract:
            // exactly one line on stdout when a bump was decided, nothing
            // otherwise. Exit 0 either way.
            if let Some(version) = outcome.version() {
                println!("{}", version);
            }
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<WorkflowOutcome> {
    let config = config::load_config(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to load config: {}", e))?;

    let version_tag = args
        .tag
        .ok_or_else(|| anyhow::anyhow!("missing version tag (--tag or LATEST_VERSION_TAG)"))?;
    let range_start = args
        .since
        .ok_or_else(|| anyhow::anyhow!("missing range start (--since or FIRST_COMMIT)"))?;

    let style_str = args.style.unwrap_or(config.version_style);
    let version_style = VersionStyle::parse(&style_str)?;

    let ignore_paths = if args.ignore_path.is_empty() {
        config.ignore_paths
    } else {
        args.ignore_path
    };

    let workflow_args = WorkflowArgs {
        version_tag,
        range_start,
        version_style,
        ignore_paths,
        force_patch: args.force_patch || config.force_patch,
    };

    let repo = Git2Repository::open(".")?;
    let outcome = run_workflow(&workflow_args, &repo)?;

    Ok(outcome)
}

/// Set up tracing on stderr, leaving stdout to the version line
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("git_next_version=debug,info").unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}

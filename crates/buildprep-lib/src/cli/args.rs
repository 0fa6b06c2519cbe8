use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Configure {
        dependency_dir: String,
        config_path: Option<String>,
        project_root: String,
        build_dir: Option<String>,
    },
    Prepare {
        dependency_dir: String,
        config_path: Option<String>,
        project_root: String,
        build_dir: Option<String>,
        fetch_url: Option<String>,
        artifact_path: Option<String>,
        force_fetch: bool,
        fetch_timeout_secs: u64,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "buildprep",
    version,
    about = "Bootstrap a native project's build directory: validate the dependency path, fetch the vendored header and run the build generator"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Create the build directory and run the build generator against the dependency path
    Configure {
        #[arg(
            value_name = "DEPENDENCY_DIR",
            help = "Path to the dependency (GLEW) directory, substituted into the generator command line"
        )]
        dependency_dir: String,

        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file"
        )]
        config: Option<String>,

        #[arg(
            short = 'C',
            long = "project-root",
            value_name = "DIR",
            help = "Project root the build directory is created under",
            default_value = "."
        )]
        project_root: String,

        #[arg(
            long = "build-dir",
            value_name = "DIR",
            help = "Overrides the build directory name"
        )]
        build_dir: Option<String>,
    },

    /// Fetch the vendored header, then create the build directory and run the build generator
    Prepare {
        #[arg(
            value_name = "DEPENDENCY_DIR",
            help = "Path to the dependency (GLEW) directory, substituted into the generator command line"
        )]
        dependency_dir: String,

        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file"
        )]
        config: Option<String>,

        #[arg(
            short = 'C',
            long = "project-root",
            value_name = "DIR",
            help = "Project root the build directory is created under",
            default_value = "."
        )]
        project_root: String,

        #[arg(
            long = "build-dir",
            value_name = "DIR",
            help = "Overrides the build directory name"
        )]
        build_dir: Option<String>,

        #[arg(
            long = "fetch-url",
            value_name = "URL",
            help = "Overrides the artifact fetch URL"
        )]
        fetch_url: Option<String>,

        #[arg(
            long = "artifact-path",
            value_name = "FILE",
            help = "Overrides where the fetched artifact is written, relative to the project root"
        )]
        artifact_path: Option<String>,

        #[arg(
            long = "force-fetch",
            help = "Re-fetch the artifact even if it already exists",
            action = ArgAction::SetTrue
        )]
        force_fetch: bool,

        #[arg(
            long = "fetch-timeout",
            value_name = "SECONDS",
            help = "HTTP timeout for the artifact fetch",
            default_value_t = 30
        )]
        fetch_timeout_secs: u64,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .init();

    let command = match cli.command {
        CliCommand::Configure {
            dependency_dir,
            config,
            project_root,
            build_dir,
        } => Command::Configure {
            dependency_dir,
            config_path: config,
            project_root,
            build_dir,
        },
        CliCommand::Prepare {
            dependency_dir,
            config,
            project_root,
            build_dir,
            fetch_url,
            artifact_path,
            force_fetch,
            fetch_timeout_secs,
        } => Command::Prepare {
            dependency_dir,
            config_path: config,
            project_root,
            build_dir,
            fetch_url,
            artifact_path,
            force_fetch,
            fetch_timeout_secs,
        },
    };

    Args { command, log_level }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dashboard_agent::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dashboard-agent")]
#[command(version)]
#[command(
    about = "Render the charm-managed dashboard configuration from orchestrator state",
    long_about = None
)]
struct Cli {
    /// Filesystem root the managed files are written under.
    #[arg(long, global = true, default_value = "/")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render all managed configuration files and apply side effects
    #[clap(visible_alias = "r")]
    Render {
        /// Restrict the run to one target by name, e.g. haproxy.cfg
        #[arg(long)]
        only: Option<String>,
    },
    /// Print every context map as JSON without writing anything
    #[clap(visible_alias = "c")]
    Contexts,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DASHBOARD_AGENT_LOG")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Render { only } => {
            dashboard_agent::render(&cli.root, only.as_deref()).map(|rendered| {
                for file in rendered {
                    let status = if file.changed { "wrote" } else { "unchanged" };
                    println!("{status} {}", file.path.display());
                }
            })
        }
        Commands::Contexts => dashboard_agent::context_report(&cli.root).map(|report| {
            println!("{report}");
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

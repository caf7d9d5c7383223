//! Playbook CLI
//!
//! Formation / playbook JSON export from the command line

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use pb_cli::{FormationSource, SchemaKind};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pb")]
#[command(about = "Design football formations and export playbooks as JSON", long_about = None)]
struct Cli {
    /// Editor config file (JSON or YAML); overrides PB_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List catalog formations, routes and coverages
    Catalog,

    /// Export a formation file
    Formation {
        /// tackle, flag or a player count
        #[arg(long, conflicts_with = "formation")]
        template: Option<String>,

        /// Catalog formation id to start from
        #[arg(long)]
        formation: Option<String>,

        /// Formation name (also drives the file name)
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Output directory
        #[arg(long)]
        out: PathBuf,
    },

    /// Build a playbook from a request file (JSON or YAML)
    Playbook {
        /// Request file path
        #[arg(long)]
        request: PathBuf,

        /// Output directory
        #[arg(long)]
        out: PathBuf,
    },

    /// Print the JSON schema of an export document
    Schema {
        #[arg(value_enum)]
        kind: SchemaArg,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum SchemaArg {
    Playbook,
    Formation,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = pb_cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Catalog => {
            print!("{}", pb_cli::catalog_listing());
        }

        Commands::Formation { template, formation, name, description, out } => {
            let source = match (template, formation) {
                (_, Some(id)) => FormationSource::Catalog(id),
                (Some(template), None) => {
                    FormationSource::Template(pb_cli::parse_template(&template)?)
                }
                (None, None) => FormationSource::Template(pb_core::editor::DESIGNER_TEAM_SIZE),
            };

            let file = pb_cli::formation_file(
                &config,
                &source,
                name.as_deref(),
                description.as_deref(),
                chrono::Utc::now(),
            )?;
            let path = pb_cli::write_export(&out, &file)?;
            println!("Formation written to {}", path.display());
        }

        Commands::Playbook { request, out } => {
            println!("Building playbook from {}", request.display());
            let file = pb_cli::playbook_file(&config, &request, chrono::Utc::now())?;
            let path = pb_cli::write_export(&out, &file)?;
            println!("Playbook written to {}", path.display());
        }

        Commands::Schema { kind } => {
            let kind = match kind {
                SchemaArg::Playbook => SchemaKind::Playbook,
                SchemaArg::Formation => SchemaKind::Formation,
            };
            println!("{}", pb_cli::schema_json(kind)?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pb CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

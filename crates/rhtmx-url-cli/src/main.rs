mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rhtmx_url::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "rhtmx-url")]
#[command(version, about = "RHTMX named routes - resolve URLs and render the router script", long_about = None)]
struct Cli {
    /// Route configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a named route to a URL
    Resolve {
        /// Route name
        name: String,

        /// Positional values, in placeholder order
        values: Vec<String>,

        /// Named value (repeatable)
        #[arg(short, long = "named", value_name = "KEY=VALUE", value_parser = commands::resolve::parse_key_value)]
        named: Vec<(String, String)>,

        /// Arguments as JSON (object = named, array = positional)
        #[arg(long, conflicts_with_all = ["values", "named"])]
        json: Option<String>,
    },

    /// List configured routes and their placeholders
    Routes,

    /// Print the page-embedded router script
    Script {
        /// Override the global the route table is exposed as
        #[arg(short, long)]
        global: Option<String>,

        /// Pretty-print instead of minifying
        #[arg(long)]
        pretty: bool,

        /// Wrap the output in a <script> element
        #[arg(long)]
        tag: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            name,
            values,
            named,
            json,
        } => {
            commands::resolve::execute(&cli.config, &name, values, named, json.as_deref())?;
        }
        Commands::Routes => {
            commands::routes::execute(&cli.config)?;
        }
        Commands::Script {
            global,
            pretty,
            tag,
        } => {
            commands::script::execute(&cli.config, global, pretty, tag)?;
        }
    }

    Ok(())
}

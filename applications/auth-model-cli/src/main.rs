/// Auth Model CLI - render profile records in their wire form
use auth_model_cli::{render, resolve_config, RenderOptions};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "auth-model")]
#[command(about = "Render auth service profile records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a profile record and print it in wire form
    Render {
        /// JSON input file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Configuration file path
        #[arg(short, long, env = "AUTH_MODEL_CONFIG")]
        config: Option<PathBuf>,
        /// Drop absent fields instead of writing null
        #[arg(long)]
        omit_nulls: bool,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// List profile fields and their serialized keys
    Fields,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_model=info,auth_model_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            config,
            omit_nulls,
            pretty,
        } => {
            let options = RenderOptions { omit_nulls, pretty };
            let config = resolve_config(config.as_deref(), options)?;

            let reader: Box<dyn Read> = match input {
                Some(path) => {
                    tracing::info!("Reading record from {}", path.display());
                    Box::new(File::open(&path)?)
                }
                None => Box::new(std::io::stdin()),
            };

            println!("{}", render(reader, config)?);
        }
        Commands::Fields => {
            print!("{}", auth_model_cli::render::field_table());
        }
    }

    Ok(())
}

//! restforge CLI entrypoint
//! Parses command-line arguments and dispatches to the scaffolding engine.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use restforge::core::config::{CONFIG_FILE_NAME, ConfigStore};
use restforge::core::schema::RouteMap;
use restforge::{Scaffolder, SchemaBuilder};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "restforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root the configuration and generated tree live under
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create the configuration file and materialize the project tree
    Init,
    /// Create the default configuration file only
    Config,
    /// Generate a controller (CRUD defaults, or custom routes via --routes)
    Controller {
        /// Controller name; a trailing `Controller` suffix is optional
        name: String,
        /// JSON object mapping route names to HTTP methods,
        /// e.g. '{"byName":"GET","reindex":"POST"}'
        #[arg(long)]
        routes: Option<String>,
    },
    /// Add routes to an existing controller
    Routes {
        /// Controller name; a trailing `Controller` suffix is optional
        name: String,
        /// JSON object mapping route names to HTTP methods
        #[arg(long)]
        routes: String,
    },
    /// Generate a data model
    Model {
        /// Model name, used verbatim for the file name
        name: String,
        /// Property declarations, e.g. '{title: String, done: Boolean}'
        #[arg(long)]
        props: String,
    },
    /// Generate every controller and model in the configured schema
    Build,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Init => run_init(&cli.root).await?,
        Commands::Config => run_config(&cli.root).await?,
        Commands::Controller { name, routes } => {
            run_controller(&cli.root, name, routes.as_deref()).await?
        }
        Commands::Routes { name, routes } => run_routes(&cli.root, name, routes).await?,
        Commands::Model { name, props } => run_model(&cli.root, name, props).await?,
        Commands::Build => run_build(&cli.root).await?,
    }
    Ok(())
}

/// Load the project configuration and bind a scaffolder to the root.
async fn scaffolder_for(root: &Path) -> anyhow::Result<Scaffolder> {
    let store = ConfigStore::new(root);
    let config = store
        .load()
        .await
        .context("Failed to load project configuration")?;
    Ok(Scaffolder::new(root, config)?)
}

fn parse_route_map(raw: &str) -> anyhow::Result<RouteMap> {
    serde_json::from_str(raw)
        .context("--routes must be a JSON object mapping route names to HTTP methods")
}

async fn run_init(root: &Path) -> anyhow::Result<()> {
    let store = ConfigStore::new(root);
    if store.create().await? {
        println!("Created {CONFIG_FILE_NAME}");
    } else {
        info!("{} already exists, keeping it", CONFIG_FILE_NAME);
    }

    let scaffolder = scaffolder_for(root).await?;
    if scaffolder.init().await? {
        println!("Initialized project tree at {}", root.display());
    } else {
        println!("Project tree already initialized");
    }
    Ok(())
}

async fn run_config(root: &Path) -> anyhow::Result<()> {
    let store = ConfigStore::new(root);
    if store.create().await? {
        println!("Created {CONFIG_FILE_NAME}");
    } else {
        println!("{CONFIG_FILE_NAME} already exists");
    }
    Ok(())
}

async fn run_controller(root: &Path, name: &str, routes: Option<&str>) -> anyhow::Result<()> {
    let scaffolder = scaffolder_for(root).await?;

    let created = match routes {
        Some(raw) => {
            let map = parse_route_map(raw)?;
            scaffolder
                .create_controller_with_routes(name, &map)
                .await
                .context("Failed to generate controller")?
        }
        None => scaffolder
            .create_plain_controller(name)
            .await
            .context("Failed to generate controller")?,
    };

    let path = scaffolder.controller_path(name);
    if created {
        println!("Created controller {}", path.display());
    } else {
        warn!(path = %path.display(), "Controller already exists, nothing to do");
        println!("Controller {} already exists", path.display());
    }
    Ok(())
}

async fn run_routes(root: &Path, name: &str, routes: &str) -> anyhow::Result<()> {
    let scaffolder = scaffolder_for(root).await?;
    let map = parse_route_map(routes)?;

    if !scaffolder.add_routes(name, &map).await? {
        anyhow::bail!(
            "controller `{name}` does not exist (expected {})",
            scaffolder.controller_path(name).display()
        );
    }
    println!(
        "Added routes to {}",
        scaffolder.controller_path(name).display()
    );
    Ok(())
}

async fn run_model(root: &Path, name: &str, props: &str) -> anyhow::Result<()> {
    let scaffolder = scaffolder_for(root).await?;

    if scaffolder
        .create_model(name, props)
        .await
        .context("Failed to generate model")?
    {
        println!("Created model {}", scaffolder.model_path(name).display());
    } else {
        println!(
            "Model {} already exists",
            scaffolder.model_path(name).display()
        );
    }
    Ok(())
}

async fn run_build(root: &Path) -> anyhow::Result<()> {
    let summary = SchemaBuilder::new(root)
        .build()
        .await
        .context("Schema build failed")?;
    println!(
        "Schema build complete: {} created, {} skipped",
        summary.created, summary.skipped
    );
    Ok(())
}

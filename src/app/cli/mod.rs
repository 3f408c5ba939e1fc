//! CLI Adapter.

mod add;
mod remove;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::api;
use crate::app::config::{PathOverrides, StorePaths};
use crate::domain::{AppError, HomeVariant, normalize_tenant_id};

#[derive(Parser)]
#[command(name = "tenant-manager")]
#[command(version)]
#[command(
    about = "Validate and maintain a multi-tenant tenants.json store against its plugin catalog",
    long_about = None
)]
struct Cli {
    /// Configuration file (default: ./tenant-manager.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Tenant store file
    #[arg(long, global = true)]
    tenants: Option<PathBuf>,
    /// Plugin catalog file
    #[arg(long, global = true)]
    plugins: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write starter tenants.json and plugins.json
    #[clap(visible_alias = "i")]
    Init,
    /// Validate every tenant against the plugin catalog
    #[clap(visible_alias = "c")]
    Check {
        /// Report every invalid tenant instead of stopping at the first
        #[arg(short, long)]
        all: bool,
    },
    /// List tenants
    #[clap(visible_alias = "ls")]
    List,
    /// List the plugin catalog
    Plugins,
    /// Rewrite the tenant store with normalized keys
    Normalize,
    /// Print the normalized form of a tenant ID
    NormalizeId {
        /// Tenant ID as typed
        id: String,
    },
    /// Add a tenant
    #[clap(visible_alias = "a")]
    Add {
        /// Tenant ID (normalized before use)
        id: String,
        /// Display name of the app
        #[arg(long)]
        app_name: Option<String>,
        /// Reverse-DNS package name (e.g. com.acme.app)
        #[arg(long)]
        package_name: Option<String>,
        /// Company initial (derived from the ID when omitted)
        #[arg(long)]
        company_initial: Option<String>,
        /// Relative path to the logo asset
        #[arg(long)]
        logo_path: Option<String>,
        /// Home variant: dashboard, simple, member or custom
        #[arg(long)]
        home_variant: Option<HomeVariant>,
        /// Plugin to enable (repeatable)
        #[arg(short, long = "feature")]
        features: Vec<String>,
    },
    /// Remove a tenant
    #[clap(visible_alias = "rm")]
    Remove {
        /// Tenant ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Enable plugins on a tenant
    Enable {
        /// Tenant ID
        id: String,
        /// Plugin IDs
        #[arg(required = true, value_name = "PLUGIN")]
        plugin_ids: Vec<String>,
    },
    /// Disable plugins on a tenant
    Disable {
        /// Tenant ID
        id: String,
        /// Plugin IDs
        #[arg(required = true, value_name = "PLUGIN")]
        plugin_ids: Vec<String>,
    },
    /// Replace a member tenant's home tabs from a JSON file
    Tabs {
        /// Tenant ID
        id: String,
        /// JSON file holding an array of {id, label} objects
        file: PathBuf,
    },
    /// Print an example home tab list to start a tabs file from
    TabsExample,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides =
        PathOverrides { config: cli.config, tenants: cli.tenants, plugins: cli.plugins };

    let result = dispatch(cli.command, &overrides);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn dispatch(command: Commands, overrides: &PathOverrides) -> Result<i32, AppError> {
    // Store paths are only resolved for commands that touch the store.
    let paths = || api::resolve_paths(overrides);

    match command {
        Commands::NormalizeId { id } => {
            println!("{}", normalize_tenant_id(&id));
            Ok(0)
        }
        Commands::TabsExample => {
            println!("{}", api::example_tabs()?);
            Ok(0)
        }
        Commands::Init => run_init(paths()?).map(|_| 0),
        Commands::Check { all } => run_check(paths()?, all),
        Commands::List => run_list(paths()?).map(|_| 0),
        Commands::Plugins => run_plugins(paths()?).map(|_| 0),
        Commands::Normalize => run_normalize(paths()?).map(|_| 0),
        Commands::Add {
            id,
            app_name,
            package_name,
            company_initial,
            logo_path,
            home_variant,
            features,
        } => add::run_add(
            paths()?,
            add::AddArgs {
                id,
                app_name,
                package_name,
                company_initial,
                logo_path,
                home_variant,
                features,
            },
        )
        .map(|_| 0),
        Commands::Remove { id, yes } => remove::run_remove(paths()?, &id, yes).map(|_| 0),
        Commands::Enable { id, plugin_ids } => {
            run_toggle(paths()?, &id, &plugin_ids, true).map(|_| 0)
        }
        Commands::Disable { id, plugin_ids } => {
            run_toggle(paths()?, &id, &plugin_ids, false).map(|_| 0)
        }
        Commands::Tabs { id, file } => {
            let count = api::set_home_tabs(paths()?, &id, &file)?;
            println!("✅ Set {} home tab(s) for '{}'", count, normalize_tenant_id(&id));
            Ok(0)
        }
    }
}

fn run_init(paths: StorePaths) -> Result<(), AppError> {
    let outcome = api::init(paths)?;
    for path in &outcome.created {
        println!("✅ Created {}", path.display());
    }
    Ok(())
}

fn run_check(paths: StorePaths, all: bool) -> Result<i32, AppError> {
    let outcome = api::check(paths, all)?;
    if outcome.is_valid() {
        println!(
            "✅ {} tenant(s) valid against {} plugin(s)",
            outcome.tenants, outcome.plugins
        );
        return Ok(0);
    }

    for error in &outcome.errors {
        eprintln!("Error: {}", error);
    }
    Ok(1)
}

fn run_list(paths: StorePaths) -> Result<(), AppError> {
    let tenants = api::list_tenants(paths)?;
    if tenants.is_empty() {
        println!("No tenants found");
        return Ok(());
    }

    for tenant in &tenants {
        println!(
            "{}\t{}\t{}\t{} feature(s)",
            tenant.id, tenant.app_name, tenant.package_name, tenant.features
        );
    }
    Ok(())
}

fn run_plugins(paths: StorePaths) -> Result<(), AppError> {
    for plugin in api::list_plugins(paths)? {
        match &plugin.description {
            Some(description) => println!("{}\t{}\t{}", plugin.id, plugin.label, description),
            None => println!("{}\t{}", plugin.id, plugin.label),
        }
    }
    Ok(())
}

fn run_normalize(paths: StorePaths) -> Result<(), AppError> {
    let outcome = api::normalize(paths)?;
    for rename in &outcome.renamed {
        println!("  {} → {}", rename.from, rename.to);
    }
    println!("✅ Normalized {} tenant(s)", outcome.tenants);
    Ok(())
}

fn run_toggle(
    paths: StorePaths,
    id: &str,
    plugin_ids: &[String],
    enable: bool,
) -> Result<(), AppError> {
    let change = if enable {
        api::enable_features(paths, id, plugin_ids)?
    } else {
        api::disable_features(paths, id, plugin_ids)?
    };

    let verb = if enable { "Enabled" } else { "Disabled" };
    if change.changed.is_empty() {
        println!("✅ No changes for '{}'", change.tenant);
    } else {
        println!("✅ {} {} for '{}'", verb, change.changed.join(", "), change.tenant);
    }
    for plugin in &change.unchanged {
        println!("  already {}: {}", verb.to_lowercase(), plugin);
    }
    Ok(())
}

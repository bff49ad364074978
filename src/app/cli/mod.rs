//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, ActionKind, DeployOptions};
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "strike")]
#[command(version)]
#[command(
    about = "Download Strike component bundles and deploy them to a Salesforce org",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download bundles and their dependencies into the components folder
    #[clap(visible_alias = "d")]
    Download {
        /// Bundle name(s); all catalog bundles when omitted
        bundles: Vec<String>,
    },
    /// Deploy a bundle from the components folder to the org
    #[clap(visible_alias = "dp")]
    Deploy {
        /// Bundle name; a prototype bundle is created when omitted
        bundle: Option<String>,
        /// Deploy catalog dependencies and required Apex classes first
        #[arg(short = 'w', long)]
        with_deps: bool,
        /// Description for newly created bundles
        #[arg(short, long)]
        description: Option<String>,
        /// Login username
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Show the deployment order for bundles
    Deps {
        /// Bundle name(s)
        #[arg(required = true)]
        bundles: Vec<String>,
    },
    /// List catalog bundles
    #[clap(visible_alias = "ls")]
    List,
    /// Design token utilities
    Tokens {
        #[command(subcommand)]
        command: TokensCommands,
    },
}

#[derive(Subcommand)]
enum TokensCommands {
    /// Merge local token lines into a copy of the remote tokens document
    Merge {
        /// Local tokens file
        local: PathBuf,
        /// Remote tokens document
        remote: PathBuf,
        /// Write the merged document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Download { bundles } => run_download(&bundles).map(|_| 0),
        Commands::Deploy { bundle, with_deps, description, username } => {
            run_deploy(DeployOptions { bundle, with_deps, description }, username)
        }
        Commands::Deps { bundles } => run_deps(&bundles).map(|_| 0),
        Commands::List => run_list().map(|_| 0),
        Commands::Tokens { command } => match command {
            TokensCommands::Merge { local, remote, output } => {
                run_tokens_merge(local, remote, output).map(|_| 0)
            }
        },
    };

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

fn run_download(bundles: &[String]) -> Result<(), AppError> {
    let outcome = api::download(bundles)?;

    for bundle in &outcome.bundles {
        println!("📦 {} ({} files)", bundle.name, bundle.files.len());
    }
    for class in &outcome.apex_classes {
        println!("📄 classes/{}.cls", class);
    }
    for class in &outcome.missing_apex_classes {
        println!("⚠️  Apex class {} not found in repository", class);
    }
    println!("✅ Downloaded {} files", outcome.file_count());
    Ok(())
}

fn run_deploy(options: DeployOptions, username: Option<String>) -> Result<i32, AppError> {
    let outcome = api::deploy(options, username.as_deref())?;

    for warning in &outcome.warnings {
        println!("⚠️  {}", warning);
    }
    for action in &outcome.actions {
        let icon = match action.kind {
            ActionKind::Created | ActionKind::CreatedDefault => "✨",
            ActionKind::Updated | ActionKind::Merged => "🔄",
            ActionKind::UpToDate => "✅",
            ActionKind::Skipped => "⏭️ ",
        };
        println!("{} {}", icon, action.describe());
    }

    if outcome.has_failures() {
        eprintln!("Error: {} document(s) could not be reconciled", outcome.malformed.len());
        return Ok(1);
    }
    println!("✅ Deployed {}", outcome.bundles.join(", "));
    Ok(0)
}

fn run_deps(bundles: &[String]) -> Result<(), AppError> {
    let plan = api::deps(bundles)?;

    println!("Deployment order:");
    for (index, bundle) in plan.bundles.iter().enumerate() {
        println!("  {}. {} ({})", index + 1, bundle.name, bundle.kind);
    }
    if !plan.apex_classes.is_empty() {
        println!("Apex classes:");
        for class in &plan.apex_classes {
            println!("  - {}", class);
        }
    }
    Ok(())
}

fn run_list() -> Result<(), AppError> {
    for bundle in api::list()? {
        if bundle.summary.is_empty() {
            println!("{} [{}]", bundle.name, bundle.kind);
        } else {
            println!("{} [{}] {}", bundle.name, bundle.kind, bundle.summary);
        }
    }
    Ok(())
}

fn run_tokens_merge(
    local: PathBuf,
    remote: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let outcome = api::merge_tokens(&local, &remote, output.as_deref())?;

    if outcome.is_up_to_date() {
        println!("✅ {} is already up to date", remote.display());
        return Ok(());
    }

    match (&outcome.written_to, &outcome.merged) {
        (Some(path), _) => {
            println!("✅ Merged {} line(s) into {}", outcome.missing.len(), path.display())
        }
        (None, Some(merged)) => print!("{}", merged),
        (None, None) => {}
    }
    Ok(())
}

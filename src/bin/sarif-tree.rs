use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sarif_tree::digest::{content_digest, to_hex};
use sarif_tree::model::SarifLog;
use sarif_tree::rewrite::Rewrite;
use sarif_tree::storage;
use sarif_tree::structural::Structural;
use sarif_tree::visitors::{GuidInserter, KindCounter, RebaseUriRewriter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sarif-tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the nodes of each kind in a log.
    Stats {
        file: String,
    },
    /// Print the structural hash code of a log.
    Hash {
        file: String,
    },
    /// Print the SHA-256 content digest of a log.
    Digest {
        file: String,
    },
    /// Compare two logs structurally; fails when they differ.
    Equal {
        left: String,
        right: String,
    },
    /// Make artifact URIs under a base relative to it.
    Rebase {
        file: String,
        base_name: String,
        base_uri: String,
        #[arg(long)]
        output: Option<String>,
    },
    /// Assign a guid to every result that lacks one.
    InsertGuids {
        file: String,
        #[arg(long)]
        output: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(log: &SarifLog, output: Option<String>) -> Result<()> {
    match output {
        Some(path) => {
            storage::save(&path, log)?;
            println!("Wrote {}", path);
        }
        None => println!("{}", storage::to_string(log)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { file } => {
            let log = storage::load(&file)?;
            let mut counter = KindCounter::new();
            log.rewrite(&mut counter);

            println!("Node counts for {}:", file);
            for (kind, count) in counter.counts() {
                println!("  {:<30} {}", kind, count);
            }
            println!("  {:<30} {}", "total", counter.total());
        }
        Commands::Hash { file } => {
            let log = storage::load(&file)?;
            println!("{}", log.structural_hash());
        }
        Commands::Digest { file } => {
            let log = storage::load(&file)?;
            println!("{}", to_hex(&content_digest(&log)));
        }
        Commands::Equal { left, right } => {
            let left_log = storage::load(&left)?;
            let right_log = storage::load(&right)?;

            if !left_log.structural_eq(&right_log) {
                bail!("{} and {} differ", left, right);
            }
            println!("{} and {} are structurally equal", left, right);
        }
        Commands::Rebase {
            file,
            base_name,
            base_uri,
            output,
        } => {
            let log = storage::load(&file)?;
            let mut rebaser = RebaseUriRewriter::new(&base_name, &base_uri)
                .with_context(|| format!("Invalid base for {}", base_name))?;
            let log = log.rewrite(&mut rebaser);
            tracing::info!(rebased = rebaser.rebased(), base = %rebaser.base_uri(), "rebase finished");
            emit(&log, output)?;
        }
        Commands::InsertGuids { file, output } => {
            let log = storage::load(&file)?;
            let mut inserter = GuidInserter::new();
            let log = log.rewrite(&mut inserter);
            tracing::info!(inserted = inserter.inserted(), "guid insertion finished");
            emit(&log, output)?;
        }
    }

    Ok(())
}

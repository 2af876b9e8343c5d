//! `rebalancer-deploy`: deploy SynthRebalancer wired to Synthetix.

use clap::{Parser, Subcommand};
use eyre::Result;
use rebalancer_constants::SYNTHETIX;
use rebalancer_deploy::Deployment;
use rebalancer_registry::{AddressResolver, SourceRegistry};
use rebalancer_types::{DeployConfig, NetworkIdentifier, RegistrySource};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rebalancer-deploy", version, about = "Deploy SynthRebalancer wired to Synthetix")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding compiled contract artifacts.
    #[arg(long, global = true)]
    build_dir: Option<PathBuf>,

    /// Synthetix deployment registry: a local directory or an HTTP base URL.
    #[arg(long, global = true)]
    registry: Option<RegistrySource>,

    /// Output results as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Deploy SynthRebalancer to a network.
    Deploy {
        /// Target network, e.g. `develop`, `ropsten` or `ropsten-fork`.
        #[arg(long)]
        network: NetworkIdentifier,
    },

    /// Print the Synthetix address a deployment to the network would use.
    Resolve {
        /// Target network.
        #[arg(long)]
        network: NetworkIdentifier,
    },

    /// List the network table.
    Networks,
}

fn init_tracing(use_colors: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(use_colors)
        .with_writer(std::io::stderr)
        .init();
}

fn print_deployment(deployment: &Deployment, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(deployment)?);
        return Ok(());
    }
    println!("network:      {} (id {})", deployment.network, deployment.network_id);
    println!("synthetix:    {}", deployment.synthetix);
    if !deployment.synthetix_resolved {
        println!("              (unresolved, sentinel address)");
    }
    println!("contract:     {}", deployment.receipt.address);
    println!("transaction:  {}", deployment.receipt.transaction_hash);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = DeployConfig::from_env()?;
    if let Some(dir) = cli.build_dir {
        config = config.with_build_dir(dir);
    }
    if let Some(registry) = cli.registry {
        config = config.with_registry(registry);
    }
    init_tracing(config.use_colors());
    tracing::debug!(?config, "loaded deployment config");

    let resolver = AddressResolver::new(SourceRegistry::from(config.registry()));

    match cli.command {
        Commands::Deploy { network } => {
            let deployment = rebalancer_deploy::run(&config, &network, &resolver).await?;
            print_deployment(&deployment, cli.json)?;
        }
        Commands::Resolve { network } => {
            let resolution = resolver.lookup(&network).await;
            if cli.json {
                let out = serde_json::json!({
                    "network": network.as_str(),
                    "registryKey": network.registry_key(),
                    "contract": SYNTHETIX,
                    "address": resolution.address(),
                    "resolved": resolution.is_resolved(),
                    "reason": resolution.reason().map(ToString::to_string),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", resolution.address());
            }
        }
        Commands::Networks => {
            for entry in config.networks() {
                println!("{entry}");
            }
        }
    }

    Ok(())
}

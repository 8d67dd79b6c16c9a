//! Main entry point for the `deployer` binary.
//!
//! Deploys one compiled contract per invocation: load configuration,
//! resolve the named artifact, submit through the selected network
//! profile, wait for confirmation, print the deployed address. Exits 0 on
//! success, 1 on any failure.

use clap::Parser;
use deployer_cli::{deploy, ArtifactStore, DeployError};
use deployer_config::Config;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line arguments for the deployer.
#[derive(Parser, Debug)]
#[command(name = "deployer", version, about = "Deploys a compiled contract to a configured network")]
struct Args {
	/// Name of the compiled contract artifact to deploy
	#[arg(required_unless_present = "list")]
	artifact: Option<String>,

	/// Path to the configuration file
	#[arg(short, long, default_value = "config/deployer.toml", env = "DEPLOYER_CONFIG")]
	config: PathBuf,

	/// Network profile to use instead of the configured default
	#[arg(short, long)]
	network: Option<String>,

	/// Override the artifact directory from the configuration file
	#[arg(long)]
	artifacts_dir: Option<PathBuf>,

	/// List deployable artifacts and exit
	#[arg(long)]
	list: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();

	// Diagnostics go to stderr; stdout is reserved for the address line.
	use tracing_subscriber::{fmt, EnvFilter};
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.init();

	match run(args).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			tracing::error!(error = %err, "deployment failed");
			eprintln!("{err}");
			ExitCode::FAILURE
		},
	}
}

async fn run(args: Args) -> Result<(), DeployError> {
	let config = Config::from_file(&args.config)?;

	let artifacts_dir = args
		.artifacts_dir
		.unwrap_or_else(|| config.artifacts_dir.clone());
	let store = ArtifactStore::new(artifacts_dir);

	if args.list {
		for name in store.list()? {
			println!("{name}");
		}
		return Ok(());
	}

	let Some(name) = args.artifact.as_deref() else {
		// clap enforces the artifact argument unless --list is given
		unreachable!()
	};

	let (profile_name, profile) = config.select_network(args.network.as_deref())?;
	tracing::info!(network = profile_name, "using network profile");

	let artifact = store.load(name)?;
	let deployment = deploy(&artifact, profile).await?;

	println!("{} deployed to: {}", artifact.name, deployment.contract_address);
	Ok(())
}

use std::{io, process::ExitCode};

use scripts::{
    artifacts::ArtifactStore,
    chain::AlloyDeployer,
    cli::Cli,
    commands::{deploy_dao, report},
    errors::ScriptError,
    utils::{setup_client, write_deployments},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::parse_or_exit_status() {
        Ok(cli) => cli,
        Err(status) => return ExitCode::from(status),
    };

    tracing_subscriber::fmt()
        .pretty()
        .with_writer(io::stderr)
        .init();

    ExitCode::from(report(run(cli).await, &mut io::stderr()))
}

/// Deploy both contracts, recording them in the deployments file if requested
async fn run(cli: Cli) -> Result<(), ScriptError> {
    let client = setup_client(&cli.priv_key, &cli.rpc_url).await?;
    let deployer = AlloyDeployer::new(
        client,
        ArtifactStore::new(&cli.artifacts_dir),
        cli.confirmations,
    );

    let deployed = deploy_dao(&deployer, &cli.deploy_config(), &mut io::stdout()).await?;

    if let Some(path) = &cli.deployments_path {
        write_deployments(path, &deployed)?;
    }

    Ok(())
}

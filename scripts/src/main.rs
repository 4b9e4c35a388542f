use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    command.run(&priv_key, &rpc_url, &deployments_path).await
}

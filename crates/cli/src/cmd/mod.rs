mod alerts;
mod browse;
mod health;
pub(crate) mod helpers;
mod version;

use anyhow::Result;
use clap::Subcommand;

use crate::client::AlertClient;

#[derive(Subcommand)]
pub enum Commands {
    /// Create, list, update and delete alerts
    #[command(subcommand)]
    Alerts(alerts::AlertsCmd),
    /// Interactive session: browse, filter and edit alerts
    Browse,
    /// Check that the API is reachable
    Health,
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    let client = AlertClient::new(&opts.server);
    match opts.cmd {
        Commands::Alerts(cmd) => alerts::execute(cmd, mode, &client).await,
        Commands::Browse => browse::execute(client).await,
        Commands::Health => health::execute(mode, &client).await,
        Commands::Version => version::execute(mode, &client),
    }
}

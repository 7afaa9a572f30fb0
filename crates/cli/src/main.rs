mod client;
mod cmd;
mod output;
mod session;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use cmd::Commands;
use output::OutputMode;

pub const DEFAULT_SERVER: &str = "http://localhost:3001";

#[derive(Parser)]
#[command(name = "panda", version, about = "The Flying Panda visa alert tracker")]
pub struct Opts {
    #[clap(subcommand)]
    cmd: Commands,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(
        long,
        global = true,
        env = "PANDA_SERVER",
        default_value = DEFAULT_SERVER,
        help = "Alerts API base URL"
    )]
    server: String,
}

impl Opts {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();
    cmd::run(opts).await
}

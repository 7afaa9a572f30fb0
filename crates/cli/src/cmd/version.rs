use serde::Serialize;

use crate::client::AlertClient;
use crate::output::{banner, print_json, OutputMode};

#[derive(Serialize)]
struct VersionReport<'a> {
    client: &'static str,
    version: &'static str,
    server: &'a str,
    target: String,
}

pub fn execute(mode: OutputMode, client: &AlertClient) -> anyhow::Result<()> {
    let report = VersionReport {
        client: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        server: client.base_url(),
        target: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
    };

    match mode {
        OutputMode::Json => print_json(&report)?,
        OutputMode::Human => banner::print_version_block(report.version, report.server),
    }
    Ok(())
}

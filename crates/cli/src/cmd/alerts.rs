use anyhow::{bail, Result};
use clap::Subcommand;

use panda_common::{AlertFilter, AlertPatch, AlertStatus, NewAlert, VisaType};

use super::helpers;
use crate::client::AlertClient;
use crate::output::{
    alerts_table, format_created, print_json, print_success, prompt, spinner, theme, OutputMode,
};
use crate::session::distinct_countries;

#[derive(Subcommand)]
pub enum AlertsCmd {
    List(ListArgs),
    Get(IdArgs),
    Create(CreateArgs),
    Update(UpdateArgs),
    /// Advance status: Active → Booked → Expired → Active
    Cycle(IdArgs),
    Delete(DeleteArgs),
}

#[derive(clap::Args)]
pub struct ListArgs {
    #[arg(long, help = "Only alerts for this country (case-insensitive)")]
    pub country: Option<String>,
    #[arg(long, help = "Only alerts with this status (case-insensitive)")]
    pub status: Option<String>,
}

#[derive(clap::Args)]
pub struct IdArgs {
    #[arg(help = "Alert ID")]
    pub id: String,
}

#[derive(clap::Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub city: String,
    #[arg(long, default_value = "Tourist", value_parser = helpers::parse_visa_type)]
    pub visa_type: VisaType,
    #[arg(long, value_parser = helpers::parse_status, help = "Defaults to Active")]
    pub status: Option<AlertStatus>,
}

#[derive(clap::Args)]
pub struct UpdateArgs {
    #[arg(help = "Alert ID")]
    pub id: String,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long, value_parser = helpers::parse_visa_type)]
    pub visa_type: Option<VisaType>,
    #[arg(long, value_parser = helpers::parse_status)]
    pub status: Option<AlertStatus>,
}

impl UpdateArgs {
    pub fn to_patch(&self) -> AlertPatch {
        AlertPatch {
            country: self.country.clone(),
            city: self.city.clone(),
            visa_type: self.visa_type,
            status: self.status,
        }
    }
}

#[derive(clap::Args)]
pub struct DeleteArgs {
    #[arg(help = "Alert ID")]
    pub id: String,
    #[arg(long, help = "Skip confirmation prompt")]
    pub yes: bool,
}

pub async fn execute(cmd: AlertsCmd, mode: OutputMode, client: &AlertClient) -> Result<()> {
    match cmd {
        AlertsCmd::List(args) => list(client, args, mode).await,
        AlertsCmd::Get(args) => get(client, args, mode).await,
        AlertsCmd::Create(args) => create(client, args, mode).await,
        AlertsCmd::Update(args) => update(client, args, mode).await,
        AlertsCmd::Cycle(args) => cycle(client, args, mode).await,
        AlertsCmd::Delete(args) => delete(client, args, mode).await,
    }
}

async fn list(client: &AlertClient, args: ListArgs, mode: OutputMode) -> Result<()> {
    let filter = AlertFilter {
        country: args.country,
        status: args.status,
    };

    let sp = spinner::for_mode(mode, "Fetching alerts...");
    let resp = client.list(&filter).await;
    if let Some(sp) = &sp {
        spinner::finish_clear(sp);
    }
    let resp = resp?;

    match mode {
        OutputMode::Json => print_json(&resp)?,
        OutputMode::Human => {
            theme::print_header("Visa Slot Alerts");
            theme::print_filters(filter.country(), filter.status());
            if resp.data.is_empty() {
                theme::print_dim("No alerts found. Create your first visa alert!");
                return Ok(());
            }
            println!("{}", alerts_table(&resp.data));
            theme::print_dim(&format!("{} alert(s)", resp.count));
            if filter.is_empty() {
                theme::print_dim(&format!(
                    "Countries: {}",
                    distinct_countries(&resp.data).join(", ")
                ));
            }
        }
    }

    Ok(())
}

async fn get(client: &AlertClient, args: IdArgs, mode: OutputMode) -> Result<()> {
    let sp = spinner::for_mode(mode, "Fetching alert...");
    let resp = client.get(&args.id).await;
    if let Some(sp) = &sp {
        spinner::finish_clear(sp);
    }
    let alert = resp?.data;

    match mode {
        OutputMode::Json => print_json(&alert)?,
        OutputMode::Human => {
            theme::print_header("Alert Details");
            theme::print_kv("ID", &alert.id);
            theme::print_kv("Country", &alert.country);
            theme::print_kv("City", &alert.city);
            theme::print_kv("Visa Type", alert.visa_type.as_str());
            theme::print_kv("Status", alert.status.as_str());
            theme::print_kv("Created", &format_created(&alert.created_at));
            println!();
        }
    }

    Ok(())
}

async fn create(client: &AlertClient, args: CreateArgs, mode: OutputMode) -> Result<()> {
    let body = NewAlert {
        country: args.country,
        city: args.city,
        visa_type: args.visa_type,
        status: args.status,
    };

    let sp = spinner::for_mode(mode, "Creating alert...");
    let resp = client.create(&body).await;
    if let Some(sp) = &sp {
        match &resp {
            Ok(_) => spinner::finish_ok(sp, "Alert created successfully"),
            Err(_) => spinner::finish_clear(sp),
        }
    }
    let created = resp?;

    match mode {
        OutputMode::Json => print_json(&created)?,
        OutputMode::Human => {
            theme::print_kv("ID", &created.data.id);
            theme::print_kv("Status", created.data.status.as_str());
        }
    }

    Ok(())
}

async fn update(client: &AlertClient, args: UpdateArgs, mode: OutputMode) -> Result<()> {
    let patch = args.to_patch();
    if patch.is_empty() {
        bail!("nothing to update: pass at least one of --country, --city, --visa-type, --status");
    }

    let sp = spinner::for_mode(mode, "Updating alert...");
    let resp = client.update(&args.id, &patch).await;
    if let Some(sp) = &sp {
        spinner::finish_clear(sp);
    }
    let updated = resp?;

    match mode {
        OutputMode::Json => print_json(&updated)?,
        OutputMode::Human => print_success(&format!("Alert {} updated", args.id)),
    }

    Ok(())
}

async fn cycle(client: &AlertClient, args: IdArgs, mode: OutputMode) -> Result<()> {
    let current = client.get(&args.id).await?.data;
    let next = current.status.next();
    let updated = client.update_status(&args.id, next).await?;

    match mode {
        OutputMode::Json => print_json(&updated)?,
        OutputMode::Human => print_success(&format!(
            "Status updated: {} → {}",
            current.status, updated.data.status
        )),
    }

    Ok(())
}

async fn delete(client: &AlertClient, args: DeleteArgs, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Human && !args.yes && !prompt::confirm_delete() {
        theme::print_dim("Cancelled.");
        return Ok(());
    }

    let sp = spinner::for_mode(mode, "Deleting alert...");
    let resp = client.delete(&args.id).await;
    if let Some(sp) = &sp {
        spinner::finish_clear(sp);
    }
    let deleted = resp?;

    match mode {
        OutputMode::Json => print_json(&deleted)?,
        OutputMode::Human => print_success(&format!(
            "Alert deleted: {} / {}",
            deleted.data.country, deleted.data.city
        )),
    }

    Ok(())
}

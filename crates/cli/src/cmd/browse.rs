use anyhow::Result;

use panda_common::{Alert, AlertStatus, VisaType};

use crate::client::AlertClient;
use crate::output::{alerts_table, banner, print_notice, prompt, theme};
use crate::session::{AlertForm, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    FilterCountry,
    FilterStatus,
    ClearFilters,
    Create,
    CycleStatus,
    Delete,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::Refresh,
        Action::FilterCountry,
        Action::FilterStatus,
        Action::ClearFilters,
        Action::Create,
        Action::CycleStatus,
        Action::Delete,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::FilterCountry => "Filter by country",
            Self::FilterStatus => "Filter by status",
            Self::ClearFilters => "Clear filters",
            Self::Create => "Create alert",
            Self::CycleStatus => "Cycle status",
            Self::Delete => "Delete alert",
            Self::Quit => "Quit",
        }
    }
}

pub async fn execute(client: AlertClient) -> Result<()> {
    let mut session = Session::new(client);
    let mut form = AlertForm::default();

    banner::print_banner();
    session.refresh().await;

    loop {
        render(&mut session);

        let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
        let Some(choice) = prompt::choose("What next?", &labels, 0) else {
            break;
        };

        match Action::ALL[choice] {
            Action::Refresh => session.refresh().await,
            Action::FilterCountry => {
                let mut items = vec!["All Countries".to_string()];
                items.extend(session.countries.iter().cloned());
                if let Some(i) = prompt::choose("Country", &items, 0) {
                    let country = (i > 0).then(|| items[i].clone());
                    session.set_country_filter(country).await;
                }
            }
            Action::FilterStatus => {
                let mut items = vec!["All Statuses".to_string()];
                items.extend(AlertStatus::ALL.iter().map(|s| s.to_string()));
                if let Some(i) = prompt::choose("Status", &items, 0) {
                    let status = (i > 0).then(|| AlertStatus::ALL[i - 1]);
                    session.set_status_filter(status).await;
                }
            }
            Action::ClearFilters => session.clear_filters().await,
            Action::Create => {
                if let Some(filled) = fill_form(&form)? {
                    form = filled;
                    if session.create(&form).await {
                        form = AlertForm::default();
                    }
                }
            }
            Action::CycleStatus => {
                if let Some(id) = pick_alert(&session.alerts, "Cycle status of") {
                    session.cycle_status(&id).await;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_alert(&session.alerts, "Delete") {
                    if prompt::confirm_delete() {
                        session.delete(&id).await;
                    }
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn render(session: &mut Session) {
    session.expire_banners();

    theme::print_header("Visa Slot Alerts");
    for notice in session.banners() {
        print_notice(notice);
    }
    theme::print_filters(session.filter.country(), session.filter.status());

    if session.loading {
        theme::print_dim("Loading alerts...");
    } else if session.alerts.is_empty() {
        theme::print_dim("No alerts found. Create your first visa alert!");
    } else {
        println!("{}", alerts_table(&session.alerts));
    }
}

/// Prompts for every form field, starting from `current`. `None` when the
/// user backs out of a selection.
fn fill_form(current: &AlertForm) -> Result<Option<AlertForm>> {
    let country = prompt::input_text("Country", &current.country)?;
    let city = prompt::input_text("City", &current.city)?;

    let visa_items: Vec<String> = VisaType::ALL.iter().map(|v| v.to_string()).collect();
    let visa_default = VisaType::ALL
        .iter()
        .position(|v| *v == current.visa_type)
        .unwrap_or(0);
    let Some(visa) = prompt::choose("Visa type", &visa_items, visa_default) else {
        return Ok(None);
    };

    let status_items: Vec<String> = AlertStatus::ALL.iter().map(|s| s.to_string()).collect();
    let status_default = AlertStatus::ALL
        .iter()
        .position(|s| *s == current.status)
        .unwrap_or(0);
    let Some(status) = prompt::choose("Status", &status_items, status_default) else {
        return Ok(None);
    };

    Ok(Some(AlertForm {
        country,
        city,
        visa_type: VisaType::ALL[visa],
        status: AlertStatus::ALL[status],
    }))
}

fn pick_alert(alerts: &[Alert], verb: &str) -> Option<String> {
    if alerts.is_empty() {
        theme::print_dim("No alerts to choose from.");
        return None;
    }
    let labels: Vec<String> = alerts.iter().map(alert_label).collect();
    let i = prompt::choose_fuzzy(&format!("{verb} which alert?"), &labels)?;
    Some(alerts[i].id.clone())
}

fn alert_label(alert: &Alert) -> String {
    format!(
        "{} / {} · {} · {}",
        alert.country, alert.city, alert.visa_type, alert.status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn every_action_has_a_distinct_label() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }

    #[test]
    fn alert_label_shows_key_fields() {
        let alert = Alert {
            id: "a-1".into(),
            country: "USA".into(),
            city: "Chennai".into(),
            visa_type: VisaType::Student,
            status: AlertStatus::Booked,
            created_at: Utc::now(),
        };
        assert_eq!(alert_label(&alert), "USA / Chennai · Student · Booked");
    }
}

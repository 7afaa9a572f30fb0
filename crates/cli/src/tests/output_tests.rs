#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use panda_common::{Alert, AlertStatus, VisaType};

    use crate::output::table::{build_table, status_cell};
    use crate::output::{alerts_table, format_created, print_json, OutputMode};

    #[test]
    fn output_mode_json() {
        let mode = OutputMode::Json;
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn print_json_valid() {
        let val = serde_json::json!({"key": "value"});
        assert!(print_json(&val).is_ok());
    }

    #[test]
    fn build_table_creates_headers() {
        let table = build_table(&["A", "B", "C"]);
        let rendered = table.to_string();
        assert!(rendered.contains("A"));
        assert!(rendered.contains("B"));
        assert!(rendered.contains("C"));
    }

    #[test]
    fn status_cell_shows_status_name() {
        let mut table = build_table(&["Status"]);
        table.add_row(vec![status_cell(AlertStatus::Booked)]);
        assert!(table.to_string().contains("Booked"));
    }

    #[test]
    fn format_created_is_readable() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_created(&ts), "Mar 1, 2026 09:30 UTC");
    }

    #[test]
    fn alerts_table_lists_each_alert() {
        let alerts = vec![
            Alert {
                id: "a-1".into(),
                country: "USA".into(),
                city: "Chennai".into(),
                visa_type: VisaType::Tourist,
                status: AlertStatus::Active,
                created_at: Utc::now(),
            },
            Alert {
                id: "a-2".into(),
                country: "Canada".into(),
                city: "Mumbai".into(),
                visa_type: VisaType::Student,
                status: AlertStatus::Expired,
                created_at: Utc::now(),
            },
        ];
        let rendered = alerts_table(&alerts).to_string();
        assert!(rendered.contains("Chennai"));
        assert!(rendered.contains("Mumbai"));
        assert!(rendered.contains("Expired"));
        assert!(rendered.contains("Visa Type"));
    }
}

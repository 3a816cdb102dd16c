use park_times_lambda_rust::ParkError;
use park_times_lambda_rust::disney::decode;
use park_times_lambda_rust::model::config::ParkConfig;
use park_times_lambda_rust::model::schedule::{RawScheduleEntry, SchedulePage, ScheduleTable};
use park_times_lambda_rust::schedule::{clock_token, flatten_table, project};

fn raw(date: &str, start: &str, end: &str) -> RawScheduleEntry {
    RawScheduleEntry {
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        type_field: "Operating".to_string(),
    }
}

#[test]
fn projects_fixture_in_input_order() {
    let page: SchedulePage = decode(include_str!("fixtures/schedule.json")).unwrap();
    let out = project(&page.schedules, &ParkConfig::new("80007944")).unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].date, "2024-06-01");
    assert_eq!(out[0].opening_time, "2024-06-01T09:00:00-04:00");
    assert_eq!(out[0].closing_time, "2024-06-01T23:00:00-04:00");
    assert_eq!(out[1].type_field, "Extra Magic Hours");
    assert_eq!(out[1].opening_time, "2024-06-01T19:00:00-04:00");
    // 0100 closes after midnight
    assert_eq!(out[2].date, "2024-06-02");
    assert_eq!(out[2].closing_time, "2024-06-03T01:00:00-04:00");
}

#[test]
fn rollover_only_for_leading_zero_hours() {
    let config = ParkConfig::new("80007944");
    let out = project(&[raw("2024-06-01", "1000", "0030"), raw("2024-06-01", "1000", "1830")], &config).unwrap();
    assert_eq!(out[0].closing_time, "2024-06-02T00:30:00-04:00");
    assert_eq!(out[1].closing_time, "2024-06-01T18:30:00-04:00");
}

#[test]
fn uses_configured_formats_and_zone() {
    let mut config = ParkConfig::new("P1").with_timezone("Europe/Paris");
    config.date_format = "%A %e %B".to_string();
    config.time_format = "%H:%M".to_string();
    let out = project(&[raw("2024-06-01", "0930", "2300")], &config).unwrap();
    assert_eq!(out[0].date, "Saturday  1 June");
    assert_eq!(out[0].opening_time, "09:30");
    assert_eq!(out[0].closing_time, "23:00");
}

#[test]
fn closing_inside_dst_gap_keeps_whole_schedule() {
    let config = ParkConfig::new("80007944");
    let out = project(&[raw("2024-03-08", "0900", "2300"), raw("2024-03-09", "0900", "0230")], &config).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].closing_time, "2024-03-08T23:00:00-05:00");
    assert_eq!(out[1].opening_time, "2024-03-09T09:00:00-05:00");
    assert_eq!(out[1].closing_time, "2024-03-10T03:30:00-04:00");
}

#[test]
fn colon_clock_tokens_are_accepted() {
    assert_eq!(clock_token("09:30"), "0930");
    assert_eq!(clock_token("23:00:00"), "2300");
    assert_eq!(clock_token("0930"), "0930");

    let out = project(&[raw("2024-06-01", "09:00:00", "01:00:00")], &ParkConfig::new("1")).unwrap();
    assert_eq!(out[0].opening_time, "2024-06-01T09:00:00-04:00");
    assert_eq!(out[0].closing_time, "2024-06-02T01:00:00-04:00");
}

#[test]
fn bad_clock_token_propagates_parse_error() {
    let err = project(&[raw("2024-06-01", "9am", "2300")], &ParkConfig::new("1")).unwrap_err();
    assert!(matches!(err, ParkError::Parse { .. }), "error was: {}", err);
}

#[test]
fn flattens_park_dates_in_order() {
    let table: ScheduleTable = decode(include_str!("fixtures/joined_schedule.json")).unwrap();
    let out = flatten_table(&table, "P1", "%d/%m/%Y").unwrap();

    let summary: Vec<(&str, &str, &str, &str)> = out
        .iter()
        .map(|e| (e.date.as_str(), e.opening_time.as_str(), e.closing_time.as_str(), e.type_field.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("01/06/2024", "09:30", "23:00", "Operating"),
            ("01/06/2024", "08:30", "09:30", "Extra Magic Hours"),
            ("02/06/2024", "09:30", "22:00", "Operating"),
        ]
    );
}

#[test]
fn flatten_reports_missing_park() {
    let table: ScheduleTable = decode(include_str!("fixtures/joined_schedule.json")).unwrap();
    let err = flatten_table(&table, "P2", "%Y-%m-%d").unwrap_err();
    assert!(matches!(err, ParkError::ParkNotFound { ref park_id } if park_id == "P2"), "error was: {}", err);
}

#[test]
fn flatten_skips_blocks_without_hours() {
    let body = serde_json::json!({
        "P1": { "times": {
            "2024-06-01": [
                { "openingTime": null, "closingTime": null, "type": "Closed" },
                { "openingTime": "10:00", "closingTime": "18:00" }
            ],
            "2024-06-02": [
                { "openingTime": "09:30", "closingTime": "22:00", "type": "Operating" }
            ]
        } },
        "P2": { "times": { "2024-06-01": [ { "type": "Closed", "openingTime": null } ] } }
    });
    let table: ScheduleTable = decode(&body.to_string()).unwrap();
    let out = flatten_table(&table, "P1", "%Y-%m-%d").unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].date, "2024-06-01");
    assert_eq!(out[0].opening_time, "10:00");
    assert_eq!(out[0].type_field, "");
    assert_eq!(out[1].date, "2024-06-02");
    assert_eq!(out[1].type_field, "Operating");

    assert!(flatten_table(&table, "P2", "%Y-%m-%d").unwrap().is_empty());
}

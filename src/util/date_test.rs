use super::*;

#[test]
fn format_fr_reorders_iso_date() {
    assert_eq!(format_fr("2025-03-15"), "15/03/2025");
}

#[test]
fn format_fr_drops_time_suffix() {
    assert_eq!(format_fr("2025-03-15T09:30:00"), "15/03/2025");
}

#[test]
fn format_fr_returns_unrecognized_input_unchanged() {
    assert_eq!(format_fr("demain"), "demain");
    assert_eq!(format_fr(""), "");
}

#[test]
fn is_past_compares_iso_strings() {
    assert!(is_past("2025-03-14", "2025-03-15"));
    assert!(!is_past("2025-03-15", "2025-03-15"));
    assert!(!is_past("2025-03-16", "2025-03-15"));
}

#[test]
fn is_past_is_false_without_a_reference_day() {
    // SSR and test builds have no browser clock and an empty `today`.
    assert!(!is_past("2025-03-14", ""));
}

#[test]
fn today_is_empty_in_non_hydrate_tests() {
    assert!(today().is_empty());
}

use super::*;

#[test]
fn parses_plain_integer() {
    assert_eq!("42".parse::<Threshold>().unwrap(), Threshold::Count(42.0));
}

#[test]
fn parses_percent() {
    assert_eq!("80%".parse::<Threshold>().unwrap(), Threshold::Percent(80.0));
}

#[test]
fn parses_human_bytes_case_insensitive() {
    assert_eq!("5M".parse::<Threshold>().unwrap(), Threshold::Bytes(5_242_880));
    assert_eq!("5m".parse::<Threshold>().unwrap(), Threshold::Bytes(5_242_880));
}

#[test]
fn byte_round_trip_at_power_of_1024_boundary() {
    let bytes = parse_human_bytes("5M").unwrap();
    assert_eq!(bytes, 5_242_880);
    assert_eq!(format_human_bytes(bytes), "5.0M");
}

#[test]
fn byte_round_trip_fractional() {
    let bytes = parse_human_bytes("1.5G").unwrap();
    assert_eq!(format_human_bytes(bytes), "1.5G");
}

#[test]
fn small_counts_format_as_bytes() {
    assert_eq!(format_human_bytes(512), "512B");
}

#[test]
fn strip_percent_sign_handles_both_forms() {
    assert_eq!(strip_percent_sign("80%"), Some(80));
    assert_eq!(strip_percent_sign("80"), Some(80));
}

#[test]
fn invalid_threshold_is_rejected() {
    assert!("not-a-number".parse::<Threshold>().is_err());
}

#[test]
fn more_is_worse_thresholds() {
    let warn = Threshold::Count(80.0);
    let crit = Threshold::Count(90.0);
    assert_eq!(evaluate_value_more_is_worse(50.0, warn, crit), Status::Ok);
    assert_eq!(evaluate_value_more_is_worse(85.0, warn, crit), Status::Warn);
    assert_eq!(evaluate_value_more_is_worse(95.0, warn, crit), Status::Crit);
}

#[test]
fn less_is_worse_thresholds() {
    let warn = Threshold::Bytes(parse_human_bytes("2G").unwrap());
    let crit = Threshold::Bytes(parse_human_bytes("1G").unwrap());
    let plenty = parse_human_bytes("5G").unwrap() as f64;
    let low = parse_human_bytes("500M").unwrap() as f64;
    assert_eq!(evaluate_value_less_is_worse(plenty, warn, crit), Status::Ok);
    assert_eq!(evaluate_value_less_is_worse(low, warn, crit), Status::Crit);
}

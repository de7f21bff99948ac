use benchgate::estimates::parse_mean_ns;

#[test]
fn test_reads_point_estimate() {
    let data = br#"{
        "mean": {
            "confidence_interval": {"confidence_level": 0.95, "lower_bound": 39000000.0, "upper_bound": 41000000.0},
            "point_estimate": 40000000.0,
            "standard_error": 12345.6
        },
        "median": {"point_estimate": 39900000.0}
    }"#;
    assert_eq!(parse_mean_ns(data).unwrap(), 40_000_000.0);
}

#[test]
fn test_integer_point_estimate() {
    assert_eq!(
        parse_mean_ns(br#"{"mean": {"point_estimate": 123}}"#).unwrap(),
        123.0
    );
}

#[test]
fn test_numeric_string_point_estimate() {
    assert_eq!(
        parse_mean_ns(br#"{"mean": {"point_estimate": "4.2e7"}}"#).unwrap(),
        42_000_000.0
    );
}

#[test]
fn test_empty_mean_rejected() {
    let err = parse_mean_ns(br#"{"mean": {}}"#).unwrap_err();
    assert!(err.contains("point_estimate"));
}

#[test]
fn test_missing_mean_rejected() {
    let err = parse_mean_ns(br#"{"median": {"point_estimate": 1.0}}"#).unwrap_err();
    assert!(err.contains("mean"));
}

#[test]
fn test_wrong_shapes_rejected() {
    let docs: [&[u8]; 6] = [
        br#"{"mean": 5}"#,
        br#"{"mean": {"point_estimate": null}}"#,
        br#"{"mean": {"point_estimate": true}}"#,
        br#"{"mean": {"point_estimate": [1.0]}}"#,
        br#"{"mean": {"point_estimate": "slow"}}"#,
        br#"[{"mean": {"point_estimate": 1.0}}]"#,
    ];
    for doc in docs {
        assert!(
            parse_mean_ns(doc).is_err(),
            "accepted {}",
            String::from_utf8_lossy(doc)
        );
    }
}

#[test]
fn test_invalid_json_rejected() {
    assert!(parse_mean_ns(b"{not json").is_err());
    assert!(parse_mean_ns(b"").is_err());
}

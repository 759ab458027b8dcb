use baryjd::{
    hjd2bjd, utc2bjd, BarycentricConverter, ConversionKind, ConversionRequest, EmbeddedTimeStandard,
    ObserverLocation, SkyDirection, Time, TimeConverter, UtcJulianDate, Vsop87Ephemeris, UTC,
};
use chrono::DateTime;
use qtty::{Second, Seconds};

const RA: f64 = 277.805_75;
const DEC: f64 = 52.785_42;

#[test]
fn utc2bjd_golden_epoch() {
    let bjd = utc2bjd(&[2_459_430.285_65], RA, DEC, 50.0, 30.0, 95.0).unwrap();
    assert_eq!(bjd, vec![2_459_430.287_784]);
}

#[test]
fn hjd2bjd_golden_epoch() {
    let bjd = hjd2bjd(&[2_451_544.998_591_25], RA, DEC).unwrap();
    assert_eq!(bjd, vec![2_451_544.999_335]);
}

#[test]
fn batch_keeps_order_and_count() {
    let epochs = [2_459_500.7, 2_450_000.1, 2_455_555.5, 2_459_500.7];
    let bjd = utc2bjd(&epochs, RA, DEC, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(bjd.len(), epochs.len());
    assert_eq!(bjd[0], bjd[3]);
    assert!(bjd[1] < bjd[2] && bjd[2] < bjd[0]);
}

#[test]
fn request_boundary_matches_free_functions() {
    let converter = BarycentricConverter::embedded();
    let epochs = vec![2_459_430.285_65, 2_459_431.0];
    let response = ConversionRequest::new(ConversionKind::Utc2Bjd, RA, DEC, epochs.clone())
        .with_observer(50.0, 30.0, 95.0)
        .execute(&converter)
        .unwrap();
    assert_eq!(
        response.bjd_tdb,
        utc2bjd(&epochs, RA, DEC, 50.0, 30.0, 95.0).unwrap()
    );
}

#[test]
fn unsupported_kind_is_a_client_error() {
    let request = ConversionRequest {
        f: Some("bogus".into()),
        ra: Some(RA),
        dec: Some(DEC),
        jd: Some(vec![2_459_430.0]),
        ..ConversionRequest::default()
    };
    let err = request
        .execute(&BarycentricConverter::embedded())
        .unwrap_err();
    assert_eq!(err.kind(), "unsupported_conversion");
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn tighter_leap_table_expiry_rejects_later_epochs() {
    let standard = EmbeddedTimeStandard::with_expiry(Time::new(2_459_000.5));
    let converter = BarycentricConverter::new(Vsop87Ephemeris::new(), standard);
    let target = SkyDirection::new(RA, DEC).unwrap();
    assert!(converter
        .utc_to_bjd(&[2_458_000.0], &target, &ObserverLocation::GEOCENTER)
        .is_ok());
    let err = converter
        .utc_to_bjd(&[2_458_000.0, 2_459_430.0], &target, &ObserverLocation::GEOCENTER)
        .unwrap_err();
    assert_eq!(err.kind(), "out_of_range_instant");
}

#[test]
fn datetime_bridge_feeds_the_converter() {
    // 2021-08-01T18:51:20.160Z
    let datetime = DateTime::from_timestamp(1_627_843_880, 160_000_000).unwrap();
    let utc = UtcJulianDate::from_datetime(datetime);
    assert!((utc.value() - 2_459_428.285_65).abs() < 1e-9);

    let tdb = TimeConverter::<EmbeddedTimeStandard>::default()
        .to_tdb(&utc)
        .unwrap();
    let offset = (tdb - Time::<baryjd::TDB>::new(utc.value())).to::<Second>();
    assert!((offset - Seconds::new(69.184)).abs() < Seconds::new(0.002));
}

#[test]
fn utc_instant_type_is_distinct_from_tdb() {
    let utc: Time<UTC> = Time::new(2_451_545.0);
    assert_eq!(utc.standard(), baryjd::TimeStandard::Utc);
    assert_eq!(format!("{}", utc.standard()), "UTC");
}

#[cfg(feature = "serde")]
#[test]
fn json_request_round_trip() {
    let body = r#"{"f":"hjd2bjd","ra":277.80575,"dec":52.78542,"jd":[2451544.99859125]}"#;
    let request: ConversionRequest = serde_json::from_str(body).unwrap();
    let response = request
        .execute(&BarycentricConverter::embedded())
        .unwrap();
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"bjd_tdb":[2451544.999335]}"#);
}

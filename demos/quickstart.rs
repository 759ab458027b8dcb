use baryjd::{
    BarycentricConverter, ConversionKind, ConversionRequest, ObserverLocation, SkyDirection, Time,
    UTC,
};
use chrono::DateTime;

fn main() -> baryjd::Result<()> {
    let converter = BarycentricConverter::embedded();
    let target = SkyDirection::new(277.80575, 52.78542)?;
    let site = ObserverLocation::new(50.0, 30.0, 95.0)?;

    // 2021-08-03T18:51:20.160Z, JD(UTC) 2459430.28565
    let observed = DateTime::from_timestamp(1_628_016_680, 160_000_000).unwrap_or_default();
    let utc = Time::<UTC>::from_datetime(observed);
    let tdb = converter.time_converter().to_tdb(&utc)?;
    let correction = converter.barycentric_correction(&utc, &target, &site)?;
    let bjd = converter.utc_to_bjd_single(utc, &target, &site)?;
    let hjd = converter.utc_to_hjd_single(utc, &target)?;

    println!("UTC:        {utc}");
    println!("TDB:        {tdb}");
    println!("Light time: {}", correction.seconds());
    println!("BJD_TDB:    {bjd}");
    println!("HJD:        {hjd}");

    let response = ConversionRequest::new(ConversionKind::Hjd2Bjd, 277.80575, 52.78542, [2451544.99859125])
        .execute(&converter)?;
    println!("hjd2bjd 2451544.99859125 -> {:?}", response.bjd_tdb);
    Ok(())
}

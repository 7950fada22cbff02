use lotkeeper::{LotConfig, LotError, ParkingLot, Tier, Vehicle};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn loads_config_from_file_and_runs_the_simulation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[lot]
small = 0
medium = 10
large = 0

[simulation]
arrivals = ["large"]
"#
    )
    .unwrap();

    let config = LotConfig::from_file(file.path()).unwrap();
    let mut lot = ParkingLot::new(config.lot.small, config.lot.medium, config.lot.large).unwrap();

    let mut vehicles: Vec<Vehicle> = config
        .simulation
        .arrivals
        .iter()
        .map(|class| class.parse::<Tier>().map(Vehicle::new))
        .collect::<Result<_, _>>()
        .unwrap();

    for vehicle in &mut vehicles {
        lot.admit(vehicle).unwrap();
    }
    assert_eq!(lot.available_spots_in(Tier::Medium), 7);
}

#[test]
fn missing_config_file_reports_io_error() {
    let err = LotConfig::from_file("/nonexistent/lot.toml").unwrap_err();
    assert!(matches!(err, LotError::IoError(_)));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let err = LotConfig::from_toml_str("[lot").unwrap_err();
    assert!(matches!(err, LotError::TomlError(_)));
}

#[test]
fn negative_capacity_in_file_is_rejected() {
    let err = LotConfig::from_toml_str(
        r#"
[lot]
small = 1
medium = -3
large = 1
"#,
    )
    .unwrap_err();
    assert!(matches!(err, LotError::InvalidCapacity { .. }));
}

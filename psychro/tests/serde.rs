#![cfg(feature = "serde")]

use psychro::{Humidity, MoistAir, RelativeHumidity, wet_bulb};
use serde_json::json;

#[test]
fn constants_table_round_trips() {
    let air = MoistAir::default();
    let text = serde_json::to_string(&air).unwrap();
    let back: MoistAir = serde_json::from_str(&text).unwrap();
    assert_eq!(back, air);
}

#[test]
fn solver_config_from_json() {
    let config: wet_bulb::Config = serde_json::from_value(json!({
        "max_iters": 200,
        "humidity_ratio_tol": 1e-7,
        "max_relative_step": 0.005,
        "specific_heat": "Constant",
    }))
    .unwrap();

    assert_eq!(config.max_iters, 200);
    assert_eq!(config.specific_heat, wet_bulb::SpecificHeatModel::Constant);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn relative_humidity_is_validated_on_input() {
    let rh: RelativeHumidity = serde_json::from_value(json!(0.4)).unwrap();
    assert_eq!(rh, RelativeHumidity::from_fraction(0.4).unwrap());
    assert_eq!(serde_json::to_value(rh).unwrap(), json!(0.4));

    assert!(serde_json::from_value::<RelativeHumidity>(json!(40.0)).is_err());

    let humidity: Humidity = serde_json::from_value(json!({ "Relative": 0.25 })).unwrap();
    assert_eq!(
        humidity,
        Humidity::Relative(RelativeHumidity::from_fraction(0.25).unwrap())
    );
}

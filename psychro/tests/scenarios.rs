use approx::assert_relative_eq;
use psychro::{
    Ambient, ConfigurationError, DomainError, Humidity, Psychrometrics, PsychroError,
    RelativeHumidity,
    wet_bulb::{self, Action, Event, Status},
};
use psychro_units::imperial::in_cubic_feet_per_pound;
use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::foot,
    mass_density::pound_per_cubic_foot,
    pressure::psi,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_fahrenheit,
};

fn fahrenheit(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(value)
}

fn rh(fraction: f64) -> RelativeHumidity {
    RelativeHumidity::from_fraction(fraction).unwrap()
}

#[test]
fn mile_high_site() -> Result<(), PsychroError> {
    let denver = Psychrometrics::at_elevation(Length::new::<foot>(5280.0))?;

    // The standard atmosphere gives 12.100 psia at 5280 ft; charts often
    // quote about 12.23, which is within 1.1 %.
    let p = denver.pressure().get::<psi>();
    assert_relative_eq!(p, 12.100, epsilon = 1e-3);
    assert_relative_eq!(p, 12.23, max_relative = 0.011);

    let t = fahrenheit(50.0);
    let w = denver.humidity_ratio(t, rh(0.55))?;
    assert_relative_eq!(w.get::<ratio>(), 0.005_076, epsilon = 1e-5);

    let rho = denver.density(t, rh(0.55))?;
    assert_relative_eq!(rho.get::<pound_per_cubic_foot>(), 0.063_58, epsilon = 1e-4);

    // Thinner air holds more water per pound at the same RH.
    let sea_level = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;
    assert!(w > sea_level.humidity_ratio(t, rh(0.55))?);
    Ok(())
}

#[test]
fn wet_bulb_at_low_pressure() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_pressure(Pressure::new::<psi>(12.5))?;
    let t = fahrenheit(68.0);

    let iterated = psy.wet_bulb_iterative(t, rh(0.70))?.get::<degree_fahrenheit>();
    assert!((58.0..=64.0).contains(&iterated), "wet bulb {iterated} °F");

    let regressed = psy.wet_bulb_regression(t, rh(0.70))?.get::<degree_fahrenheit>();
    assert!((iterated - regressed).abs() <= 2.0);
    Ok(())
}

#[test]
fn elevation_boundaries() {
    let at = |z: f64| Psychrometrics::at_elevation(Length::new::<foot>(z));

    assert!(matches!(
        at(-1500.0),
        Err(PsychroError::Configuration(
            ConfigurationError::ElevationOutOfRange { .. }
        ))
    ));
    assert!(at(30_000.0).is_ok());
    assert!(at(30_000.001).is_err());
}

#[test]
fn ambient_must_be_exactly_one_input() {
    let z = Some(Length::new::<foot>(1000.0));
    let p = Some(Pressure::new::<psi>(14.0));

    assert_eq!(
        Ambient::from_options(z, p),
        Err(ConfigurationError::ConflictingAmbient)
    );
    assert_eq!(
        Ambient::from_options(None, None),
        Err(ConfigurationError::MissingAmbient)
    );

    let ambient = Ambient::from_options(None, p).unwrap();
    let psy = Psychrometrics::new(ambient).unwrap();
    assert_eq!(psy.elevation(), None);
}

#[test]
fn saturation_branches_meet_at_freezing() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;
    let t = fahrenheit(32.0);
    let ice = psy.saturation_pressure_over_ice(t)?.get::<psi>();
    let water = psy.saturation_pressure_over_water(t)?.get::<psi>();
    assert_relative_eq!(ice, water, max_relative = 1e-3);
    Ok(())
}

#[test]
fn state_properties_stay_physical() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(2000.0))?;

    for t in (35..=110).step_by(15).map(f64::from) {
        let t = fahrenheit(t);
        let mut last_w = None;
        for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let w = psy.humidity_ratio(t, rh(fraction))?;
            if let Some(last) = last_w {
                assert!(w > last);
            }
            last_w = Some(w);

            let mu = psy.degree_of_saturation(t, rh(fraction))?.get::<percent>();
            assert!((0.0..=100.0 + 1e-9).contains(&mu));

            let v = in_cubic_feet_per_pound(psy.specific_volume(t, rh(fraction))?);
            assert!(v > 0.0);
            let rho = psy.density(t, rh(fraction))?.get::<pound_per_cubic_foot>();
            assert_relative_eq!(rho * v, 1.0, epsilon = 1e-12);
        }
    }
    Ok(())
}

#[test]
fn dew_point_round_trip() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;

    for t in [40.0, 60.0, 80.0, 100.0] {
        let t = fahrenheit(t);
        for fraction in [0.2, 0.5, 0.8] {
            let t_dp = psy.dew_point(t, rh(fraction))?;
            assert!(t_dp < t);
            let back = psy.relative_humidity(t, t_dp)?;
            assert_relative_eq!(back.fraction(), fraction, epsilon = 5e-3);
        }
    }

    assert!(matches!(
        psy.dew_point(fahrenheit(70.0), RelativeHumidity::DRY),
        Err(PsychroError::Domain(DomainError::ZeroHumidity))
    ));
    Ok(())
}

#[test]
fn below_absolute_zero_is_a_domain_error() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;
    let frigid = fahrenheit(-500.0);
    let below_zero = |result: Result<_, PsychroError>| {
        matches!(
            result,
            Err(PsychroError::Domain(DomainError::BelowAbsoluteZero { .. }))
        )
    };

    assert!(below_zero(psy.humidity_ratio(frigid, rh(0.5)).map(|_| ())));
    assert!(below_zero(psy.dew_point(frigid, rh(0.5)).map(|_| ())));
    assert!(below_zero(psy.wet_bulb_regression(frigid, rh(0.5)).map(|_| ())));
    assert!(below_zero(psy.wet_bulb_iterative(frigid, rh(0.5)).map(|_| ())));
    assert!(below_zero(
        psy.relative_humidity(frigid, fahrenheit(-600.0)).map(|_| ())
    ));
    Ok(())
}

#[test]
fn dew_point_descriptor_drives_queries() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;
    let t = fahrenheit(80.0);
    let t_dp = fahrenheit(60.0);

    let by_dew_point = psy.enthalpy(t, Humidity::DewPoint(t_dp))?;
    let rh = psy.relative_humidity(t, t_dp)?;
    let by_rh = psy.enthalpy(t, rh)?;
    assert_eq!(by_dew_point, by_rh);
    Ok(())
}

#[test]
fn observer_traces_and_stops_the_solver() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;
    let t = fahrenheit(90.0);

    let mut trace = Vec::new();
    let solution = psy.wet_bulb_iterative_with(
        t,
        rh(0.3),
        &wet_bulb::Config::default(),
        |event: &Event| {
            trace.push(event.residual);
            (event.iter == 5).then_some(Action::StopEarly)
        },
    )?;

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 5);
    assert_eq!(trace.len(), 5);
    assert_eq!(trace.last().copied(), Some(solution.residual));
    Ok(())
}

#[test]
fn bounded_iteration_reports_non_convergence() -> Result<(), PsychroError> {
    let psy = Psychrometrics::at_elevation(Length::new::<foot>(0.0))?;
    let config = wet_bulb::Config {
        max_iters: 3,
        ..wet_bulb::Config::default()
    };

    let result = psy.wet_bulb_iterative_with(fahrenheit(95.0), rh(0.1), &config, ());
    match result {
        Err(PsychroError::Convergence {
            iters,
            wet_bulb_f,
            residual,
        }) => {
            assert_eq!(iters, 3);
            assert!(wet_bulb_f < 95.0);
            assert!(residual.abs() > config.humidity_ratio_tol);
        }
        other => panic!("expected a convergence error, got {other:?}"),
    }
    Ok(())
}

use pricer_lib::{price_european_rounded, OptionType, PricingError, PricingScenario};

/// A complete scenario file parses into validated pricing inputs.
#[test]
fn test_scenario_parses_and_prices() {
    let raw = r#"
        option_type = "call"
        underlying_price = 30.0
        strike_price = 40.0
        years_to_exp = 0.6575342465753424   # 240/365
        r = 0.01
        sigma = 0.30
        round_to = 2
    "#;

    let scenario = PricingScenario::from_toml_str(raw).expect("scenario should parse");
    assert_eq!(scenario.round_to, Some(2));

    let inputs = scenario.to_inputs().expect("scenario should validate");
    assert_eq!(inputs.option_type, OptionType::Call);
    assert_eq!(inputs.strike_price, 40.0);

    let price = price_european_rounded(&inputs, 2).expect("pricing failed");
    assert!(
        (price - 0.51).abs() < 1e-9,
        "scenario should price to 0.51, got {}",
        price
    );
}

/// Omitted rate falls back to the library default; omitted round_to stays
/// unset.
#[test]
fn test_scenario_defaults() {
    let raw = r#"
        option_type = "put"
        underlying_price = 100.0
        strike_price = 100.0
        years_to_exp = 1.0
        sigma = 0.20
    "#;

    let scenario = PricingScenario::from_toml_str(raw).expect("scenario should parse");
    assert_eq!(scenario.r, 0.02, "omitted rate should default to 2%");
    assert_eq!(scenario.round_to, None);
    assert!(scenario.to_inputs().is_ok());
}

/// A typo in the option type is a validation error at conversion time, not
/// a serde failure and not a silent fall-through.
#[test]
fn test_scenario_rejects_unknown_option_type() {
    let raw = r#"
        option_type = "strangle"
        underlying_price = 100.0
        strike_price = 100.0
        years_to_exp = 1.0
        sigma = 0.20
    "#;

    let scenario = PricingScenario::from_toml_str(raw).expect("scenario should parse");
    let err = scenario
        .to_inputs()
        .expect_err("unknown option type should not validate");
    assert!(
        matches!(err, PricingError::UnknownOptionType(ref s) if s == "strangle"),
        "expected UnknownOptionType, got {:?}",
        err
    );
}

/// Domain violations in the file surface before any pricing happens.
#[test]
fn test_scenario_rejects_invalid_values() {
    let raw = r#"
        option_type = "call"
        underlying_price = 100.0
        strike_price = 100.0
        years_to_exp = 1.0
        sigma = 0.0
    "#;

    let scenario = PricingScenario::from_toml_str(raw).expect("scenario should parse");
    let err = scenario
        .to_inputs()
        .expect_err("zero sigma should not validate");
    assert!(
        matches!(err, PricingError::InvalidInput { field: "sigma", .. }),
        "expected InvalidInput on sigma, got {:?}",
        err
    );
}

/// Malformed TOML and missing files report readable diagnostics.
#[test]
fn test_scenario_load_failures() {
    assert!(PricingScenario::from_toml_str("option_type = ").is_err());
    assert!(PricingScenario::from_toml_path("tests/data/does_not_exist.toml").is_err());
}

/// The built-in demo scenario reproduces the worked example.
#[test]
fn test_demo_scenario() {
    let scenario = PricingScenario::demo();
    let inputs = scenario.to_inputs().expect("demo scenario should validate");

    let decimals = scenario.round_to.expect("demo scenario rounds to cents");
    let price = price_european_rounded(&inputs, decimals).expect("pricing failed");
    assert!(
        (price - 0.51).abs() < 1e-9,
        "demo scenario should price to 0.51, got {}",
        price
    );
}

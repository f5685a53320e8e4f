use fantasy_map_navigator::shared::{
    km_to_miles, to_fixed, to_real_distance, travel_days, travel_time, KILOMETER_TO_MILES,
    SCALE_FACTOR,
};
use fantasy_map_navigator::{NavigatorOptions, Pace, TravelEstimate};

#[test]
fn test_to_fixed_matches_decimal_expansion() {
    assert_eq!(to_fixed(0.15, 1), "0.1");
    assert_eq!(to_fixed(0.25, 1), "0.3");
    assert_eq!(to_fixed(0.35, 1), "0.3");
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(-0.25, 1), "-0.3");
    assert_eq!(to_fixed(7.0, 1), "7.0");
}

#[test]
fn test_travel_time_examples() {
    assert_eq!(travel_time(3.1, 4.0), "0h 47 min");
    assert_eq!(travel_time(3.1, 3.0), "1h 2 min");
    assert_eq!(travel_time(3.1, 2.0), "1h 33 min");
    assert_eq!(travel_time(8.999, 1.0), "8h 60 min");
    assert_eq!(travel_time(0.0, 4.0), "0h 0 min");
}

#[test]
fn test_travel_days_examples() {
    assert_eq!(travel_days(32.0, 4.0), "1 day");
    assert_eq!(travel_days(16.0, 4.0), "0.5 days");
    assert_eq!(travel_days(0.0, 4.0), "0.0 days");
    assert_eq!(travel_days(64.0, 2.0), "4.0 days");
}

#[test]
fn test_default_scale_conversions() {
    let km = to_real_distance(10.0, SCALE_FACTOR);
    assert_eq!(to_fixed(km, 1), "44.2");
    assert_eq!(to_fixed(km_to_miles(km, KILOMETER_TO_MILES), 1), "27.5");
}

#[test]
fn test_estimate_with_default_options() {
    let options = NavigatorOptions::default();
    let estimate = TravelEstimate::from_map_distance(10.0, &options);

    assert_eq!(estimate.km, "44.2");
    assert_eq!(estimate.miles, "27.5");
    let fast = estimate.pace(Pace::Fast).expect("Fast erwartet");
    assert_eq!(fast.time, "6h 53 min");
    assert_eq!(fast.days, "0.9 days");
    let slow = estimate.pace(Pace::Slow).expect("Slow erwartet");
    assert_eq!(slow.time, "13h 45 min");
    assert_eq!(slow.days, "1.7 days");
}

#[test]
fn test_zero_distance_estimate() {
    let estimate = TravelEstimate::from_map_distance(0.0, &NavigatorOptions::default());

    assert_eq!(estimate.km, "0.0");
    assert_eq!(estimate.miles, "0.0");
    assert!(estimate
        .time_lines()
        .iter()
        .all(|line| line.ends_with("0h 0 min")));
}

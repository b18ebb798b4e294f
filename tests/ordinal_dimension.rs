use aksel_dimension::{Axis, Dimension, OrdinalDimension, OrdinalScale, TickSize};

const EPS: f64 = 1e-9;

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn positions(dimension: &OrdinalDimension, values: &[String]) -> Vec<f64> {
    values
        .iter()
        .map(|v| dimension.map(v).expect("category in domain"))
        .collect()
}

#[test]
fn test_positions_strictly_monotonic_and_interior() {
    for count in 1..=12 {
        let domain: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();

        for (min, max) in [(0.0, 100.0), (-50.0, 50.0), (640.0, 0.0), (3.0, 4.5)] {
            let dimension = OrdinalDimension::new()
                .with_domain(domain.clone())
                .with_range(min, max);
            let mapped = positions(&dimension, &domain);
            let (lo, hi) = dimension.scale().extent();

            for p in &mapped {
                assert!(*p > lo && *p < hi, "{p} not inside ({lo}, {hi})");
            }
            for pair in mapped.windows(2) {
                if min < max {
                    assert!(pair[1] > pair[0], "not increasing: {pair:?}");
                } else {
                    assert!(pair[1] < pair[0], "not decreasing: {pair:?}");
                }
            }
        }
    }
}

#[test]
fn test_low_mid_high_evenly_spaced() {
    let domain = labels(&["low", "mid", "high"]);
    let dimension = OrdinalDimension::new()
        .with_domain(domain.clone())
        .with_range(0.0, 100.0);
    let p = positions(&dimension, &domain);

    assert!(p[0] < p[1] && p[1] < p[2]);

    let gap = p[1] - p[0];
    assert!((p[2] - p[1] - gap).abs() < EPS);

    // Outer gaps match each other and hold half a step each
    let leading = p[0] - 0.0;
    let trailing = 100.0 - p[2];
    assert!((leading - trailing).abs() < EPS);
    assert!((leading - gap / 2.0).abs() < EPS);
    assert!((dimension.scale().step() - gap).abs() < EPS);
}

#[test]
fn test_map_is_stable_until_reconfigured() {
    let domain = labels(&["a", "b", "c"]);
    let mut dimension = OrdinalDimension::new()
        .with_domain(domain.clone())
        .with_range(0.0, 300.0);

    let first = positions(&dimension, &domain);
    let mut axis = TickSize::default();
    dimension.format(&mut axis, 42.0);
    for _ in 0..5 {
        assert_eq!(positions(&dimension, &domain), first);
    }

    dimension.set_range(0.0, 600.0);
    assert_ne!(positions(&dimension, &domain), first);
}

#[test]
fn test_set_range_leaves_no_residue() {
    let domain = labels(&["x", "y", "z", "w"]);

    let mut reconfigured = OrdinalDimension::new().with_domain(domain.clone());
    reconfigured.set_range(-1e6, 17.0);
    reconfigured.set_range(10.0, 90.0);

    let fresh = OrdinalDimension::new()
        .with_domain(domain.clone())
        .with_range(10.0, 90.0);

    assert_eq!(positions(&reconfigured, &domain), positions(&fresh, &domain));
    assert_eq!(reconfigured.range(), (10.0, 90.0));
}

#[test]
fn test_set_domain_after_range_recomputes() {
    let mut dimension = OrdinalDimension::<String, f64>::new().with_range(0.0, 100.0);
    assert_eq!(dimension.position("unknown"), Some(50.0));

    dimension.set_domain(labels(&["a", "b"]));
    assert_eq!(dimension.position("unknown"), None);
    assert_eq!(dimension.position("a"), Some(25.0));
    assert_eq!(dimension.position("b"), Some(75.0));
}

#[test]
fn test_domain_order_decides_positions() {
    let dimension = OrdinalDimension::<String, f64>::new()
        .with_domain(labels(&["high", "low"]))
        .with_range(0.0, 100.0);

    assert_eq!(dimension.position("high"), Some(25.0));
    assert_eq!(dimension.position("low"), Some(75.0));
}

#[test]
fn test_duplicate_labels_collapse() {
    let dimension = OrdinalDimension::<String, f64>::new()
        .with_domain(labels(&["a", "b", "a"]))
        .with_range(0.0, 100.0);

    assert_eq!(dimension.domain().len(), 2);
    assert_eq!(dimension.position("a"), Some(25.0));
    assert_eq!(dimension.position("b"), Some(75.0));
}

#[test]
fn test_empty_domain_maps_nothing() {
    let dimension = OrdinalDimension::<String, f64>::new()
        .with_domain(Vec::new())
        .with_range(0.0, 100.0);

    assert!(dimension.scale().positions().is_empty());
    assert_eq!(dimension.position("unknown"), None);
    assert!(dimension.scale().ticks().is_empty());
}

#[test]
fn test_format_chains_and_configures_axis() {
    struct Recorder(Vec<(f64, f64)>);

    impl Axis<f64> for Recorder {
        fn set_tick_size(&mut self, inner: f64, outer: f64) {
            self.0.push((inner, outer));
        }
    }

    let mut dimension = OrdinalDimension::<String, f64>::new();
    let mut recorder = Recorder(Vec::new());

    let chained = dimension
        .format(&mut recorder, 480.0)
        .is_ordinal();

    assert!(chained);
    assert_eq!(recorder.0, vec![(-480.0, -480.0)]);
}

#[test]
fn test_ticks_for_each_category() {
    let dimension = OrdinalDimension::<String, f64>::new()
        .with_domain(labels(&["a", "b", "c"]))
        .with_range(0.0, 90.0);

    let ticks = dimension.scale().ticks();
    let placed: Vec<(String, f64)> = ticks
        .into_iter()
        .map(|tick| {
            let position = dimension.scale().map(&tick.value);
            (tick.value, position)
        })
        .collect();

    assert_eq!(
        placed,
        vec![
            ("a".to_string(), 15.0),
            ("b".to_string(), 45.0),
            ("c".to_string(), 75.0),
        ]
    );
}

#[test]
fn test_hit_testing_against_ordinal_axis() {
    let dimension = OrdinalDimension::<String, f64>::new()
        .with_domain(labels(&["a", "b", "c"]))
        .with_range(0.0, 90.0);

    assert_eq!(dimension.scale().nearest(20.0).map(String::as_str), Some("a"));
    assert_eq!(dimension.scale().nearest(50.0).map(String::as_str), Some("b"));
    assert_eq!(dimension.scale().nearest(1e9).map(String::as_str), Some("c"));
}

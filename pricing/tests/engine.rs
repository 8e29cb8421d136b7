use pricing::{classify, estimate, Engine, Query, FEATURES};

#[test]
fn repeated_builds_are_bit_identical() {
    let a = Engine::build().unwrap();
    let b = Engine::build().unwrap();

    assert_eq!(a.model().intercept(), b.model().intercept());
    assert_eq!(a.model().coefficients(), b.model().coefficients());
    assert_eq!(a.data().prices(), b.data().prices());
}

#[test]
fn shared_engine_is_memoized() {
    let a = Engine::shared().unwrap();
    let b = Engine::shared().unwrap();

    assert!(std::ptr::eq(a, b));
}

#[test]
fn fitted_coefficients_have_the_generating_signs() {
    let engine = Engine::build().unwrap();
    let coefs = engine.model().coefficients();

    assert_eq!(coefs.len(), FEATURES.len());
    assert!(coefs[0] > 0.0, "area should add to the price");
    assert!(coefs[1] > 0.0, "bedrooms should add to the price");
    assert!(coefs[2] < 0.0, "distance should subtract from the price");
}

#[test]
fn end_to_end_scenario_is_reproducible() {
    let query = Query::new(100.0, 2, 5.0, 300_000.0).unwrap();

    let first = {
        let engine = Engine::build().unwrap();
        estimate(engine.model(), &query)
    };
    let second = {
        let engine = Engine::build().unwrap();
        estimate(engine.model(), &query)
    };

    assert_eq!(first.predicted_price, second.predicted_price);
    assert_eq!(first.recommendation, second.recommendation);
    assert_eq!(first.impacts, second.impacts);
}

#[test]
fn prediction_equals_the_explicit_linear_form() {
    let engine = Engine::build().unwrap();
    let model = engine.model();
    let query = Query::new(100.0, 2, 5.0, 300_000.0).unwrap();

    let est = estimate(model, &query);

    let explicit = model.intercept()
        + model.coefficients()[0] * 100.0
        + model.coefficients()[1] * 2.0
        + model.coefficients()[2] * 5.0;

    assert!((est.predicted_price - explicit).abs() < 1e-6);
    assert_eq!(est.recommendation, classify(est.difference));
}

#[test]
fn impact_table_covers_every_feature_in_order() {
    let engine = Engine::build().unwrap();
    let query = Query::new(100.0, 2, 5.0, 300_000.0).unwrap();

    let est = estimate(engine.model(), &query);

    assert_eq!(est.impacts.len(), FEATURES.len());
    for (impact, feature) in est.impacts.iter().zip(FEATURES.iter()) {
        assert_eq!(impact.label, feature.label);
        assert!(impact.text.contains("R$ "));
    }
}

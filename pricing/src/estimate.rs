use crate::currency::format_brl;
use crate::error::{PricingError, Result};
use crate::feature::FEATURES;
use crate::model::LinearModel;
use crate::synth::PRICE_FLOOR;

/// Asking prices within this margin of the fair price count as aligned.
pub const ALIGNED_MARGIN: f64 = 10_000.0;

/// A single property to analyze.
///
/// Construction validates every field against the declared bounds, so a
/// `Query` in hand is always safe to feed to [`estimate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    area: f64,
    bedrooms: u8,
    distance: f64,
    asking_price: f64,
}

impl Query {
    /// Validates the inputs and builds a query.
    ///
    /// # Errors
    /// Returns `PricingError::OutOfRange` naming the offending field.
    pub fn new(area: f64, bedrooms: u8, distance: f64, asking_price: f64) -> Result<Self> {
        let checks = [
            ("area", area, FEATURES[0]),
            ("bedrooms", f64::from(bedrooms), FEATURES[1]),
            ("distance", distance, FEATURES[2]),
        ];

        for (what, got, feature) in checks {
            if got < feature.min || got > feature.max {
                return Err(PricingError::OutOfRange {
                    what,
                    got,
                    min: feature.min,
                    max: feature.max,
                });
            }
        }

        if asking_price < PRICE_FLOOR {
            return Err(PricingError::OutOfRange {
                what: "asking_price",
                got: asking_price,
                min: PRICE_FLOOR,
                max: f64::INFINITY,
            });
        }

        Ok(Self { area, bedrooms, distance, asking_price })
    }

    pub fn asking_price(&self) -> f64 {
        self.asking_price
    }

    /// The query's feature row, in declaration order.
    pub fn features(&self) -> [f64; 3] {
        [self.area, f64::from(self.bedrooms), self.distance]
    }
}

/// Verdict on an asking price relative to the model's fair price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Asking price is more than the margin below fair value.
    Opportunity,
    /// Asking price is more than the margin above fair value.
    Overpriced,
    /// Asking price is within the margin of fair value.
    Aligned,
}

impl Recommendation {
    /// User-facing message. `difference` is `asking − predicted`.
    pub fn message(&self, difference: f64) -> String {
        match self {
            Recommendation::Opportunity => format!(
                "Great Opportunity! The asking price is {} below the estimated fair value. \
                 The model suggests this is a good deal.",
                format_brl(difference.abs()),
            ),
            Recommendation::Overpriced => format!(
                "Elevated Price. The asking price is {} above the estimated fair value. \
                 Caution or strong negotiation is recommended.",
                format_brl(difference),
            ),
            Recommendation::Aligned => String::from(
                "Aligned Price. The asking price is very close to the fair value \
                 estimated by the model.",
            ),
        }
    }
}

/// Classifies `difference = asking − predicted`.
///
/// Both thresholds are strict: a difference of exactly ±[`ALIGNED_MARGIN`]
/// still counts as aligned.
pub fn classify(difference: f64) -> Recommendation {
    if difference < -ALIGNED_MARGIN {
        Recommendation::Opportunity
    } else if difference > ALIGNED_MARGIN {
        Recommendation::Overpriced
    } else {
        Recommendation::Aligned
    }
}

/// Monetary effect of a one-unit increase in one feature, holding the
/// others fixed. This is exactly the feature's coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImpact {
    pub label: &'static str,
    pub text: String,
}

/// Full analysis of one query against a fitted model.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub predicted_price: f64,
    pub difference: f64,
    pub recommendation: Recommendation,
    pub impacts: Vec<FeatureImpact>,
}

/// Runs one query through the model. Pure: no side effects beyond the
/// returned value.
pub fn estimate(model: &LinearModel, query: &Query) -> Estimate {
    let predicted_price = model.predict(&query.features());
    let difference = query.asking_price() - predicted_price;

    let impacts = FEATURES
        .iter()
        .zip(model.coefficients())
        .map(|(feature, &coef)| FeatureImpact {
            label: feature.label,
            text: impact_text(coef),
        })
        .collect();

    Estimate {
        predicted_price,
        difference,
        recommendation: classify(difference),
        impacts,
    }
}

fn impact_text(coefficient: f64) -> String {
    if coefficient > 0.0 {
        format!("Adds {} to the final price", format_brl(coefficient.abs()))
    } else {
        format!("Subtracts {} from the final price", format_brl(coefficient.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify(-10_000.0), Recommendation::Aligned);
        assert_eq!(classify(10_000.0), Recommendation::Aligned);
        assert_eq!(classify(-10_000.01), Recommendation::Opportunity);
        assert_eq!(classify(10_000.01), Recommendation::Overpriced);
        assert_eq!(classify(0.0), Recommendation::Aligned);
    }

    #[test]
    fn query_rejects_each_field_out_of_range() {
        let err = |q: Result<Query>| match q {
            Err(PricingError::OutOfRange { what, .. }) => what,
            other => panic!("expected OutOfRange, got {other:?}"),
        };

        assert_eq!(err(Query::new(49.0, 2, 5.0, 300_000.0)), "area");
        assert_eq!(err(Query::new(301.0, 2, 5.0, 300_000.0)), "area");
        assert_eq!(err(Query::new(100.0, 0, 5.0, 300_000.0)), "bedrooms");
        assert_eq!(err(Query::new(100.0, 6, 5.0, 300_000.0)), "bedrooms");
        assert_eq!(err(Query::new(100.0, 2, 0.5, 300_000.0)), "distance");
        assert_eq!(err(Query::new(100.0, 2, 25.0, 300_000.0)), "distance");
        assert_eq!(err(Query::new(100.0, 2, 5.0, 99_999.0)), "asking_price");
    }

    #[test]
    fn query_accepts_the_declared_bounds() {
        assert!(Query::new(50.0, 1, 1.0, 100_000.0).is_ok());
        assert!(Query::new(300.0, 5, 20.0, 100_000.0).is_ok());
    }

    #[test]
    fn impact_rows_follow_declaration_order() {
        let model = LinearModel::new(0.0, vec![-1_200.0, 40_000.0, -9_000.0]);
        let query = Query::new(100.0, 2, 5.0, 300_000.0).unwrap();

        let est = estimate(&model, &query);
        let labels: Vec<_> = est.impacts.iter().map(|i| i.label).collect();

        assert_eq!(
            labels,
            vec!["Area (sqm)", "Bedrooms", "Distance from Downtown (km)"]
        );
        assert!(est.impacts[0].text.starts_with("Subtracts"));
        assert!(est.impacts[1].text.starts_with("Adds"));
        assert!(est.impacts[2].text.starts_with("Subtracts"));
    }

    #[test]
    fn estimate_matches_the_linear_form() {
        let model = LinearModel::new(10_000.0, vec![1_200.0, 40_000.0, -9_000.0]);
        let query = Query::new(100.0, 2, 5.0, 300_000.0).unwrap();

        let est = estimate(&model, &query);
        let expected = 10_000.0 + 1_200.0 * 100.0 + 40_000.0 * 2.0 - 9_000.0 * 5.0;

        assert!((est.predicted_price - expected).abs() < 1e-6);
        assert!((est.difference - (300_000.0 - expected)).abs() < 1e-6);
        assert_eq!(est.recommendation, classify(est.difference));
    }

    #[test]
    fn messages_embed_the_formatted_difference() {
        let msg = Recommendation::Opportunity.message(-15_000.0);
        assert!(msg.contains("R$ 15.000,00"));

        let msg = Recommendation::Overpriced.message(25_000.5);
        assert!(msg.contains("R$ 25.000,50"));
    }
}

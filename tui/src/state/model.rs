use pricing::{Query, FEATURES, PRICE_FLOOR};

const ASKING_PRICE_STEP: f64 = 5_000.0;
const ASKING_PRICE_DEFAULT: f64 = 300_000.0;

/// The four input controls of the analysis screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Area,
    Bedrooms,
    Distance,
    AskingPrice,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Area,
        Control::Bedrooms,
        Control::Distance,
        Control::AskingPrice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::Area => FEATURES[0].label,
            Control::Bedrooms => FEATURES[1].label,
            Control::Distance => FEATURES[2].label,
            Control::AskingPrice => "Asking Price (BRL)",
        }
    }
}

/// Editable query values, clamped to their declared bounds on every
/// adjustment so an out-of-range value can never reach the estimator.
#[derive(Debug, Clone, Copy)]
pub struct QueryDraft {
    pub area: f64,
    pub bedrooms: u8,
    pub distance: f64,
    pub asking_price: f64,
}

impl QueryDraft {
    pub fn new() -> Self {
        Self {
            area: FEATURES[0].default,
            bedrooms: FEATURES[1].default as u8,
            distance: FEATURES[2].default,
            asking_price: ASKING_PRICE_DEFAULT,
        }
    }

    /// Moves one control by `steps` increments (negative = down),
    /// clamping to the control's bounds.
    pub fn adjust(&mut self, control: Control, steps: i32) {
        let delta = f64::from(steps);
        match control {
            Control::Area => {
                let f = FEATURES[0];
                self.area = (self.area + delta * f.step).clamp(f.min, f.max);
            }
            Control::Bedrooms => {
                let f = FEATURES[1];
                let next = f64::from(self.bedrooms) + delta * f.step;
                self.bedrooms = next.clamp(f.min, f.max) as u8;
            }
            Control::Distance => {
                let f = FEATURES[2];
                self.distance = (self.distance + delta * f.step).clamp(f.min, f.max);
            }
            Control::AskingPrice => {
                self.asking_price = (self.asking_price + delta * ASKING_PRICE_STEP).max(PRICE_FLOOR);
            }
        }
    }

    /// Builds the validated query.
    ///
    /// # Errors
    /// Propagates the boundary validation; unreachable for a draft that
    /// only ever moved through [`adjust`](Self::adjust).
    pub fn to_query(&self) -> pricing::Result<Query> {
        Query::new(self.area, self.bedrooms, self.distance, self.asking_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_form_a_valid_query() {
        assert!(QueryDraft::new().to_query().is_ok());
    }

    #[test]
    fn adjust_clamps_at_the_bounds() {
        let mut draft = QueryDraft::new();

        draft.adjust(Control::Area, 1_000);
        assert_eq!(draft.area, FEATURES[0].max);
        draft.adjust(Control::Area, -10_000);
        assert_eq!(draft.area, FEATURES[0].min);

        draft.adjust(Control::Bedrooms, 100);
        assert_eq!(draft.bedrooms, FEATURES[1].max as u8);
        draft.adjust(Control::Bedrooms, -100);
        assert_eq!(draft.bedrooms, FEATURES[1].min as u8);

        draft.adjust(Control::AskingPrice, -1_000_000);
        assert_eq!(draft.asking_price, PRICE_FLOOR);

        assert!(draft.to_query().is_ok());
    }

    #[test]
    fn distance_moves_in_half_km_steps() {
        let mut draft = QueryDraft::new();
        let before = draft.distance;

        draft.adjust(Control::Distance, 1);
        assert!((draft.distance - before - 0.5).abs() < 1e-9);
    }
}

use crate::domain::model::{PositionWeights, SequencePosition, StarKey};

/// Supplies the per-star response factor and the per-position weight that
/// scale a match's adjusted energy into its weighted score.
pub trait ResponseFactorProvider: Send + Sync {
    fn response_factor(&self, star: StarKey) -> f64;

    fn position_weight(&self, position: SequencePosition) -> f64 {
        PositionWeights::default().weight(position)
    }
}

/// Every star weighs `1.0`; positions use the default weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralFactors;

impl ResponseFactorProvider for NeutralFactors {
    fn response_factor(&self, _star: StarKey) -> f64 {
        1.0
    }
}

impl<T: ResponseFactorProvider + ?Sized> ResponseFactorProvider for &T {
    fn response_factor(&self, star: StarKey) -> f64 {
        (**self).response_factor(star)
    }

    fn position_weight(&self, position: SequencePosition) -> f64 {
        (**self).position_weight(position)
    }
}

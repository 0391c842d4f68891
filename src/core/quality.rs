use crate::domain::model::{BalanceLabel, EnergyProfile, Segmentation};
use crate::domain::report::{CodeCategory, CodeHit, DigitWarning};

const BASE: i64 = 50;

/// Overall 0..=100 rating of a number.
pub fn quality_score(
    energy: &EnergyProfile,
    segmentation: &Segmentation,
    codes: &[CodeHit],
    warnings: &[DigitWarning],
) -> u8 {
    let mut score = BASE + energy.net_energy * 5;

    score += match energy.balance_label {
        BalanceLabel::YangDominant => 20,
        BalanceLabel::YinDominant => -20,
        BalanceLabel::Balanced => 0,
    };

    let good_codes = codes
        .iter()
        .filter(|c| matches!(c.category, CodeCategory::Wealth | CodeCategory::Career))
        .count() as i64;
    score += good_codes * 5;
    score -= warnings.len() as i64 * 8;

    score += segmentation.total_fives() as i64 * 3;
    score -= segmentation.total_zeros() as i64 * 2;

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segmenter::segment;

    fn profile(net: i64, label: BalanceLabel) -> EnergyProfile {
        EnergyProfile {
            net_energy: net,
            balance_label: label,
            ..EnergyProfile::default()
        }
    }

    #[test]
    fn test_neutral_number_scores_base() {
        assert_eq!(quality_score(&profile(0, BalanceLabel::Balanced), &segment("1234"), &[], &[]), 50);
    }

    #[test]
    fn test_zeros_and_fives_adjust() {
        // +3 for the five, -4 for two zeros
        assert_eq!(quality_score(&profile(0, BalanceLabel::Balanced), &segment("10052"), &[], &[]), 49);
    }

    #[test]
    fn test_clamped_to_range() {
        assert_eq!(quality_score(&profile(40, BalanceLabel::YangDominant), &segment("14"), &[], &[]), 100);
        assert_eq!(quality_score(&profile(-40, BalanceLabel::YinDominant), &segment("17"), &[], &[]), 0);
    }

    #[test]
    fn test_dominance_bonus() {
        assert_eq!(quality_score(&profile(2, BalanceLabel::YangDominant), &segment("14"), &[], &[]), 80);
        assert_eq!(quality_score(&profile(-2, BalanceLabel::YinDominant), &segment("17"), &[], &[]), 20);
    }
}

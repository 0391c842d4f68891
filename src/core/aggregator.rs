use crate::domain::model::{BalanceLabel, EnergyProfile, Polarity, ResponseLevel, StarMatch};

/// Strongest table weight a single match can carry.
const MAX_PAIR_ENERGY: f64 = 4.0;

/// Summarises a match sequence. The balance label is decided on counts,
/// not energies; the response level on position-weighted energy. An empty
/// sequence yields the neutral default profile.
pub fn aggregate(matches: &[StarMatch]) -> EnergyProfile {
    if matches.is_empty() {
        return EnergyProfile::default();
    }

    let mut profile = EnergyProfile::default();
    for m in matches {
        profile.total_energy += m.adjusted_energy;
        let positional = f64::from(m.adjusted_energy) * m.position_weight;
        match m.polarity {
            Polarity::Auspicious => {
                profile.auspicious_count += 1;
                profile.auspicious_energy += m.adjusted_energy;
                profile.weighted_net_energy += positional;
            }
            Polarity::Inauspicious => {
                profile.inauspicious_count += 1;
                profile.inauspicious_energy += m.adjusted_energy;
                profile.weighted_net_energy -= positional;
            }
            Polarity::Mixed => profile.mixed_count += 1,
            Polarity::Unresolved => profile.unresolved_count += 1,
        }
    }

    profile.net_energy =
        i64::from(profile.auspicious_energy) - i64::from(profile.inauspicious_energy);
    profile.balance_label = balance(profile.auspicious_count, profile.inauspicious_count);
    let ratio = profile.weighted_net_energy.abs() / (matches.len() as f64 * MAX_PAIR_ENERGY);
    profile.response_level = ResponseLevel::from_ratio(ratio);

    tracing::debug!(
        total = profile.total_energy,
        net = profile.net_energy,
        balance = ?profile.balance_label,
        response = ?profile.response_level,
        "aggregated energy"
    );
    profile
}

fn balance(auspicious: usize, inauspicious: usize) -> BalanceLabel {
    if auspicious.abs_diff(inauspicious) < 2 {
        BalanceLabel::Balanced
    } else if auspicious > inauspicious {
        BalanceLabel::YangDominant
    } else {
        BalanceLabel::YinDominant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::StarMapper;
    use crate::domain::model::{SegmentGroup, SequencePosition, StarKey};
    use crate::domain::ports::{NeutralFactors, ResponseFactorProvider};
    use crate::tables::star_table;

    fn matches(pairs: &[&str]) -> Vec<StarMatch> {
        let groups: Vec<SegmentGroup> = pairs
            .iter()
            .map(|p| SegmentGroup::new(0, p, false))
            .collect();
        StarMapper::new(star_table(), &NeutralFactors).map_groups(&groups)
    }

    #[test]
    fn test_empty_is_neutral() {
        let profile = aggregate(&[]);
        assert_eq!(profile, EnergyProfile::default());
        assert_eq!(profile.balance_label, BalanceLabel::Balanced);
        assert_eq!(profile.auspicious_count + profile.inauspicious_count, 0);
    }

    #[test]
    fn test_yang_dominant() {
        // Sinh Khí 4, Thiên Y 4, Diên Niên 4
        let profile = aggregate(&matches(&["14", "13", "19"]));
        assert_eq!(profile.total_energy, 12);
        assert_eq!(profile.auspicious_count, 3);
        assert_eq!(profile.net_energy, 12);
        assert_eq!(profile.balance_label, BalanceLabel::YangDominant);
        assert_eq!(profile.weighted_net_energy, 12.0);
        assert_eq!(profile.response_level, ResponseLevel::VeryHigh);
    }

    struct DoubledEnd;

    impl ResponseFactorProvider for DoubledEnd {
        fn response_factor(&self, _star: StarKey) -> f64 {
            1.0
        }

        fn position_weight(&self, position: SequencePosition) -> f64 {
            if position == SequencePosition::End {
                2.0
            } else {
                1.0
            }
        }
    }

    #[test]
    fn test_closing_matches_weigh_more() {
        // Phục Vị x6 then Tuyệt Mệnh 12 (weight 4) in the end slot
        let groups: Vec<SegmentGroup> = ["11", "11", "11", "11", "11", "11", "12"]
            .iter()
            .map(|p| SegmentGroup::new(0, p, false))
            .collect();
        let matches = StarMapper::new(star_table(), &DoubledEnd).map_groups(&groups);
        let profile = aggregate(&matches);

        assert_eq!(profile.net_energy, -4);
        assert_eq!(profile.weighted_net_energy, -8.0);
        // 8 / (7 * 4)
        assert_eq!(profile.response_level, ResponseLevel::Low);
    }

    #[test]
    fn test_balanced_within_one() {
        // Sinh Khí, Họa Hại, Phục Vị
        let profile = aggregate(&matches(&["14", "17", "11"]));
        assert_eq!(profile.mixed_count, 1);
        assert_eq!(profile.balance_label, BalanceLabel::Balanced);
        assert_eq!(profile.net_energy, 0);
    }

    #[test]
    fn test_yin_dominant_and_unresolved() {
        let profile = aggregate(&matches(&["17", "16", "105"]));
        assert_eq!(profile.inauspicious_count, 2);
        assert_eq!(profile.unresolved_count, 1);
        assert_eq!(profile.total_energy, 9);
        assert_eq!(profile.balance_label, BalanceLabel::YinDominant);
    }
}

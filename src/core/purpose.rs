use crate::domain::model::{Purpose, StarKey, StarMatch};
use crate::domain::report::{PurposeCompatibility, PurposeReport};
use crate::utils::error::Result;

/// Stars that help or hurt a given use of the number.
#[derive(Debug)]
pub struct PurposeProfile {
    pub purpose: Purpose,
    pub favorable: &'static [StarKey],
    pub unfavorable: &'static [StarKey],
}

static PROFILES: [PurposeProfile; 5] = [
    PurposeProfile {
        purpose: Purpose::Business,
        favorable: &[StarKey::DienNien, StarKey::SinhKhi],
        unfavorable: &[StarKey::HoaHai],
    },
    PurposeProfile {
        purpose: Purpose::Personal,
        favorable: &[StarKey::SinhKhi, StarKey::ThienY],
        unfavorable: &[StarKey::HoaHai, StarKey::TuyetMenh],
    },
    PurposeProfile {
        purpose: Purpose::Wealth,
        favorable: &[StarKey::ThienY, StarKey::SinhKhi],
        unfavorable: &[StarKey::TuyetMenh],
    },
    PurposeProfile {
        purpose: Purpose::Relationship,
        favorable: &[StarKey::ThienY],
        unfavorable: &[StarKey::NguQuy, StarKey::LucSat],
    },
    PurposeProfile {
        purpose: Purpose::Career,
        favorable: &[StarKey::DienNien, StarKey::ThienY],
        unfavorable: &[StarKey::PhucVi, StarKey::NguQuy],
    },
];

pub fn profile(purpose: Purpose) -> &'static PurposeProfile {
    // PROFILES follows Purpose::ALL
    &PROFILES[purpose as usize]
}

/// Scores the sequence for one purpose on a 1..=10 scale.
pub fn score(purpose: Purpose, matches: &[StarMatch]) -> PurposeCompatibility {
    let profile = profile(purpose);
    let count = |set: &[StarKey]| {
        matches
            .iter()
            .filter(|m| m.star.map_or(false, |s| set.contains(&s)))
            .count()
    };
    let favorable_hits = count(profile.favorable);
    let unfavorable_hits = count(profile.unfavorable);
    let (strengths, weaknesses) = reasons(profile, matches);

    let score = raw_score(favorable_hits, unfavorable_hits, matches.len());
    let (rating, rating_label) = rating(score);

    PurposeCompatibility {
        purpose,
        score,
        rating,
        rating_label,
        favorable_hits,
        unfavorable_hits,
        strengths,
        weaknesses,
        advice: advice(rating, purpose),
    }
}

/// Names each star that counted for or against the purpose, with the
/// digits it was read from.
fn reasons(profile: &PurposeProfile, matches: &[StarMatch]) -> (Vec<String>, Vec<String>) {
    let name = profile.purpose.display_name();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for m in matches {
        let (Some(star), Some(star_name)) = (m.star, m.star_name) else {
            continue;
        };
        if profile.favorable.contains(&star) {
            strengths.push(format!("Có sao {} ({}) hỗ trợ cho {}", star_name, m.group.digits, name));
        }
        if profile.unfavorable.contains(&star) {
            weaknesses.push(format!("Có sao {} ({}) không tốt cho {}", star_name, m.group.digits, name));
        }
    }
    (strengths, weaknesses)
}

/// Like [`score`], for a purpose given by key.
pub fn score_key(key: &str, matches: &[StarMatch]) -> Result<PurposeCompatibility> {
    let purpose: Purpose = key.parse()?;
    Ok(score(purpose, matches))
}

/// Scores all purposes and recommends the best. Ties go to the purpose
/// listed first in [`Purpose::ALL`].
pub fn best_of_all(matches: &[StarMatch]) -> PurposeReport {
    let candidates: Vec<PurposeCompatibility> =
        Purpose::ALL.iter().map(|p| score(*p, matches)).collect();

    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.score > best.score {
            best = candidate;
        }
    }
    let recommendation = best.clone();

    tracing::debug!(
        purpose = %recommendation.purpose,
        score = recommendation.score,
        "best purpose selected"
    );
    PurposeReport::BestOfAll {
        recommendation,
        candidates,
    }
}

fn raw_score(favorable: usize, unfavorable: usize, len: usize) -> u8 {
    if len == 0 {
        return 5;
    }
    let balance = favorable as f64 * 2.0 - unfavorable as f64 * 1.5;
    let value = (5.0 + balance / len as f64 * 5.0).round();
    value.clamp(1.0, 10.0) as u8
}

fn rating(score: u8) -> (u8, &'static str) {
    match score {
        9..=10 => (5, "Rất Tốt"),
        7..=8 => (4, "Tốt"),
        5..=6 => (3, "Trung Bình"),
        3..=4 => (2, "Thấp"),
        _ => (1, "Kém"),
    }
}

fn advice(rating: u8, purpose: Purpose) -> String {
    let name = purpose.display_name();
    match rating {
        5 => format!("Số này rất hợp cho {}: sao cát trợ lực mạnh, nên giữ và dùng lâu dài.", name),
        4 => format!("Số này hợp cho {}, năng lượng tích cực chiếm ưu thế.", name),
        3 => format!("Số này ở mức trung bình cho {}, cát hung đan xen, cần kết hợp nỗ lực bản thân.", name),
        2 => format!("Số này ít hợp cho {}, nên cân nhắc trước khi dùng lâu dài.", name),
        _ => format!("Số này không hợp cho {}, nên cân nhắc chọn số khác.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::StarMapper;
    use crate::domain::model::SegmentGroup;
    use crate::domain::ports::NeutralFactors;
    use crate::tables::star_table;
    use crate::utils::error::EngineError;

    fn matches(pairs: &[&str]) -> Vec<StarMatch> {
        let groups: Vec<SegmentGroup> = pairs
            .iter()
            .map(|p| SegmentGroup::new(0, p, false))
            .collect();
        StarMapper::new(star_table(), &NeutralFactors).map_groups(&groups)
    }

    #[test]
    fn test_profiles_follow_purpose_order() {
        for purpose in Purpose::ALL {
            assert_eq!(profile(purpose).purpose, purpose);
        }
    }

    #[test]
    fn test_business_three_favorable_of_five() {
        // Diên Niên, Sinh Khí, Diên Niên, Phục Vị, Thiên Y
        let result = score(Purpose::Business, &matches(&["19", "14", "78", "11", "13"]));
        assert_eq!(result.favorable_hits, 3);
        assert_eq!(result.unfavorable_hits, 0);
        assert!(result.score > 5);
        assert_eq!(result.score, 10);
        assert_eq!(result.rating, 5);
        assert!(result.advice.contains("kinh doanh"));
        assert_eq!(result.strengths.len(), 3);
        assert!(result.strengths[0].starts_with("Có sao Diên Niên (19)"));
        assert!(result.weaknesses.is_empty());
    }

    #[test]
    fn test_score_is_clamped_low() {
        let result = score(Purpose::Relationship, &matches(&["18", "16", "81"]));
        assert_eq!(result.unfavorable_hits, 3);
        assert_eq!(result.score, 1);
        assert_eq!(result.rating_label, "Kém");
        assert_eq!(result.weaknesses.len(), 3);
        assert!(result.strengths.is_empty());
    }

    #[test]
    fn test_empty_sequence_scores_five() {
        let result = score(Purpose::Wealth, &[]);
        assert_eq!(result.score, 5);
        assert_eq!(result.rating, 3);
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            score_key("health", &[]),
            Err(EngineError::UnsupportedPurpose { .. })
        ));
        assert_eq!(score_key("career", &[]).unwrap().purpose, Purpose::Career);
    }

    #[test]
    fn test_best_of_all_tie_goes_to_first() {
        match best_of_all(&[]) {
            PurposeReport::BestOfAll {
                recommendation,
                candidates,
            } => {
                assert_eq!(candidates.len(), 5);
                assert_eq!(recommendation.purpose, Purpose::Business);
            }
            other => panic!("unexpected report {:?}", other),
        }
    }

    #[test]
    fn test_best_of_all_picks_highest() {
        // Thiên Y twice caps every purpose except business; personal is
        // the earliest of the capped ones
        let report = best_of_all(&matches(&["13", "31"]));
        assert_eq!(report.primary().purpose, Purpose::Personal);
        assert_eq!(report.primary().score, 10);
    }
}

use crate::core::{
    aggregator, combination, id_card, purpose, quality, root_number, segmenter, special_digits, warnings,
};
use crate::core::mapper::StarMapper;
use crate::core::normalizer::normalize;
use crate::domain::model::{NumberKind, Purpose};
use crate::domain::ports::{NeutralFactors, ResponseFactorProvider};
use crate::domain::report::{AnalysisReport, PurposeReport};
use crate::tables::{star_table, StarTable};
use crate::utils::error::{EngineError, Result};

/// Runs the whole analysis for one number.
///
/// Stateless apart from the shared star table and the response factor
/// provider, so one engine can serve any number of callers.
pub struct AnalysisEngine<F: ResponseFactorProvider = NeutralFactors> {
    table: &'static StarTable,
    factors: F,
}

impl Default for AnalysisEngine<NeutralFactors> {
    fn default() -> Self {
        Self::new(NeutralFactors)
    }
}

impl<F: ResponseFactorProvider> AnalysisEngine<F> {
    pub fn new(factors: F) -> Self {
        Self {
            table: star_table(),
            factors,
        }
    }

    /// Fails with `UnsupportedPurpose` before any work is done when
    /// `purpose` is not a known key; `None` scores every purpose.
    pub fn analyze(&self, raw: &str, kind: NumberKind, purpose: Option<&str>) -> Result<AnalysisReport> {
        let purpose = purpose.map(str::parse::<Purpose>).transpose()?;
        self.analyze_for(raw, kind, purpose)
    }

    /// Like [`analyze`](Self::analyze), but an unknown purpose falls back
    /// to best-of-all scoring instead of failing.
    pub fn analyze_or_fallback(
        &self,
        raw: &str,
        kind: NumberKind,
        purpose: Option<&str>,
    ) -> Result<AnalysisReport> {
        let purpose = match purpose.map(str::parse::<Purpose>).transpose() {
            Ok(p) => p,
            Err(EngineError::UnsupportedPurpose { purpose }) => {
                tracing::warn!(purpose = %purpose, "unsupported purpose, scoring all purposes instead");
                None
            }
            Err(e) => return Err(e),
        };
        self.analyze_for(raw, kind, purpose)
    }

    pub fn analyze_for(&self, raw: &str, kind: NumberKind, purpose: Option<Purpose>) -> Result<AnalysisReport> {
        let normalized = normalize(raw, kind)?;

        let segmentation = segmenter::segment(&normalized);
        let star_matches = StarMapper::new(self.table, &self.factors).map_groups(&segmentation.groups);

        let unresolved = star_matches.iter().filter(|m| !m.is_resolved()).count();
        if unresolved > 0 {
            tracing::warn!(
                normalized = %normalized,
                unresolved,
                "some groups did not resolve to a star"
            );
        }

        let energy = aggregator::aggregate(&star_matches);
        let combinations = combination::adjacent_findings(&star_matches);
        let key_positions = combination::key_positions(&normalized);
        let last_three = combination::last_three(&normalized, self.table);
        let three_digit_codes = combination::code_hits(&normalized);
        let warnings = warnings::digit_warnings(&normalized);
        let special_digits = special_digits::special_digit_effects(&normalized, self.table);

        let purpose_report = match purpose {
            Some(p) => PurposeReport::Requested {
                result: purpose::score(p, &star_matches),
            },
            None => purpose::best_of_all(&star_matches),
        };

        let quality_score =
            quality::quality_score(&energy, &segmentation, &three_digit_codes, &warnings);
        let id_card = match kind {
            NumberKind::NationalId => id_card::decode(&normalized),
            NumberKind::Phone => None,
        };

        tracing::info!(
            kind = kind.key(),
            normalized = %normalized,
            stars = star_matches.len(),
            total_energy = energy.total_energy,
            balance = ?energy.balance_label,
            response = ?energy.response_level,
            quality_score,
            "analysis complete"
        );

        Ok(AnalysisReport {
            kind,
            input: raw.to_string(),
            root_number: root_number::root_number(&normalized),
            normalized,
            table_version: self.table.version,
            segmentation,
            star_matches,
            energy,
            combinations,
            key_positions,
            last_three,
            three_digit_codes,
            warnings,
            special_digits,
            purpose: purpose_report,
            id_card,
            quality_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BalanceLabel, StarKey};

    #[test]
    fn test_full_report_for_phone() {
        let engine = AnalysisEngine::default();
        let report = engine.analyze("0912345678", NumberKind::Phone, None).unwrap();

        assert_eq!(report.normalized, "0912345678");
        assert_eq!(report.segmentation.leading, "0");
        assert_eq!(report.star_matches.len(), report.segmentation.groups.len());
        assert_eq!(report.star_sequence()[0], "DIEN_NIEN");
        assert!(report.last_three.is_some());
        assert!(report.id_card.is_none());
        assert_eq!(report.root_number.unwrap().value, 9);
        // 091 hides Diên Niên behind the 0
        assert_eq!(report.special_digits.zero_effects[0].digits, "091");
        assert_eq!(report.special_digits.zero_effects[0].star, StarKey::DienNien);
        assert!(matches!(report.purpose, PurposeReport::BestOfAll { .. }));
    }

    #[test]
    fn test_requested_purpose() {
        let engine = AnalysisEngine::default();
        let report = engine.analyze("0914131913", NumberKind::Phone, Some("wealth")).unwrap();
        match &report.purpose {
            PurposeReport::Requested { result } => assert_eq!(result.purpose, Purpose::Wealth),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_purpose_fails_or_falls_back() {
        let engine = AnalysisEngine::default();
        assert!(matches!(
            engine.analyze("0912345678", NumberKind::Phone, Some("luck")),
            Err(EngineError::UnsupportedPurpose { .. })
        ));
        let report = engine
            .analyze_or_fallback("0912345678", NumberKind::Phone, Some("luck"))
            .unwrap();
        assert!(matches!(report.purpose, PurposeReport::BestOfAll { .. }));
    }

    #[test]
    fn test_invalid_length_is_reported_even_with_fallback() {
        let engine = AnalysisEngine::default();
        assert!(matches!(
            engine.analyze_or_fallback("123", NumberKind::Phone, None),
            Err(EngineError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_national_id_is_decoded() {
        let engine = AnalysisEngine::default();
        let report = engine.analyze("079 301 012 345", NumberKind::NationalId, None).unwrap();
        assert_eq!(report.id_card.unwrap().birth_year, Some(2001));
    }

    #[test]
    fn test_auspicious_number_is_yang_dominant() {
        // 91 14 41 13 31 19 91 13: all auspicious
        let engine = AnalysisEngine::default();
        let report = engine.analyze("0914131913", NumberKind::Phone, None).unwrap();
        assert!(report
            .star_matches
            .iter()
            .all(|m| matches!(m.star, Some(StarKey::SinhKhi | StarKey::ThienY | StarKey::DienNien))));
        assert_eq!(report.energy.balance_label, BalanceLabel::YangDominant);
    }
}

use crate::domain::model::{
    EnergyProfile, NumberKind, Polarity, Purpose, Segmentation, StarKey, StarMatch,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairWarning {
    pub kind: &'static str,
    pub description: &'static str,
}

/// Two adjacent resolved matches and what their pairing means.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationFinding {
    /// 1-based, e.g. `"2-3"`.
    pub position: String,
    pub first_index: usize,
    pub second_index: usize,
    pub first_star: StarKey,
    pub second_star: StarKey,
    pub key: String,
    /// Empty when the combination table has no entry.
    pub description: &'static str,
    pub is_positive: bool,
    pub is_negative: bool,
    pub total_energy: u32,
    pub is_last_pair: bool,
    pub warning: Option<PairWarning>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPosition {
    pub value: char,
    pub meaning: &'static str,
    pub position: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPositions {
    pub last_digit: Option<KeyPosition>,
    pub third_from_end: Option<KeyPosition>,
    pub fifth_from_end: Option<KeyPosition>,
}

/// A raw two-digit pair looked up without any `0`/`5` handling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReading {
    pub pair: String,
    pub star: Option<StarKey>,
    pub star_name: Option<&'static str>,
    pub polarity: Polarity,
    pub energy: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCombination {
    pub key: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastThreeAnalysis {
    pub digits: String,
    pub first_pair: PairReading,
    pub second_pair: PairReading,
    pub combination_key: Option<String>,
    pub combination_description: Option<&'static str>,
    pub special_combination: Option<SpecialCombination>,
    pub has_special_meaning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeCategory {
    Wealth,
    Career,
    Marriage,
}

/// A three-digit window (or its reverse) that matches a code table entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeHit {
    pub category: CodeCategory,
    pub code: &'static str,
    pub value: String,
    pub position: String,
    pub description: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitWarning {
    pub combination: String,
    pub position: String,
    pub description: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitEffectKind {
    ZeroVariant,
    FiveEnhancement,
}

/// A three-digit window whose `0` or `5` sits between the digits of a star pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitEffect {
    pub position: String,
    pub digits: String,
    pub star: StarKey,
    pub star_name: &'static str,
    pub description: String,
    pub effect: DigitEffectKind,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDigitEffects {
    pub zero_effects: Vec<DigitEffect>,
    pub five_effects: Vec<DigitEffect>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurposeCompatibility {
    pub purpose: Purpose,
    /// 1..=10
    pub score: u8,
    /// 1..=5 stars
    pub rating: u8,
    pub rating_label: &'static str,
    pub favorable_hits: usize,
    pub unfavorable_hits: usize,
    /// One line per favorable star found, in sequence order.
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub advice: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PurposeReport {
    Requested {
        result: PurposeCompatibility,
    },
    #[serde(rename_all = "camelCase")]
    BestOfAll {
        recommendation: PurposeCompatibility,
        candidates: Vec<PurposeCompatibility>,
    },
}

impl PurposeReport {
    /// The requested result, or the recommendation when none was requested.
    pub fn primary(&self) -> &PurposeCompatibility {
        match self {
            PurposeReport::Requested { result } => result,
            PurposeReport::BestOfAll { recommendation, .. } => recommendation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootNumber {
    pub value: u8,
    pub element: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardInfo {
    pub province_code: String,
    pub province: Option<&'static str>,
    pub gender: &'static str,
    /// Leading two digits of the birth year, e.g. `20` for 20xx.
    pub century: Option<u16>,
    pub birth_year: Option<i32>,
    pub serial: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub kind: NumberKind,
    pub input: String,
    pub normalized: String,
    pub table_version: &'static str,
    pub segmentation: Segmentation,
    pub star_matches: Vec<StarMatch>,
    pub energy: EnergyProfile,
    pub combinations: Vec<CombinationFinding>,
    pub key_positions: KeyPositions,
    pub last_three: Option<LastThreeAnalysis>,
    pub three_digit_codes: Vec<CodeHit>,
    pub warnings: Vec<DigitWarning>,
    pub special_digits: SpecialDigitEffects,
    pub purpose: PurposeReport,
    pub root_number: Option<RootNumber>,
    pub id_card: Option<IdCardInfo>,
    /// 0..=100
    pub quality_score: u8,
}

impl AnalysisReport {
    pub fn star_sequence(&self) -> Vec<&'static str> {
        self.star_matches
            .iter()
            .map(|m| m.star.map(StarKey::as_str).unwrap_or("UNRESOLVED"))
            .collect()
    }
}

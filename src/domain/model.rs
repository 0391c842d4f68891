use crate::utils::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the digit string identifies. Decides the accepted lengths and
/// whether a country code may be collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    Phone,
    NationalId,
}

impl NumberKind {
    pub fn key(self) -> &'static str {
        match self {
            NumberKind::Phone => "phone",
            NumberKind::NationalId => "national_id",
        }
    }

    pub fn accepts_length(self, length: usize) -> bool {
        match self {
            NumberKind::Phone => (9..=11).contains(&length),
            NumberKind::NationalId => length == 9 || length == 12,
        }
    }

    pub fn expected_lengths(self) -> &'static str {
        match self {
            NumberKind::Phone => "9-11",
            NumberKind::NationalId => "9 or 12",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Phone => write!(f, "phone number"),
            NumberKind::NationalId => write!(f, "national ID number"),
        }
    }
}

impl FromStr for NumberKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "phone" => Ok(NumberKind::Phone),
            "national_id" | "id" | "cccd" | "cmnd" => Ok(NumberKind::NationalId),
            other => Err(EngineError::InvalidConfigValueError {
                field: "kind".to_string(),
                value: other.to_string(),
                reason: "Valid kinds: phone, national_id".to_string(),
            }),
        }
    }
}

/// Cát / Hung classification. `Unresolved` is only ever carried by a
/// [`StarMatch`] whose group has no star; table entries never use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Auspicious,
    Inauspicious,
    Mixed,
    Unresolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StarKey {
    SinhKhi,
    ThienY,
    DienNien,
    PhucVi,
    HoaHai,
    LucSat,
    NguQuy,
    TuyetMenh,
}

impl StarKey {
    pub const ALL: [StarKey; 8] = [
        StarKey::SinhKhi,
        StarKey::ThienY,
        StarKey::DienNien,
        StarKey::PhucVi,
        StarKey::HoaHai,
        StarKey::LucSat,
        StarKey::NguQuy,
        StarKey::TuyetMenh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StarKey::SinhKhi => "SINH_KHI",
            StarKey::ThienY => "THIEN_Y",
            StarKey::DienNien => "DIEN_NIEN",
            StarKey::PhucVi => "PHUC_VI",
            StarKey::HoaHai => "HOA_HAI",
            StarKey::LucSat => "LUC_SAT",
            StarKey::NguQuy => "NGU_QUY",
            StarKey::TuyetMenh => "TUYET_MENH",
        }
    }
}

impl fmt::Display for StarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StarKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        StarKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| EngineError::InvalidConfigValueError {
                field: "star".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown star. Valid stars: {}",
                    StarKey::ALL.map(StarKey::as_str).join(", ")
                ),
            })
    }
}

/// One of the eight stars of the reference table. Defined once as static
/// data and handed out by reference.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub key: StarKey,
    pub display_name: &'static str,
    pub description: &'static str,
    pub polarity: Polarity,
    /// Canonical two-digit members with their energy weight (1..=4).
    pub member_energies: &'static [(&'static str, u8)],
    /// Reading used when the pair is broken by a `0`.
    pub zero_variant: &'static str,
    pub position: Option<&'static str>,
    pub traits: &'static [&'static str],
}

impl Star {
    pub fn energy_for(&self, pair: &str) -> Option<u8> {
        self.member_energies
            .iter()
            .find(|(member, _)| *member == pair)
            .map(|(_, energy)| *energy)
    }

    pub fn members(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.member_energies.iter().map(|(member, _)| *member)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EnergyLevel {
    pub fn from_energy(energy: u32) -> Self {
        match energy {
            e if e >= 4 => EnergyLevel::VeryHigh,
            3 => EnergyLevel::High,
            2 => EnergyLevel::Medium,
            _ => EnergyLevel::Low,
        }
    }
}

/// Where a match sits in the star sequence. The first three matches open
/// the number, matches from the seventh on close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SequencePosition {
    Start,
    Middle,
    End,
}

impl SequencePosition {
    pub fn of(index: usize) -> Self {
        match index {
            0..=2 => SequencePosition::Start,
            3..=5 => SequencePosition::Middle,
            _ => SequencePosition::End,
        }
    }
}

/// Multipliers applied to a match's energy by [`SequencePosition`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionWeights {
    pub start: f64,
    pub middle: f64,
    pub end: f64,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self {
            start: 1.0,
            middle: 1.2,
            end: 1.5,
        }
    }
}

impl PositionWeights {
    pub fn weight(&self, position: SequencePosition) -> f64 {
        match position {
            SequencePosition::Start => self.start,
            SequencePosition::Middle => self.middle,
            SequencePosition::End => self.end,
        }
    }
}

/// How strongly a number is felt, from the position-weighted net energy
/// relative to the strongest possible sequence of the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ResponseLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.8 {
            ResponseLevel::VeryHigh
        } else if ratio >= 0.6 {
            ResponseLevel::High
        } else if ratio >= 0.4 {
            ResponseLevel::Moderate
        } else if ratio >= 0.2 {
            ResponseLevel::Low
        } else {
            ResponseLevel::VeryLow
        }
    }
}

/// A contiguous run of the normalized number produced by the segmenter.
///
/// Consecutive groups are chained: unless `overlaps_previous` is false, a
/// group's first digit is the previous group's last digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentGroup {
    /// Character offset of the first digit in the normalized number.
    pub start: usize,
    pub digits: String,
    pub zero_count: u32,
    pub five_count: u32,
    pub overlaps_previous: bool,
}

impl SegmentGroup {
    pub fn new(start: usize, digits: &str, overlaps_previous: bool) -> Self {
        Self {
            start,
            digits: digits.to_string(),
            zero_count: digits.chars().filter(|c| *c == '0').count() as u32,
            five_count: digits.chars().filter(|c| *c == '5').count() as u32,
            overlaps_previous,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.digits.chars().count()
    }

    /// The digits with every `0` and `5` removed.
    pub fn clean_key(&self) -> String {
        self.digits.chars().filter(|c| !is_special_digit(*c)).collect()
    }

    /// Digits this group contributes that no earlier group already holds.
    pub fn fresh_digits(&self) -> &str {
        if self.overlaps_previous {
            self.digits
                .char_indices()
                .nth(1)
                .map_or("", |(i, _)| &self.digits[i..])
        } else {
            &self.digits
        }
    }

    /// Appends a trailing run of `0`/`5` to this group.
    pub(crate) fn absorb_tail(&mut self, tail: &str) {
        self.zero_count += tail.chars().filter(|c| *c == '0').count() as u32;
        self.five_count += tail.chars().filter(|c| *c == '5').count() as u32;
        self.digits.push_str(tail);
    }
}

pub(crate) fn is_special_digit(c: char) -> bool {
    c == '0' || c == '5'
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segmentation {
    pub normalized: String,
    /// Leading `0`/`5` digits that open no group.
    pub leading: String,
    pub groups: Vec<SegmentGroup>,
}

impl Segmentation {
    /// Rebuilds the normalized number from the leading run and each group's
    /// fresh digits.
    pub fn reconstruct(&self) -> String {
        let mut out = self.leading.clone();
        for group in &self.groups {
            out.push_str(group.fresh_digits());
        }
        out
    }

    pub fn total_zeros(&self) -> usize {
        self.normalized.chars().filter(|c| *c == '0').count()
    }

    pub fn total_fives(&self) -> usize {
        self.normalized.chars().filter(|c| *c == '5').count()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarMatch {
    pub group: SegmentGroup,
    pub star: Option<StarKey>,
    pub star_name: Option<&'static str>,
    pub polarity: Polarity,
    /// The clean two-digit key that matched a table member.
    pub matched_pair_digits: Option<String>,
    pub base_energy: u32,
    pub adjusted_energy: u32,
    pub level: EnergyLevel,
    pub sequence_position: SequencePosition,
    pub position_weight: f64,
    /// `adjusted_energy × position_weight × response factor`; reporting only.
    pub weighted_score: f64,
    pub variant_note: Option<&'static str>,
}

impl StarMatch {
    pub fn is_resolved(&self) -> bool {
        self.star.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceLabel {
    Balanced,
    YangDominant,
    YinDominant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyProfile {
    pub total_energy: u32,
    pub auspicious_count: usize,
    pub inauspicious_count: usize,
    pub mixed_count: usize,
    pub unresolved_count: usize,
    pub auspicious_energy: u32,
    pub inauspicious_energy: u32,
    pub net_energy: i64,
    pub balance_label: BalanceLabel,
    /// Net energy with every match scaled by its position weight.
    pub weighted_net_energy: f64,
    pub response_level: ResponseLevel,
}

impl Default for EnergyProfile {
    fn default() -> Self {
        Self {
            total_energy: 0,
            auspicious_count: 0,
            inauspicious_count: 0,
            mixed_count: 0,
            unresolved_count: 0,
            auspicious_energy: 0,
            inauspicious_energy: 0,
            net_energy: 0,
            balance_label: BalanceLabel::Balanced,
            weighted_net_energy: 0.0,
            response_level: ResponseLevel::VeryLow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Business,
    Personal,
    Wealth,
    Relationship,
    Career,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Business,
        Purpose::Personal,
        Purpose::Wealth,
        Purpose::Relationship,
        Purpose::Career,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Purpose::Business => "business",
            Purpose::Personal => "personal",
            Purpose::Wealth => "wealth",
            Purpose::Relationship => "relationship",
            Purpose::Career => "career",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Purpose::Business => "kinh doanh",
            Purpose::Personal => "cá nhân",
            Purpose::Wealth => "tài lộc",
            Purpose::Relationship => "tình duyên",
            Purpose::Career => "sự nghiệp",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Purpose {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Purpose::ALL
            .iter()
            .copied()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| EngineError::UnsupportedPurpose {
                purpose: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_kind_lengths() {
        assert!(NumberKind::Phone.accepts_length(9));
        assert!(NumberKind::Phone.accepts_length(11));
        assert!(!NumberKind::Phone.accepts_length(12));
        assert!(NumberKind::NationalId.accepts_length(12));
        assert!(!NumberKind::NationalId.accepts_length(10));
        assert_eq!("national-id".parse::<NumberKind>().unwrap(), NumberKind::NationalId);
    }

    #[test]
    fn test_energy_level_buckets() {
        assert_eq!(EnergyLevel::from_energy(1), EnergyLevel::Low);
        assert_eq!(EnergyLevel::from_energy(2), EnergyLevel::Medium);
        assert_eq!(EnergyLevel::from_energy(3), EnergyLevel::High);
        assert_eq!(EnergyLevel::from_energy(7), EnergyLevel::VeryHigh);
    }

    #[test]
    fn test_sequence_positions_and_weights() {
        assert_eq!(SequencePosition::of(0), SequencePosition::Start);
        assert_eq!(SequencePosition::of(2), SequencePosition::Start);
        assert_eq!(SequencePosition::of(3), SequencePosition::Middle);
        assert_eq!(SequencePosition::of(5), SequencePosition::Middle);
        assert_eq!(SequencePosition::of(6), SequencePosition::End);

        let weights = PositionWeights::default();
        assert!(weights.weight(SequencePosition::End) > weights.weight(SequencePosition::Start));
    }

    #[test]
    fn test_response_level_thresholds() {
        assert_eq!(ResponseLevel::from_ratio(0.0), ResponseLevel::VeryLow);
        assert_eq!(ResponseLevel::from_ratio(0.2), ResponseLevel::Low);
        assert_eq!(ResponseLevel::from_ratio(0.5), ResponseLevel::Moderate);
        assert_eq!(ResponseLevel::from_ratio(0.6), ResponseLevel::High);
        assert_eq!(ResponseLevel::from_ratio(1.4), ResponseLevel::VeryHigh);
    }

    #[test]
    fn test_purpose_parse() {
        assert_eq!("Business".parse::<Purpose>().unwrap(), Purpose::Business);
        match "health".parse::<Purpose>() {
            Err(EngineError::UnsupportedPurpose { purpose }) => assert_eq!(purpose, "health"),
            other => panic!("expected UnsupportedPurpose, got {:?}", other),
        }
    }

    #[test]
    fn test_segment_group_counts_and_clean_key() {
        let group = SegmentGroup::new(0, "105", false);
        assert_eq!(group.zero_count, 1);
        assert_eq!(group.five_count, 1);
        assert_eq!(group.clean_key(), "1");
        assert_eq!(group.end(), 3);
    }

    #[test]
    fn test_star_key_round_trip_through_str() {
        for key in StarKey::ALL {
            assert_eq!(key.as_str().parse::<StarKey>().unwrap(), key);
        }
        assert!("SAO_LA".parse::<StarKey>().is_err());
    }
}

//! Readings that look at more than one group or at raw digit positions.

use crate::domain::model::{Polarity, StarMatch};
use crate::domain::report::{
    CodeHit, CombinationFinding, KeyPosition, KeyPositions, LastThreeAnalysis, PairReading,
    SpecialCombination,
};
use crate::tables::combinations::{
    combination_key, pair_description, pair_warning, specific_combination, three_digit_codes,
};
use crate::tables::digits::{fifth_from_end_meaning, last_digit_meaning, third_from_end_meaning};
use crate::tables::StarTable;

/// Adjacent pairs of resolved matches. A pair touching an unresolved
/// match is skipped; positions still refer to the full sequence.
pub fn adjacent_findings(matches: &[StarMatch]) -> Vec<CombinationFinding> {
    let last = matches.len().saturating_sub(1);

    matches
        .windows(2)
        .enumerate()
        .filter_map(|(i, window)| {
            let (first, second) = (&window[0], &window[1]);
            let (first_star, second_star) = (first.star?, second.star?);

            let is_positive = first.polarity == Polarity::Auspicious
                && second.polarity == Polarity::Auspicious;
            let is_negative = first.polarity == Polarity::Inauspicious
                && second.polarity == Polarity::Inauspicious;

            Some(CombinationFinding {
                position: format!("{}-{}", i + 1, i + 2),
                first_index: i,
                second_index: i + 1,
                first_star,
                second_star,
                key: combination_key(first_star, second_star),
                description: pair_description(first_star, second_star).unwrap_or(""),
                is_positive,
                is_negative,
                total_energy: first.adjusted_energy + second.adjusted_energy,
                is_last_pair: i + 1 == last,
                warning: pair_warning(first_star, second_star, is_negative),
            })
        })
        .collect()
}

pub fn key_positions(normalized: &str) -> KeyPositions {
    let digits: Vec<char> = normalized.chars().collect();
    let from_end = |k: usize| digits.len().checked_sub(k).map(|i| digits[i]);

    KeyPositions {
        last_digit: from_end(1).map(|value| KeyPosition {
            value,
            meaning: last_digit_meaning(value),
            position: "Vị trí cuối cùng",
        }),
        third_from_end: from_end(3).map(|value| KeyPosition {
            value,
            meaning: third_from_end_meaning(value),
            position: "Vị trí thứ 3 từ cuối",
        }),
        fifth_from_end: from_end(5).map(|value| KeyPosition {
            value,
            meaning: fifth_from_end_meaning(value),
            position: "Vị trí thứ 5 từ cuối",
        }),
    }
}

/// Reads the final three digits as two overlapping raw pairs, ignoring
/// the main segmentation and any `0`/`5` handling.
pub fn last_three(normalized: &str, table: &StarTable) -> Option<LastThreeAnalysis> {
    let len = normalized.len();
    if len < 3 {
        return None;
    }
    let digits = &normalized[len - 3..];

    let first_pair = read_pair(&digits[..2], table);
    let second_pair = read_pair(&digits[1..], table);

    let (combination_key, combination_description) = match (first_pair.star, second_pair.star) {
        (Some(a), Some(b)) => (Some(combination_key(a, b)), pair_description(a, b)),
        _ => (None, None),
    };

    let special_combination = specific_combination(digits).map(|c| SpecialCombination {
        key: c.key,
        description: c.description,
        details: c.details,
    });

    let has_special_meaning = special_combination.is_some() || combination_description.is_some();

    Some(LastThreeAnalysis {
        digits: digits.to_string(),
        first_pair,
        second_pair,
        combination_key,
        combination_description,
        special_combination,
        has_special_meaning,
    })
}

fn read_pair(pair: &str, table: &StarTable) -> PairReading {
    match table.lookup(pair) {
        Some((star, energy)) => PairReading {
            pair: pair.to_string(),
            star: Some(star.key),
            star_name: Some(star.display_name),
            polarity: star.polarity,
            energy: Some(energy),
        },
        None => PairReading {
            pair: pair.to_string(),
            star: None,
            star_name: None,
            polarity: Polarity::Unresolved,
            energy: None,
        },
    }
}

/// Every three-digit window (read forwards or backwards) found in the
/// wealth, career and marriage code tables.
pub fn code_hits(normalized: &str) -> Vec<CodeHit> {
    let digits: Vec<char> = normalized.chars().collect();
    let mut hits = Vec::new();

    for (i, window) in digits.windows(3).enumerate() {
        let forward: String = window.iter().collect();
        let backward: String = window.iter().rev().collect();

        for code in three_digit_codes() {
            if code.values.contains(&forward.as_str()) || code.values.contains(&backward.as_str()) {
                hits.push(CodeHit {
                    category: code.category,
                    code: code.code,
                    value: forward.clone(),
                    position: format!("{}-{}", i + 1, i + 3),
                    description: code.description,
                    detail: code.detail,
                });
            }
        }
    }

    if !hits.is_empty() {
        tracing::debug!(count = hits.len(), "three-digit codes found");
    }
    hits
}

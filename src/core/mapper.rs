use crate::domain::model::{EnergyLevel, Polarity, SegmentGroup, SequencePosition, StarMatch};
use crate::domain::ports::ResponseFactorProvider;
use crate::tables::StarTable;

/// Resolves segment groups to stars and weighs them.
pub struct StarMapper<'a, F: ResponseFactorProvider> {
    table: &'a StarTable,
    factors: &'a F,
}

impl<'a, F: ResponseFactorProvider> StarMapper<'a, F> {
    pub fn new(table: &'a StarTable, factors: &'a F) -> Self {
        Self { table, factors }
    }

    pub fn map_groups(&self, groups: &[SegmentGroup]) -> Vec<StarMatch> {
        groups
            .iter()
            .enumerate()
            .map(|(index, group)| self.map_group(index, group))
            .collect()
    }

    /// Maps the group found at `index` in the sequence.
    ///
    /// `0` digits dampen and `5` digits amplify the table weight; the
    /// result never drops below 1. A group whose clean key is not a
    /// two-digit table member stays unresolved with energy 1.
    pub fn map_group(&self, index: usize, group: &SegmentGroup) -> StarMatch {
        let clean = group.clean_key();
        let resolved = self.table.lookup(&clean);

        let base_energy = resolved.map_or(1, |(_, energy)| u32::from(energy));
        let adjusted_energy = adjust_energy(base_energy, group.five_count, group.zero_count);
        let sequence_position = SequencePosition::of(index);
        let position_weight = self.factors.position_weight(sequence_position);
        let positional = f64::from(adjusted_energy) * position_weight;

        match resolved {
            Some((star, _)) => {
                let factor = self.factors.response_factor(star.key);
                StarMatch {
                    group: group.clone(),
                    star: Some(star.key),
                    star_name: Some(star.display_name),
                    polarity: star.polarity,
                    matched_pair_digits: Some(clean),
                    base_energy,
                    adjusted_energy,
                    level: EnergyLevel::from_energy(adjusted_energy),
                    sequence_position,
                    position_weight,
                    weighted_score: positional * factor,
                    variant_note: (group.zero_count > 0).then_some(star.zero_variant),
                }
            }
            None => {
                tracing::debug!(
                    digits = %group.digits,
                    clean = %clean,
                    "group has no star, left unresolved"
                );
                StarMatch {
                    group: group.clone(),
                    star: None,
                    star_name: None,
                    polarity: Polarity::Unresolved,
                    matched_pair_digits: None,
                    base_energy,
                    adjusted_energy,
                    level: EnergyLevel::from_energy(adjusted_energy),
                    sequence_position,
                    position_weight,
                    weighted_score: positional,
                    variant_note: None,
                }
            }
        }
    }
}

fn adjust_energy(base: u32, fives: u32, zeros: u32) -> u32 {
    base.saturating_add(fives).saturating_sub(zeros).max(1)
}

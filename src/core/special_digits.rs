use crate::domain::report::{DigitEffect, DigitEffectKind, SpecialDigitEffects};
use crate::tables::StarTable;

/// Scans every three-digit window for a `0` or `5` sitting inside a star
/// pair. Removing the special digit must leave exactly a two-digit table
/// member; `0` reports the star's zero variant, `5` its amplification.
pub fn special_digit_effects(normalized: &str, table: &StarTable) -> SpecialDigitEffects {
    let digits: Vec<char> = normalized.chars().collect();
    let mut effects = SpecialDigitEffects::default();

    for (i, window) in digits.windows(3).enumerate() {
        let triplet: String = window.iter().collect();
        let position = format!("{}-{}", i + 1, i + 3);

        if let Some(effect) = effect_for(&triplet, '0', &position, table) {
            effects.zero_effects.push(effect);
        }
        if let Some(effect) = effect_for(&triplet, '5', &position, table) {
            effects.five_effects.push(effect);
        }
    }

    tracing::debug!(
        zero = effects.zero_effects.len(),
        five = effects.five_effects.len(),
        "special digit effects"
    );
    effects
}

fn effect_for(triplet: &str, special: char, position: &str, table: &StarTable) -> Option<DigitEffect> {
    if !triplet.contains(special) {
        return None;
    }
    let clean: String = triplet.chars().filter(|c| *c != special).collect();
    let (star, _) = table.lookup(&clean)?;

    let (description, effect) = if special == '0' {
        (star.zero_variant.to_string(), DigitEffectKind::ZeroVariant)
    } else {
        (
            format!("Số 5 tăng cường năng lượng của sao {}", star.display_name),
            DigitEffectKind::FiveEnhancement,
        )
    };

    Some(DigitEffect {
        position: position.to_string(),
        digits: triplet.to_string(),
        star: star.key,
        star_name: star.display_name,
        description,
        effect,
    })
}

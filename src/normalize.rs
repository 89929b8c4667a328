use crate::model::{DrinkRecord, IngredientLine};

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Extracts the numeric suffix from a key in an indexed field family,
/// e.g. `"strIngredient12"` with prefix `"strIngredient"` yields 12.
/// Rejects empty or non-digit suffixes (`strIngredient`, `strIngredientX`).
fn indexed_suffix(key: &str, prefix: &str) -> Option<u32> {
    let suffix = key.strip_prefix(prefix)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

fn trimmed_field<'a>(drink: &'a DrinkRecord, key: &str) -> Option<&'a str> {
    let value = drink.fields.get(key)?.as_deref()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Collects the ingredient/measure pairs of a drink by discovering
/// `strIngredientN` keys at runtime rather than assuming the usual 15 slots,
/// so the output stays correct if the API grows more.
///
/// Slots whose ingredient is absent, null, or blank are skipped entirely,
/// even when a measure for the same N is present. A present ingredient with
/// a missing measure is kept with an empty measure. Pairs come back sorted by
/// the numeric slot index; lexicographic key order would put 10 before 2.
pub fn normalize_ingredients(drink: &DrinkRecord) -> Vec<IngredientLine> {
    let mut entries: Vec<(u32, IngredientLine)> = drink
        .fields
        .keys()
        .filter_map(|key| indexed_suffix(key, INGREDIENT_PREFIX))
        .filter_map(|num| {
            let ingredient = trimmed_field(drink, &format!("{INGREDIENT_PREFIX}{num}"))?;
            let measure = trimmed_field(drink, &format!("{MEASURE_PREFIX}{num}"))
                .unwrap_or_default();
            Some((
                num,
                IngredientLine {
                    measure: measure.to_string(),
                    ingredient: ingredient.to_string(),
                },
            ))
        })
        .collect();

    entries.sort_by_key(|(num, _)| *num);
    entries.into_iter().map(|(_, line)| line).collect()
}

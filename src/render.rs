//! Plain-text rendering of drinks and search results.
//!
//! The normalization layer hands over renderable structures; this module is
//! the thin consumer that turns them into terminal output.

use crate::instructions::segment_instructions;
use crate::model::DrinkRecord;
use crate::normalize::normalize_ingredients;
use crate::paginate::PageView;

/// Renders one drink as a text card: name, meta line, ingredients with
/// measures, numbered instruction steps.
pub fn drink_card(drink: &DrinkRecord) -> String {
    let mut out = String::new();

    out.push_str(drink.display_name());
    out.push('\n');

    let meta: Vec<&str> = [
        drink.category.as_deref(),
        drink.alcoholic.as_deref(),
        drink.glass.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !meta.is_empty() {
        out.push_str(&meta.join(" · "));
        out.push('\n');
    }

    let ingredients = normalize_ingredients(drink);
    if !ingredients.is_empty() {
        out.push_str("\nIngredients:\n");
        for line in &ingredients {
            if line.measure.is_empty() {
                out.push_str(&format!("  - {}\n", line.ingredient));
            } else {
                out.push_str(&format!("  - {} {}\n", line.measure, line.ingredient));
            }
        }
    }

    let steps = segment_instructions(drink.instructions.as_deref());
    if !steps.is_empty() {
        out.push_str("\nInstructions:\n");
        for (i, step) in steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
    }

    out
}

/// Renders one page of search results: range line, drink names with ids,
/// previous/next hints.
pub fn search_results(page: &PageView<'_, DrinkRecord>) -> String {
    let mut out = String::new();

    out.push_str(&page.range_label());
    out.push('\n');

    for drink in page.items {
        match drink.id.as_deref() {
            Some(id) => out.push_str(&format!("  [{}] {}\n", id, drink.display_name())),
            None => out.push_str(&format!("  {}\n", drink.display_name())),
        }
    }

    if page.has_previous() || page.has_next() {
        out.push('\n');
        if page.has_previous() {
            out.push_str(&format!("← page {}  ", page.current_page - 1));
        }
        if page.has_next() {
            out.push_str(&format!("page {} →", page.current_page + 1));
        }
        out.push('\n');
    }

    out
}

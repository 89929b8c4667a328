use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One drink as returned by TheCocktailDB API.
///
/// Every field is optional because the API can omit or null any of them. The
/// ingredient/measure slots (`strIngredient1..N`, `strMeasure1..N`) are an
/// open-ended family (the API currently stops at 15 but nothing guarantees
/// that), so they live in `fields` rather than being pinned to a fixed count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrinkRecord {
    #[serde(rename = "idDrink")]
    pub id: Option<String>,
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic")]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass")]
    pub glass: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// Everything else, including the strIngredientN/strMeasureN family.
    #[serde(flatten)]
    pub fields: HashMap<String, Option<String>>,
}

impl DrinkRecord {
    /// Display name, with a fallback for when the API omits it.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed cocktail")
    }
}

/// Envelope used by every TheCocktailDB endpoint: `{"drinks": [...]}` with
/// `drinks` null (not an empty array) when nothing matched.
#[derive(Debug, Deserialize)]
pub struct DrinksResponse {
    pub drinks: Option<Vec<DrinkRecord>>,
}

impl DrinksResponse {
    pub fn into_drinks(self) -> Vec<DrinkRecord> {
        self.drinks.unwrap_or_default()
    }
}

/// One ingredient/measure pair derived from a drink record.
///
/// `measure` may be empty (ingredient listed without a quantity);
/// `ingredient` is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub measure: String,
    pub ingredient: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_indexed_fields() {
        let json = r#"{
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strCategory": "Ordinary Drink",
            "strIngredient1": "Tequila",
            "strMeasure1": "1 1/2 oz",
            "strIngredient2": null
        }"#;

        let drink: DrinkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(drink.id.as_deref(), Some("11007"));
        assert_eq!(drink.name.as_deref(), Some("Margarita"));
        assert_eq!(
            drink.fields.get("strIngredient1"),
            Some(&Some("Tequila".to_string()))
        );
        assert_eq!(drink.fields.get("strIngredient2"), Some(&None));
    }

    #[test]
    fn test_null_drinks_becomes_empty_vec() {
        let response: DrinksResponse = serde_json::from_str(r#"{"drinks": null}"#).unwrap();
        assert!(response.into_drinks().is_empty());
    }

    #[test]
    fn test_display_name_fallback() {
        let drink = DrinkRecord::default();
        assert_eq!(drink.display_name(), "Unnamed cocktail");
    }
}

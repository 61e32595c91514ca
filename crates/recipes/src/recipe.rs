use serde::{Deserialize, Serialize};

use pantrykit_core::{DomainError, DomainResult};

/// At most this many suggestions are surfaced to the user at once.
pub const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A recipe: name, ingredient keywords, prep time, difficulty.
///
/// Ingredients are matching keywords, not exact product names — "eggs"
/// matches a pantry item called "Free-range Eggs".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub prep_minutes: u32,
    pub difficulty: Difficulty,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
        prep_minutes: u32,
        difficulty: Difficulty,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("recipe name cannot be empty"));
        }

        let ingredients: Vec<String> = ingredients.into_iter().map(Into::into).collect();
        if ingredients.is_empty() {
            return Err(DomainError::validation(
                "recipe must list at least one ingredient",
            ));
        }

        Ok(Self {
            name,
            ingredients,
            prep_minutes,
            difficulty,
        })
    }
}

/// The built-in recipe catalog.
pub fn starter_recipes() -> Vec<Recipe> {
    use Difficulty::{Easy, Medium};

    let rows: [(&str, &[&str], u32, Difficulty); 11] = [
        ("Scrambled Eggs", &["eggs", "butter", "salt"], 5, Easy),
        ("Vegetable Stir Fry", &["vegetables", "oil", "soy sauce"], 15, Easy),
        ("Pasta with Tomato Sauce", &["pasta", "tomato sauce"], 15, Easy),
        ("Grilled Cheese Sandwich", &["bread", "cheese", "butter"], 10, Easy),
        ("Omelette", &["eggs", "cheese", "milk"], 10, Easy),
        ("Pancakes", &["flour", "eggs", "milk", "sugar"], 20, Easy),
        ("Spaghetti Carbonara", &["pasta", "eggs", "bacon", "cheese"], 25, Medium),
        ("Chicken Curry", &["chicken", "rice", "curry powder"], 40, Medium),
        ("Vegetable Soup", &["carrots", "potatoes", "onions"], 30, Easy),
        ("Fruit Salad", &["apple", "banana", "orange"], 10, Easy),
        ("Beef Stew", &["beef", "potatoes", "carrots"], 120, Medium),
    ];

    rows.into_iter()
        .map(|(name, ingredients, prep, difficulty)| Recipe {
            name: name.to_owned(),
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            prep_minutes: prep,
            difficulty,
        })
        .collect()
}

/// Suggest recipes cookable from the given pantry item names.
///
/// A recipe matches when any of its ingredient keywords is a
/// case-insensitive substring of any pantry name. The first `limit` matches
/// are returned in catalog order.
pub fn suggest_for_pantry<'a>(
    recipes: &'a [Recipe],
    pantry_names: &[String],
    limit: usize,
) -> Vec<&'a Recipe> {
    let lowered: Vec<String> = pantry_names.iter().map(|n| n.to_lowercase()).collect();

    recipes
        .iter()
        .filter(|recipe| {
            recipe.ingredients.iter().any(|ingredient| {
                let ingredient = ingredient.to_lowercase();
                lowered.iter().any(|name| name.contains(&ingredient))
            })
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let recipes = starter_recipes();
        let suggested = suggest_for_pantry(&recipes, &names(&["Free-range EGGS"]), SUGGESTION_LIMIT);

        let titles: Vec<&str> = suggested.iter().map(|r| r.name.as_str()).collect();
        assert!(titles.contains(&"Scrambled Eggs"));
        assert!(titles.contains(&"Omelette"));
    }

    #[test]
    fn at_most_limit_suggestions_in_catalog_order() {
        let recipes = starter_recipes();
        // Eggs alone match 4 recipes; milk pushes it past the limit.
        let suggested = suggest_for_pantry(&recipes, &names(&["Eggs", "Milk", "Cheese"]), 3);
        assert_eq!(suggested.len(), 3);
        assert_eq!(suggested[0].name, "Scrambled Eggs");
    }

    #[test]
    fn empty_pantry_matches_nothing() {
        let recipes = starter_recipes();
        assert!(suggest_for_pantry(&recipes, &[], SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn unrelated_pantry_matches_nothing() {
        let recipes = starter_recipes();
        let suggested = suggest_for_pantry(&recipes, &names(&["Dish Soap"]), SUGGESTION_LIMIT);
        assert!(suggested.is_empty());
    }

    #[test]
    fn recipe_validation_rejects_blank_name_and_empty_ingredients() {
        let blank = Recipe::new("  ", ["eggs"], 5, Difficulty::Easy);
        assert!(blank.is_err());

        let empty = Recipe::new("Toast", Vec::<String>::new(), 5, Difficulty::Easy);
        assert!(empty.is_err());
    }
}

//! Static per-recipe detail lookup: nutrition facts, ingredient list, and
//! cooking steps for the recipe detail screen.

use serde::{Deserialize, Serialize};

/// Nutrition facts as displayed, label-for-label.
///
/// Values are display strings (`"450 kcal"`, `"20g"`), not numbers: they come
/// from a fixed lookup table and are never computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub time: String,
    pub servings: String,
}

impl NutritionFacts {
    fn new(
        calories: &str,
        protein: &str,
        carbs: &str,
        fat: &str,
        time: &str,
        servings: &str,
    ) -> Self {
        Self {
            calories: calories.to_owned(),
            protein: protein.to_owned(),
            carbs: carbs.to_owned(),
            fat: fat.to_owned(),
            time: time.to_owned(),
            servings: servings.to_owned(),
        }
    }

    /// The fallback facts for a recipe the table does not know.
    pub fn unknown() -> Self {
        Self::new("Unknown", "Unknown", "Unknown", "Unknown", "Unknown", "Unknown")
    }
}

/// Everything the detail screen shows for one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub name: String,
    pub nutrition: NutritionFacts,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl RecipeDetails {
    fn new(
        name: &str,
        nutrition: NutritionFacts,
        ingredients: &[&str],
        steps: &[&str],
    ) -> Self {
        Self {
            name: name.to_owned(),
            nutrition,
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            steps: steps.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Whether the lookup actually knew this recipe.
    pub fn is_known(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

/// Look up the detail record for a recipe by its display name.
///
/// Unknown names are not an error: they fall back to a record with
/// "Unknown" nutrition facts and empty ingredients/steps.
pub fn recipe_details(name: &str) -> RecipeDetails {
    match name {
        "Spaghetti" => RecipeDetails::new(
            name,
            NutritionFacts::new("450 kcal", "20g", "55g", "15g", "30 mins", "2"),
            &["200g Spaghetti", "2 Tomatoes", "Olive Oil", "Garlic", "Salt"],
            &[
                "Boil water in a large pot and add spaghetti.",
                "Heat olive oil in a pan and saut\u{e9} garlic.",
                "Add chopped tomatoes and simmer for 10 minutes.",
                "Combine spaghetti with sauce, add salt to taste.",
            ],
        ),
        "Grilled Chicken Salad" => RecipeDetails::new(
            name,
            NutritionFacts::new("300 kcal", "35g", "10g", "8g", "25 mins", "1"),
            &["1 Chicken Breast", "Lettuce", "Cucumber", "Olive Oil", "Lemon"],
            &[
                "Grill the chicken breast until fully cooked.",
                "Chop the lettuce, cucumber, and slice the chicken.",
                "Toss the salad with olive oil and lemon juice.",
            ],
        ),
        "Vegetable Stir Fry" => RecipeDetails::new(
            name,
            NutritionFacts::new("250 kcal", "10g", "40g", "5g", "20 mins", "2"),
            &["Broccoli", "Carrots", "Bell Peppers", "Soy Sauce", "Ginger"],
            &[
                "Chop the vegetables into small pieces.",
                "Heat a pan and stir fry vegetables for 5-7 minutes.",
                "Add soy sauce and ginger, stir well for another 3 minutes.",
            ],
        ),
        "Pancakes" => RecipeDetails::new(
            name,
            NutritionFacts::new("350 kcal", "8g", "60g", "10g", "15 mins", "4"),
            &["1 Cup Flour", "1 Egg", "Milk", "Butter", "Sugar"],
            &[
                "Mix the flour, egg, milk, and sugar in a bowl.",
                "Heat a pan and melt butter.",
                "Pour the batter into the pan and cook until both sides are golden.",
            ],
        ),
        _ => RecipeDetails {
            name: name.to_owned(),
            nutrition: NutritionFacts::unknown(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        },
    }
}

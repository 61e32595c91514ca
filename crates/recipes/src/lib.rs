//! Recipes domain module.
//!
//! The recipe catalog, pantry-driven suggestion rules, and the static weekly
//! meal plan, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod details;
pub mod mealplan;
pub mod recipe;

pub use details::{NutritionFacts, RecipeDetails, recipe_details};
pub use mealplan::{DayNutrition, Meal, MealSlot, WeeklyPlan};
pub use recipe::{Difficulty, Recipe, SUGGESTION_LIMIT, starter_recipes, suggest_for_pantry};

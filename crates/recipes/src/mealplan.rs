use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// One planned meal with its nutrition facts (static lookup data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub name: String,
    pub calories: u32,
    pub protein_grams: u32,
}

impl Meal {
    pub fn new(slot: MealSlot, name: impl Into<String>, calories: u32, protein_grams: u32) -> Self {
        Self {
            slot,
            name: name.into(),
            calories,
            protein_grams,
        }
    }
}

/// Nutrition summed over a day's planned meals. Derived on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNutrition {
    pub calories: u32,
    pub protein_grams: u32,
}

/// The weekly meal plan: a static per-day lookup table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    days: HashMap<Weekday, Vec<Meal>>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The plan shipped with the app.
    pub fn starter() -> Self {
        use MealSlot::{Breakfast, Dinner, Lunch};

        let mut plan = Self::new();
        plan.set_day(
            Weekday::Mon,
            vec![
                Meal::new(Breakfast, "Oatmeal with Berries", 280, 5),
                Meal::new(Lunch, "Seafood Platter", 520, 30),
                Meal::new(Dinner, "Chicken Soup", 360, 24),
            ],
        );
        plan.set_day(
            Weekday::Tue,
            vec![
                Meal::new(Breakfast, "Pancakes with Syrup", 350, 6),
                Meal::new(Lunch, "Grilled Chicken Salad", 400, 35),
                Meal::new(Dinner, "Steak with Veggies", 600, 50),
            ],
        );
        plan.set_day(
            Weekday::Wed,
            vec![
                Meal::new(Breakfast, "Smoothie Bowl", 300, 8),
                Meal::new(Lunch, "Vegetarian Wrap", 450, 12),
                Meal::new(Dinner, "Spaghetti", 550, 25),
            ],
        );
        plan.set_day(
            Weekday::Thu,
            vec![
                Meal::new(Breakfast, "Avocado Toast", 280, 7),
                Meal::new(Lunch, "Turkey Sandwich", 380, 28),
                Meal::new(Dinner, "Fish Tacos", 500, 40),
            ],
        );
        plan.set_day(
            Weekday::Fri,
            vec![
                Meal::new(Breakfast, "Egg and Bacon", 400, 18),
                Meal::new(Lunch, "Quinoa Salad", 450, 15),
                Meal::new(Dinner, "Grilled Salmon", 600, 45),
            ],
        );
        plan
    }

    pub fn set_day(&mut self, day: Weekday, meals: Vec<Meal>) {
        self.days.insert(day, meals);
    }

    /// Meals planned for the day; empty when nothing is planned.
    pub fn meals_for(&self, day: Weekday) -> &[Meal] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Nutrition facts summed across the day's meals.
    pub fn day_nutrition(&self, day: Weekday) -> DayNutrition {
        self.meals_for(day)
            .iter()
            .fold(DayNutrition::default(), |acc, meal| DayNutrition {
                calories: acc.calories + meal.calories,
                protein_grams: acc.protein_grams + meal.protein_grams,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_plan_covers_monday_slots() {
        let plan = WeeklyPlan::starter();
        let monday = plan.meals_for(Weekday::Mon);
        assert_eq!(monday.len(), 3);
        assert_eq!(monday[0].slot, MealSlot::Breakfast);
        assert_eq!(monday[2].name, "Chicken Soup");
    }

    #[test]
    fn starter_plan_covers_all_five_weekdays() {
        let plan = WeeklyPlan::starter();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            assert_eq!(plan.meals_for(day).len(), 3, "{day} should have 3 meals");
        }
        assert_eq!(plan.meals_for(Weekday::Thu)[2].name, "Fish Tacos");
        assert_eq!(plan.meals_for(Weekday::Fri)[0].name, "Egg and Bacon");
    }

    #[test]
    fn day_nutrition_sums_calories_and_protein() {
        let plan = WeeklyPlan::starter();
        let monday = plan.day_nutrition(Weekday::Mon);
        assert_eq!(monday.calories, 280 + 520 + 360);
        assert_eq!(monday.protein_grams, 5 + 30 + 24);

        let friday = plan.day_nutrition(Weekday::Fri);
        assert_eq!(friday.calories, 400 + 450 + 600);
        assert_eq!(friday.protein_grams, 18 + 15 + 45);
    }

    #[test]
    fn weekend_is_unplanned_empty_and_zero() {
        let plan = WeeklyPlan::starter();
        assert!(plan.meals_for(Weekday::Sat).is_empty());
        assert!(plan.meals_for(Weekday::Sun).is_empty());
        assert_eq!(plan.day_nutrition(Weekday::Sun), DayNutrition::default());
    }
}

use tracing::debug;

use pantrykit_recipes::RecipeDetails;

use crate::responder::Reply;

/// One scripted rule for the recipe detail screen: a keyword matched
/// case-insensitively anywhere in the user's text, and a renderer over the
/// recipe being viewed.
struct GuideRule {
    name: &'static str,
    keyword: &'static str,
    render: fn(&RecipeDetails) -> String,
}

/// The per-recipe helper shown on the detail screen.
///
/// Unlike [`crate::Responder`], which draws on the whole pantry, the guide
/// answers questions about one recipe only. Rules are evaluated
/// top-to-bottom, so "thank you" wins over the "help" rule it also contains
/// the letters of.
#[derive(Debug)]
pub struct RecipeGuide {
    details: RecipeDetails,
}

const GUIDE_RULES: &[GuideRule] = &[
    GuideRule {
        name: "ingredients",
        keyword: "ingredients",
        render: |details| {
            format!(
                "Here are the ingredients for {}: {}",
                details.name,
                details.ingredients.join(", ")
            )
        },
    },
    GuideRule {
        name: "steps",
        keyword: "steps",
        render: |details| {
            format!(
                "Here are the steps to make {}: {}",
                details.name,
                details.steps.join("\n")
            )
        },
    },
    GuideRule {
        name: "greeting",
        keyword: "hello",
        render: |_| "Hello! How can I assist you today?".to_owned(),
    },
    GuideRule {
        name: "thanks",
        keyword: "thank you",
        render: |_| "You're welcome! Let me know if you need more help.".to_owned(),
    },
    GuideRule {
        name: "help",
        keyword: "help",
        render: |_| {
            "I can assist you with recipe ingredients, cooking steps, or anything else related to the recipe. Just ask!"
                .to_owned()
        },
    },
];

const GUIDE_FALLBACK: &str = "I'm not sure about that, but I can help with ingredients and steps!";

impl RecipeGuide {
    pub fn new(details: RecipeDetails) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &RecipeDetails {
        &self.details
    }

    /// Produce the reply for one user message about this recipe.
    ///
    /// Blank input gets no reply, matching [`crate::Responder::reply`].
    pub fn reply(&self, input: &str) -> Option<Reply> {
        if input.trim().is_empty() {
            return None;
        }

        let lowered = input.to_lowercase();
        for rule in GUIDE_RULES {
            if lowered.contains(rule.keyword) {
                debug!(rule = rule.name, recipe = %self.details.name, "guide rule matched");
                return Some(Reply {
                    text: (rule.render)(&self.details),
                    rule: rule.name,
                });
            }
        }

        debug!(recipe = %self.details.name, "guide fallback reply");
        Some(Reply {
            text: GUIDE_FALLBACK.to_owned(),
            rule: "fallback",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantrykit_recipes::recipe_details;

    fn spaghetti_guide() -> RecipeGuide {
        RecipeGuide::new(recipe_details("Spaghetti"))
    }

    #[test]
    fn ingredients_question_lists_the_recipes_ingredients() {
        let reply = spaghetti_guide()
            .reply("What INGREDIENTS do I need?")
            .unwrap();
        assert_eq!(reply.rule, "ingredients");
        assert_eq!(
            reply.text,
            "Here are the ingredients for Spaghetti: 200g Spaghetti, 2 Tomatoes, Olive Oil, Garlic, Salt"
        );
    }

    #[test]
    fn steps_question_joins_steps_with_newlines() {
        let reply = spaghetti_guide().reply("show me the steps").unwrap();
        assert_eq!(reply.rule, "steps");
        assert!(
            reply
                .text
                .starts_with("Here are the steps to make Spaghetti: Boil water")
        );
        assert_eq!(reply.text.matches('\n').count(), 3);
    }

    #[test]
    fn greeting_thanks_and_help_each_have_a_canned_line() {
        let guide = spaghetti_guide();
        assert_eq!(
            guide.reply("hello there").unwrap().text,
            "Hello! How can I assist you today?"
        );
        assert_eq!(
            guide.reply("ok, thank you").unwrap().text,
            "You're welcome! Let me know if you need more help."
        );
        assert_eq!(
            guide.reply("can you help me").unwrap().text,
            "I can assist you with recipe ingredients, cooking steps, or anything else related to the recipe. Just ask!"
        );
    }

    #[test]
    fn thank_you_is_not_shadowed_by_the_help_rule() {
        // "thank you for the help" contains both keywords; the earlier rule
        // must win.
        let reply = spaghetti_guide().reply("thank you for the help").unwrap();
        assert_eq!(reply.rule, "thanks");
    }

    #[test]
    fn unmatched_input_gets_the_fallback() {
        let reply = spaghetti_guide().reply("what wine pairs with this?").unwrap();
        assert_eq!(reply.rule, "fallback");
        assert_eq!(
            reply.text,
            "I'm not sure about that, but I can help with ingredients and steps!"
        );
    }

    #[test]
    fn blank_input_gets_no_reply() {
        assert!(spaghetti_guide().reply("  ").is_none());
    }

    #[test]
    fn unknown_recipe_still_answers_from_its_empty_record() {
        let guide = RecipeGuide::new(recipe_details("Mystery Casserole"));
        let reply = guide.reply("ingredients?").unwrap();
        assert_eq!(
            reply.text,
            "Here are the ingredients for Mystery Casserole: "
        );
    }
}

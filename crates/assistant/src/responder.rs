use serde::Serialize;
use tracing::debug;

use pantrykit_recipes::{Recipe, SUGGESTION_LIMIT, suggest_for_pantry};

/// Read-only view of the state a reply may draw on.
#[derive(Debug, Clone, Copy)]
pub struct PantryContext<'a> {
    pub pantry_names: &'a [String],
    pub recipes: &'a [Recipe],
}

/// A canned reply, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub rule: &'static str,
}

/// One scripted rule: a predicate over the user's text and a renderer for
/// the reply.
pub struct Rule {
    name: &'static str,
    predicate: fn(&str) -> bool,
    render: fn(&PantryContext<'_>) -> String,
}

impl Rule {
    pub fn new(
        name: &'static str,
        predicate: fn(&str) -> bool,
        render: fn(&PantryContext<'_>) -> String,
    ) -> Self {
        Self {
            name,
            predicate,
            render,
        }
    }
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The scripted responder: rules are evaluated top-to-bottom; the first
/// matching rule renders the reply, and anything unmatched gets the fixed
/// fallback line.
#[derive(Debug)]
pub struct Responder {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl Responder {
    pub fn new(rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// The stock "AI Chef" ruleset.
    ///
    /// The fallback line invites "What can I cook?", so the suggestion rule
    /// matches on `cook` as well as `recipe`.
    pub fn chef() -> Self {
        Self::new(
            vec![Rule::new(
                "recipe-suggestions",
                |input| contains_ignore_case(input, "recipe") || contains_ignore_case(input, "cook"),
                render_suggestions,
            )],
            "I can help with recipe suggestions. Try asking 'What can I cook?'",
        )
    }

    /// Produce the reply for one user message.
    ///
    /// Blank input gets no reply at all (the original UI ignores it).
    pub fn reply(&self, input: &str, ctx: &PantryContext<'_>) -> Option<Reply> {
        if input.trim().is_empty() {
            return None;
        }

        for rule in &self.rules {
            if (rule.predicate)(input) {
                debug!(rule = rule.name, "assistant rule matched");
                return Some(Reply {
                    text: (rule.render)(ctx),
                    rule: rule.name,
                });
            }
        }

        debug!("assistant fallback reply");
        Some(Reply {
            text: self.fallback.to_owned(),
            rule: "fallback",
        })
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn render_suggestions(ctx: &PantryContext<'_>) -> String {
    let suggested = suggest_for_pantry(ctx.recipes, ctx.pantry_names, SUGGESTION_LIMIT);
    if suggested.is_empty() {
        return "No matching recipes found. Try adding more ingredients!".to_owned();
    }

    let body = suggested
        .iter()
        .map(|recipe| {
            format!(
                "\u{1f374} {}\n\u{23f1} {} mins | {}\n\u{1f957} Ingredients: {}",
                recipe.name,
                recipe.prep_minutes,
                recipe.difficulty,
                recipe.ingredients.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Here are recipes you can make:\n\n{body}")
}

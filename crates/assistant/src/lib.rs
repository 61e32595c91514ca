//! `pantrykit-assistant`
//!
//! **Responsibility:** the scripted "AI Chef" boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate pantry or cart state.
//! - It produces canned replies from a fixed, ordered ruleset — no learning,
//!   no external model calls.
//! - The character-by-character reveal is a pure schedule; timers belong to
//!   the presentation layer.

pub mod guide;
pub mod responder;
pub mod reveal;

pub use guide::RecipeGuide;
pub use responder::{PantryContext, Reply, Responder, Rule};
pub use reveal::{Frame, RevealScript, CHAR_DELAY};

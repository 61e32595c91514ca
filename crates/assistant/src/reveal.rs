//! The cosmetic character-by-character reveal.
//!
//! A reply is revealed one character at a time at a fixed cadence. This
//! module only computes the schedule; it never sleeps or spawns anything.
//! The presentation layer is free to drive (or skip) the animation.

use std::time::Duration;

use serde::Serialize;

/// Cadence of the reveal, per character.
pub const CHAR_DELAY: Duration = Duration::from_millis(30);

/// One step of the reveal: what is visible, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Offset from the start of the reveal.
    pub at: Duration,
    /// Cumulative prefix visible at that offset (always on a char boundary).
    pub visible: String,
}

/// A pure reveal schedule for one reply text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealScript {
    text: String,
    char_delay: Duration,
}

impl RevealScript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            char_delay: CHAR_DELAY,
        }
    }

    pub fn with_char_delay(mut self, char_delay: Duration) -> Self {
        self.char_delay = char_delay;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// One frame per character, each a cumulative prefix of the text.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.text.char_indices().enumerate().map(|(n, (start, ch))| Frame {
            at: self.char_delay * (n as u32 + 1),
            visible: self.text[..start + ch.len_utf8()].to_owned(),
        })
    }

    /// When the final frame lands; zero for empty text.
    pub fn total_duration(&self) -> Duration {
        self.char_delay * self.text.chars().count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_per_character_at_fixed_cadence() {
        let script = RevealScript::new("abc");
        let frames: Vec<Frame> = script.frames().collect();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].at, Duration::from_millis(30));
        assert_eq!(frames[1].at, Duration::from_millis(60));
        assert_eq!(frames[2].at, Duration::from_millis(90));
        assert_eq!(script.total_duration(), Duration::from_millis(90));
    }

    #[test]
    fn frames_are_cumulative_prefixes_ending_in_full_text() {
        let script = RevealScript::new("hi!");
        let visible: Vec<String> = script.frames().map(|f| f.visible).collect();
        assert_eq!(visible, vec!["h", "hi", "hi!"]);
    }

    #[test]
    fn multibyte_text_stays_on_char_boundaries() {
        let script = RevealScript::new("\u{1f374} ok");
        let frames: Vec<Frame> = script.frames().collect();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].visible, "\u{1f374}");
        assert_eq!(frames[3].visible, "\u{1f374} ok");
    }

    #[test]
    fn empty_text_reveals_nothing() {
        let script = RevealScript::new("");
        assert_eq!(script.frames().count(), 0);
        assert_eq!(script.total_duration(), Duration::ZERO);
    }

    #[test]
    fn cadence_is_adjustable() {
        let script = RevealScript::new("ab").with_char_delay(Duration::from_millis(5));
        let frames: Vec<Frame> = script.frames().collect();
        assert_eq!(frames[1].at, Duration::from_millis(10));
    }
}

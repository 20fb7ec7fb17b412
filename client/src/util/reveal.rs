//! Character-paced reveal of a complete text.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay between revealed characters.
pub const REVEAL_STEP_MS: u32 = 30;

/// Successive prefixes of `text`, each one character (Unicode scalar) longer
/// than the last. The final prefix is `text` itself.
pub fn char_prefixes(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices().map(move |(at, ch)| &text[..at + ch.len_utf8()])
}

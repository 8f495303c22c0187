// Emoji segmentation and normalization.
//
// This is the core of the analysis: everything downstream (tallying,
// aggregation, exports) consumes the cluster strings produced here. Both
// the response columns and the category reference table go through the
// same tokenizer + normalizer, so a category entry and a response emoji
// can never disagree about what counts as an emoji.

pub mod normalize;
pub mod tokenizer;

use unicode_properties::UnicodeEmoji;

/// Zero-width joiner — glues two emoji bases into one compound glyph.
pub const ZWJ: char = '\u{200D}';

/// Variation selector 16 — requests emoji-style rendering. Part of a
/// cluster as authored, ignored for classification.
pub const VARIATION_SELECTOR: char = '\u{FE0F}';

/// The five Fitzpatrick skin-tone modifiers (U+1F3FB..U+1F3FF).
pub fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Whether a code point can start an emoji cluster.
///
/// Backed by the Unicode `Emoji` property (unicode-properties crate).
/// ASCII is excluded: `#`, `*` and the digits carry the Emoji property
/// but only render as emoji inside keycap sequences, and plain prose
/// must never tokenize as emoji.
pub fn is_emoji_base(c: char) -> bool {
    !c.is_ascii() && c.is_emoji_char()
}

/// Format a base emoji as Unicode code point labels, e.g. "U+1F647".
/// Multi-code-point bases (rare: a ZWJ-segment base) are space-joined.
pub fn codepoint_label(base: &str) -> String {
    base.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

// Response extraction and cleanup — prepares raw model output for analysis.
//
// Model responses arrive as free text ("😀😢 - joy and sadness, because...").
// The analysis tables want either the emoji plus a tidy one-line
// description, or (for the emoji-selection questions) the emoji alone.

use regex_lite::Regex;

use crate::emoji::tokenizer::tokenize;
use crate::emoji::{is_emoji_base, is_skin_tone, VARIATION_SELECTOR, ZWJ};

/// Reduce a response to `"<emojis> - <description>"`.
///
/// The description is the text with every emoji code point removed,
/// whitespace collapsed, and a leading `:` or `-` separator stripped.
/// Whichever part is empty is omitted; both empty yields an empty string.
pub fn emojis_with_description(text: &str) -> String {
    let emojis = emojis_only(text);
    let description = description_only(text);

    match (emojis.is_empty(), description.is_empty()) {
        (false, false) => format!("{emojis} - {description}"),
        (false, true) => emojis,
        (true, false) => description,
        (true, true) => String::new(),
    }
}

/// Strip everything that is not part of an emoji cluster.
pub fn emojis_only(text: &str) -> String {
    tokenize(text).concat()
}

/// The response text with all emoji machinery removed and tidied up.
fn description_only(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|&c| {
            !is_emoji_base(c) && !is_skin_tone(c) && c != ZWJ && c != VARIATION_SELECTOR
        })
        .collect();

    let collapsed = Regex::new(r"\s+")
        .expect("static regex")
        .replace_all(stripped.trim(), " ")
        .into_owned();

    Regex::new(r"^[:\-]\s*")
        .expect("static regex")
        .replace(&collapsed, "")
        .into_owned()
}

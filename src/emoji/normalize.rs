// Base-emoji normalization.
//
// Collapses every visual variant of an emoji (skin tone, gender/family
// ZWJ composition, emoji-style selector) onto one canonical identity.
// The category table is defined in terms of base glyphs, so this is the
// lookup key for classification.

use super::{is_skin_tone, VARIATION_SELECTOR, ZWJ};

/// Reduce a cluster to its base emoji.
///
/// Skin tones and VS16 are stripped first. If a ZWJ remains, the leading
/// component wins: the first non-empty ZWJ segment, or the first code
/// point of the second segment when the cluster starts with a joiner.
/// Total function — an empty cluster yields an empty base, never an error.
pub fn base_emoji(cluster: &str) -> String {
    let cleaned: String = cluster
        .chars()
        .filter(|&c| !is_skin_tone(c) && c != VARIATION_SELECTOR)
        .collect();

    if cleaned.contains(ZWJ) {
        let mut segments = cleaned.split(ZWJ);
        let first = segments.next().unwrap_or_default();
        if !first.is_empty() {
            return first.to_string();
        }
        if let Some(second) = segments.next() {
            if let Some(c) = second.chars().next() {
                return c.to_string();
            }
        }
        return String::new();
    }

    cleaned.chars().next().map(String::from).unwrap_or_default()
}

// Emoji cluster tokenizer.
//
// Scans a string one code point at a time and extracts emoji clusters:
// a base emoji plus any skin-tone modifiers, ZWJ-joined continuations,
// and variation selectors that follow it. Everything else is skipped.

use super::{is_emoji_base, is_skin_tone, VARIATION_SELECTOR, ZWJ};

/// Extract emoji clusters from `text`, in order of appearance.
///
/// A cluster starts at any code point with the Emoji property and greedily
/// extends over skin tones, `ZWJ` + emoji pairs, and `VS16`. A ZWJ that is
/// not followed by another emoji base ends the cluster and is dropped —
/// a dangling joiner is a scan boundary, not an error.
///
/// Pure function: no shared state, safe to call from anywhere.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut clusters = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !is_emoji_base(chars[i]) {
            i += 1;
            continue;
        }

        let mut cluster = String::new();
        cluster.push(chars[i]);
        i += 1;

        while i < chars.len() {
            let next = chars[i];
            if is_skin_tone(next) || next == VARIATION_SELECTOR {
                cluster.push(next);
                i += 1;
            } else if next == ZWJ && i + 1 < chars.len() && is_emoji_base(chars[i + 1]) {
                cluster.push(ZWJ);
                cluster.push(chars[i + 1]);
                i += 2;
            } else {
                break;
            }
        }

        clusters.push(cluster);
    }

    clusters
}

/// Convenience for optional cells: a missing response yields no clusters.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}

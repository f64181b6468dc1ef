use regex::Regex;
use std::sync::LazyLock;

use crate::domain::NormalizedText;

pub const DEFAULT_MAX_CHARS: usize = 120_000;

static TRAILING_HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Cleans extracted text and clamps it to `max_chars` characters.
///
/// Rules apply in order: drop every `\r`, strip spaces/tabs before a line
/// break, collapse three or more line breaks into two, trim both ends, then
/// hard-cut to the first `max_chars` characters. The cut ignores word
/// boundaries. Control characters other than `\r` pass through.
pub fn normalize_extracted_text(raw: &str, max_chars: usize) -> NormalizedText {
    let without_cr = raw.replace('\r', "");
    let without_trailing = TRAILING_HORIZONTAL_WS.replace_all(&without_cr, "\n");
    let collapsed = BLANK_LINE_RUNS.replace_all(&without_trailing, "\n\n");
    let trimmed = collapsed.trim();

    let clamped = match trimmed.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &trimmed[..byte_offset],
        None => trimmed,
    };

    NormalizedText::from_normalized(clamped.to_string())
}

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

const SEPARATOR_CLASS: &str = r"[\s\x{FEFF}]+";

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(SEPARATOR_CLASS).expect("valid separator regex"));

/// Whitespace as far as command parsing is concerned: Unicode `White_Space`
/// plus the zero width no-break space (U+FEFF).
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(is_separator)
}

/// Lowercases `text` and deletes every separator character.
///
/// Used only to decide which group a command addresses; offsets into the
/// result do not map back onto the original text.
pub fn normalize_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !is_separator(*c))
        .collect()
}

/// A lowercased copy of some text that remembers where each source char ends,
/// so matches found in the copy can be sliced out of the source.
#[derive(Debug)]
pub struct LoweredText {
    text: String,
    // (end in `text`, end in source) for every source char
    ends: Vec<(usize, usize)>,
    source_len: usize,
}

impl LoweredText {
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut ends = Vec::with_capacity(source.len());
        for (start, c) in source.char_indices() {
            text.extend(c.to_lowercase());
            ends.push((text.len(), start + c.len_utf8()));
        }
        Self {
            text,
            ends,
            source_len: source.len(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Maps an offset in the lowercased copy back to the source. An offset in
    /// the middle of a char's lowercase expansion rounds up to the end of
    /// that char.
    pub fn source_offset(&self, lowered: usize) -> usize {
        if lowered == 0 {
            return 0;
        }
        let idx = self.ends.partition_point(|(end, _)| *end < lowered);
        self.ends
            .get(idx)
            .map_or(self.source_len, |(_, source_end)| *source_end)
    }
}

/// Builds a case-insensitive pattern for `name` where every separator run
/// inside the name matches one or more separator characters.
///
/// Leading or trailing whitespace in the name becomes a required separator
/// run at that end. No whitespace is tolerated where the name has none.
pub fn flexible_name_pattern(name: &str) -> Result<Regex, regex::Error> {
    let lowered = name.to_lowercase();
    let pattern = SEPARATOR_RUN
        .split(&lowered)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(SEPARATOR_CLASS);

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

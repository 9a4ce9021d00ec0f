use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    #[error("Unknown case style: {0}")]
    UnknownStyle(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
    Dot,
    Inverse,
    Alternating,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 12] = [
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::Title,
        CaseStyle::Sentence,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::Constant,
        CaseStyle::Dot,
        CaseStyle::Inverse,
        CaseStyle::Alternating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Title => "title",
            CaseStyle::Sentence => "sentence",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Constant => "constant",
            CaseStyle::Dot => "dot",
            CaseStyle::Inverse => "inverse",
            CaseStyle::Alternating => "alternating",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.trim_end_matches("case").trim_end_matches(['_', '-', ' ']);
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| CaseError::UnknownStyle(s.to_string()))
    }
}

/// Split text into words
///
/// Non-alphanumeric characters separate words. Inside a run of
/// alphanumerics a new word starts at a lower-to-upper or digit-to-upper
/// transition, and before the last capital of an acronym that is followed
/// by lowercase letters: `parseHTTPResponse` is `parse`, `HTTP`, `Response`.
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join_lower(input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

fn sentence_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if capitalize_next && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }

        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        } else if c.is_alphanumeric() {
            capitalize_next = false;
        }
    }

    result
}

fn inverse_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_lowercase() {
            result.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

fn alternating_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut letters = 0usize;

    for c in input.chars() {
        if c.is_alphabetic() {
            if letters % 2 == 0 {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            letters += 1;
        } else {
            result.push(c);
        }
    }

    result
}

pub fn convert_case(input: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => input.to_uppercase(),
        CaseStyle::Lower => input.to_lowercase(),
        CaseStyle::Title => title_case(input),
        CaseStyle::Sentence => sentence_case(input),
        CaseStyle::Camel => split_words(input)
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        CaseStyle::Pascal => split_words(input).iter().map(|w| capitalize(w)).collect(),
        CaseStyle::Snake => join_lower(input, "_"),
        CaseStyle::Kebab => join_lower(input, "-"),
        CaseStyle::Dot => join_lower(input, "."),
        CaseStyle::Constant => join_lower(input, "_").to_uppercase(),
        CaseStyle::Inverse => inverse_case(input),
        CaseStyle::Alternating => alternating_case(input),
    }
}

/// The input rendered in every style, in [`CaseStyle::ALL`] order
pub fn convert_all_cases(input: &str) -> Vec<(CaseStyle, String)> {
    CaseStyle::ALL
        .into_iter()
        .map(|style| (style, convert_case(input, style)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub bytes: usize,
}

pub fn text_stats(input: &str) -> TextStats {
    TextStats {
        characters: input.chars().count(),
        characters_no_spaces: input.chars().filter(|c| !c.is_whitespace()).count(),
        words: input.split_whitespace().count(),
        lines: input.lines().count(),
        bytes: input.len(),
    }
}

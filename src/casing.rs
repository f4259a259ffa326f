//! How record field names are rendered into path segments.

use serde::{Deserialize, Serialize};

/// Casing applied to record field names before they become path segments.
///
/// Only path text changes; rule tables must be authored in the same casing.
/// Keyed-collection keys are never transformed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    #[default]
    AsDeclared,
    Snake,
    Camel,
    Pascal,
    Kebab,
}

impl NameCase {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameCase::AsDeclared => name.to_string(),
            NameCase::Snake => lower_joined(name, "_"),
            NameCase::Kebab => lower_joined(name, "-"),
            NameCase::Camel => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in split_words(name).iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            NameCase::Pascal => split_words(name).iter().map(|w| capitalize(w)).collect(),
        }
    }
}

fn lower_joined(name: &str, sep: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Splits an identifier into words.
///
/// `_`, `-` and whitespace separate words. A lower-to-upper transition starts
/// a new word, and so does the last capital of an acronym followed by a
/// lowercase letter (`HTTPServer` → `HTTP`, `Server`). Digits stay attached
/// to the word they follow.
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
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

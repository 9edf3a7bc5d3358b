//! Free-text to canonical name resolution.
//!
//! The same procedure serves interests and schools; only the table differs. Resolution
//! runs in strict precedence order:
//! 1. exact match of the trimmed, lowercased input
//! 2. exact match of the cleaned input (leading article and institutional suffix removed)
//! 3. partial match against cleaned table keys, first key in table order wins
//! 4. title-cased input as its own canonical form

use super::table::CanonicalTable;
use regex::Regex;
use std::sync::LazyLock;

/// Partial matches require both sides to be at least this long after cleaning.
const MIN_PARTIAL_MATCH_LENGTH: usize = 3;

static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(the|a)\s+").expect("valid article pattern"));
static TRAILING_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(university|college|uni|u)$").expect("valid suffix pattern")
});
static INTERIOR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(university|college|uni|u)\s+").expect("valid suffix pattern")
});

/// Resolves free-text strings against one [`CanonicalTable`].
///
/// Cleaned forms of the table keys are computed once at construction; the normalizer
/// is immutable afterwards, so identical inputs always produce identical output.
#[derive(Debug, Clone)]
pub struct Normalizer {
    table: CanonicalTable,
    cleaned_keys: Vec<String>,
}

impl Normalizer {
    pub fn new(table: CanonicalTable) -> Self {
        let cleaned_keys = table.iter().map(|(key, _)| clean(key)).collect();
        Self {
            table,
            cleaned_keys,
        }
    }

    /// Normalizer over the built-in interest table.
    pub fn interests() -> Self {
        Self::new(CanonicalTable::interests())
    }

    /// Normalizer over the built-in school table.
    pub fn schools() -> Self {
        Self::new(CanonicalTable::schools())
    }

    pub fn table(&self) -> &CanonicalTable {
        &self.table
    }

    /// Resolve `raw` to its canonical name. Blank input yields an empty string, which
    /// callers treat as "no tag".
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let lowered = trimmed.to_lowercase();
        if let Some(canonical) = self.table.get(&lowered) {
            return canonical.to_string();
        }

        let cleaned = clean(&lowered);
        if let Some(canonical) = self.table.get(&cleaned) {
            return canonical.to_string();
        }

        if let Some(canonical) = self.partial_match(&lowered, &cleaned) {
            tracing::trace!("Partial match '{}' -> '{}'", raw, canonical);
            return canonical.to_string();
        }

        title_case(trimmed)
    }

    /// Like [`normalize`](Self::normalize) but maps absent and blank input to `None`.
    pub fn normalize_opt(&self, raw: Option<&str>) -> Option<String> {
        raw.map(|value| self.normalize(value))
            .filter(|canonical| !canonical.is_empty())
    }

    fn partial_match(&self, lowered: &str, cleaned: &str) -> Option<&str> {
        if cleaned.chars().count() < MIN_PARTIAL_MATCH_LENGTH {
            return None;
        }

        self.table
            .iter()
            .zip(&self.cleaned_keys)
            .find(|((key, _), cleaned_key)| {
                cleaned_key.chars().count() >= MIN_PARTIAL_MATCH_LENGTH
                    && (cleaned == cleaned_key.as_str()
                        || lowered == *key
                        || cleaned.contains(cleaned_key.as_str())
                        || cleaned_key.contains(cleaned))
            })
            .map(|((_, canonical), _)| canonical)
    }
}

/// Strip one leading article, one trailing institutional suffix, and one interior
/// institutional suffix from an already lowercased string.
pub(crate) fn clean(lowered: &str) -> String {
    let without_article = LEADING_ARTICLE.replace(lowered, "");
    let without_trailing = TRAILING_SUFFIX.replace(&without_article, "");
    let without_interior = INTERIOR_SUFFIX.replace(&without_trailing, " ");
    without_interior.trim().to_string()
}

/// Capitalize the first character of every space-separated word and lowercase the rest.
///
/// Splits on single spaces so runs of spaces inside the input survive unchanged.
pub fn title_case(input: &str) -> String {
    input
        .trim()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

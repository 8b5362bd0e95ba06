use std::collections::BTreeMap;

/// Language catalog utilities
///
/// The catalog is the set of language codes and display names the backend
/// supports. It is loaded once at startup and never mutated afterwards;
/// a fresh full reload replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageCatalog {
    /// Code to display name, ordered by code for stable selector population
    entries: BTreeMap<String, String>,
}

impl LanguageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a code to name mapping
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Whether the catalog holds no languages (e.g. initialization failed)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of supported languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether a code is a supported language
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Display name for a code, if the catalog carries it
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Display name with fallbacks for codes the catalog does not carry.
    ///
    /// A detected language can arrive as a code outside the loaded catalog
    /// (or before the catalog loaded at all), so fall back to the ISO 639-1
    /// English name via isolang, and finally to the raw code.
    pub fn display_name(&self, code: &str) -> String {
        if let Some(name) = self.name_of(code) {
            return name.to_string();
        }
        if let Some(lang) = isolang::Language::from_639_1(code) {
            return lang.to_name().to_string();
        }
        code.to_string()
    }

    /// Iterate over (code, name) pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

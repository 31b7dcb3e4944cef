//! Locale string tables and locale-derived display text.
//!
//! Menu titles come in two kinds: literal text (e.g. a tag name) and text
//! derived from a locale key (e.g. the "All items" entry). [`LocaleText`]
//! keeps both the key and the last resolved text, so a locale change can
//! recompute every derived title while leaving literals untouched.
//!
//! With the `serde` feature enabled, string tables can be loaded from RON
//! files:
//!
//! ```ron
//! {
//!     "menuAllItems": "all items",
//!     "menuTrash": "trash",
//! }
//! ```

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

#[cfg(feature = "serde")]
use std::path::Path;

/// Display text that is either literal or derived from a locale key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleText {
    /// The locale key this text derives from, if any.
    pub key: Option<SmolStr>,
    /// The current display text.
    pub text: String,
}

impl LocaleText {
    /// Creates literal text that no locale change will touch.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
        }
    }

    /// Creates locale-derived text.
    ///
    /// Until the first rebind the display text is the raw key, which is also
    /// the degraded rendering when the key is missing from the table.
    #[must_use]
    pub fn localized(key: impl Into<SmolStr>) -> Self {
        let key = key.into();
        Self {
            text: key.to_string(),
            key: Some(key),
        }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A locale string table mapping keys to translated strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    strings: FxHashMap<SmolStr, String>,
}

impl Locale {
    /// Creates an empty [`Locale`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a [`Locale`] from key/translation pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<SmolStr>,
        V: Into<String>,
    {
        let strings = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { strings }
    }

    /// Inserts or replaces a translation.
    pub fn insert(&mut self, key: impl Into<SmolStr>, value: impl Into<String>) {
        let _ = self.strings.insert(key.into(), value.into());
    }

    /// Looks up the translation for a key.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Looks up the translation for a key, degrading to the raw key.
    ///
    /// A missing key is logged but never an error: the UI must stay usable
    /// with whatever strings exist.
    #[must_use]
    pub fn display<'a>(&'a self, key: &'a str) -> &'a str {
        match self.resolve(key) {
            Some(text) => text,
            None => {
                log::warn!("missing locale string for key `{key}`");
                key
            }
        }
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Capitalizes the first letter of a string, leaving the rest untouched.
///
/// This is the transform applied to locale-derived menu titles.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Error type for locale table loading.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("locale file not found: {0}")]
    NotFound(String),
    /// Failed to read the file.
    #[error("failed to read locale file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the table.
    #[error("failed to parse locale file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Loads a locale string table from a RON file.
///
/// The file holds a single map from locale keys to translated strings.
#[cfg(feature = "serde")]
pub fn load_locale_from_file(path: impl AsRef<Path>) -> Result<Locale, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let strings = ron::from_str::<FxHashMap<SmolStr, String>>(&content)?;

    Ok(Locale { strings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("all items"), "All items");
        assert_eq!(capitalize_first("Trash"), "Trash");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("émile"), "Émile");
    }

    #[test]
    fn test_display_falls_back_to_key() {
        let locale = Locale::from_pairs([("menuTrash", "trash")]);
        assert_eq!(locale.display("menuTrash"), "trash");
        assert_eq!(locale.display("menuUnknown"), "menuUnknown");
    }

    #[test]
    fn test_localized_text_starts_as_key() {
        let text = LocaleText::localized("menuAllItems");
        assert_eq!(text.as_str(), "menuAllItems");
        assert!(text.key.is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_ron_table() {
        let table = r#"{ "menuAllItems": "all items", "tags": "tags" }"#;
        let strings = ron::from_str::<FxHashMap<SmolStr, String>>(table)
            .expect("table should parse");
        assert_eq!(strings.get("menuAllItems").map(String::as_str), Some("all items"));
    }
}

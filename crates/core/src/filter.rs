//! Filter payload values.

use smol_str::SmolStr;

/// The value half of a filter criterion.
///
/// Selections in the filter tree translate into a `set-filter` command
/// carrying a single `key: value` pair. Only two value shapes occur in
/// practice, a boolean flag (`trash: true`) and a name (`color: "red"`,
/// `tag: "work"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FilterValue {
    /// A boolean flag, e.g. `trash: true`.
    Flag(bool),
    /// A named value, e.g. `color: "red"` or `tag: "work"`.
    Text(SmolStr),
}

impl FilterValue {
    /// Creates a [`FilterValue::Text`] from anything string-like.
    #[must_use]
    pub fn text(value: impl Into<SmolStr>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the text of a [`FilterValue::Text`], if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag(_) => None,
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_impls() {
        assert_eq!(FilterValue::from(true), FilterValue::Flag(true));
        assert_eq!(FilterValue::from("red"), FilterValue::text("red"));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FilterValue::text("red").as_text(), Some("red"));
        assert_eq!(FilterValue::Flag(true).as_text(), None);
    }
}

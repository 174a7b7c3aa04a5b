//! Caller-supplied variant selections.

use indexmap::IndexMap;

use crate::schema::{OptionKey, Tokens};

/// The reserved selection name carrying extra tokens.
pub const EXTRA_CLASSES: &str = "extra_classes";

/// A single selection value: an option key, or nil.
///
/// Nil defers to the variant's default, or to nothing when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionValue(Option<OptionKey>);

impl SelectionValue {
    /// The nil selection.
    pub fn unset() -> Self {
        Self(None)
    }

    /// The selected option key, or `None` for nil.
    pub fn key(&self) -> Option<&OptionKey> {
        self.0.as_ref()
    }

    /// Consumes the value, returning the option key.
    pub fn into_key(self) -> Option<OptionKey> {
        self.0
    }

    /// Returns true for nil.
    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }
}

impl From<OptionKey> for SelectionValue {
    fn from(key: OptionKey) -> Self {
        Self(Some(key))
    }
}

impl From<bool> for SelectionValue {
    fn from(value: bool) -> Self {
        Self(Some(OptionKey::Bool(value)))
    }
}

impl From<&str> for SelectionValue {
    fn from(name: &str) -> Self {
        Self(Some(OptionKey::from(name)))
    }
}

impl From<String> for SelectionValue {
    fn from(name: String) -> Self {
        Self(Some(OptionKey::Name(name)))
    }
}

impl<T: Into<SelectionValue>> From<Option<T>> for SelectionValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(SelectionValue::unset)
    }
}

/// Variant selections for one resolution call.
///
/// Selections keep insertion order; setting a variant twice replaces the
/// value in place. The reserved name [`EXTRA_CLASSES`] is kept apart and
/// appended verbatim after all variant tokens.
///
/// # Example
///
/// ```rust
/// use varistyle::Selections;
///
/// let selections = Selections::new()
///     .set("color", "danger")
///     .set("outline", true)
///     .unset("size")
///     .extra_classes("disabled:hidden");
///
/// assert_eq!(selections.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub(crate) entries: IndexMap<String, SelectionValue>,
    pub(crate) extra_classes: Option<Tokens>,
}

impl Selections {
    /// Creates an empty selection map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an option for a variant.
    ///
    /// Selecting [`EXTRA_CLASSES`] with a named value stores that name as an
    /// extra token instead.
    pub fn set(mut self, variant: impl Into<String>, value: impl Into<SelectionValue>) -> Self {
        self.insert(variant, value);
        self
    }

    /// Marks a variant as nil, deferring to its default.
    pub fn unset(self, variant: impl Into<String>) -> Self {
        self.set(variant, SelectionValue::unset())
    }

    /// Sets the extra tokens appended after all variant tokens.
    pub fn extra_classes(mut self, tokens: impl Into<Tokens>) -> Self {
        self.extra_classes = Some(tokens.into());
        self
    }

    /// Non-consuming form of [`Selections::set`].
    pub fn insert(&mut self, variant: impl Into<String>, value: impl Into<SelectionValue>) {
        let variant = variant.into();
        let value = value.into();

        if variant == EXTRA_CLASSES {
            self.extra_classes = value.into_key().map(|key| Tokens::from(key.to_string()));
        } else {
            self.entries.insert(variant, value);
        }
    }

    /// Returns the value selected for a variant, if any entry exists.
    pub fn get(&self, variant: &str) -> Option<&SelectionValue> {
        self.entries.get(variant)
    }

    /// Extra tokens set through [`EXTRA_CLASSES`], if any.
    pub fn extra(&self) -> Option<&Tokens> {
        self.extra_classes.as_ref()
    }

    /// Number of variant entries, nil entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no variant entry exists.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.extra_classes.is_none()
    }
}

impl<K, V> FromIterator<(K, V)> for Selections
where
    K: Into<String>,
    V: Into<SelectionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selections = Selections::new();
        for (variant, value) in iter {
            selections.insert(variant, value);
        }
        selections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_value_conversions() {
        assert_eq!(
            SelectionValue::from("danger").key(),
            Some(&OptionKey::from("danger"))
        );
        assert_eq!(SelectionValue::from(false).key(), Some(&OptionKey::Bool(false)));
        assert!(SelectionValue::from(None::<&str>).is_unset());
        assert_eq!(
            SelectionValue::from(Some(true)).key(),
            Some(&OptionKey::Bool(true))
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let selections = Selections::new()
            .set("color", "primary")
            .set("size", "md")
            .set("color", "danger");

        let order: Vec<&str> = selections.entries.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["color", "size"]);
        assert_eq!(selections.get("color"), Some(&SelectionValue::from("danger")));
    }

    #[test]
    fn test_unset_records_nil() {
        let selections = Selections::new().unset("color");
        assert!(selections.get("color").unwrap().is_unset());
        assert_eq!(selections.len(), 1);
    }

    #[test]
    fn test_extra_classes_routed_from_set() {
        let selections = Selections::new().set(EXTRA_CLASSES, "disabled:hidden");
        assert!(selections.get(EXTRA_CLASSES).is_none());
        assert_eq!(
            selections.extra().unwrap().as_slice(),
            ["disabled:hidden"]
        );
    }

    #[test]
    fn test_from_iterator() {
        let selections: Selections = vec![("color", "danger"), ("size", "xs")]
            .into_iter()
            .collect();
        assert_eq!(selections.len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(Selections::new().is_empty());
        assert!(!Selections::new().extra_classes("x").is_empty());
    }
}

//! The per-owner schema store.

use indexmap::IndexMap;

use super::value::{OptionKey, Tokens};

/// Options declared for one variant, in declaration order.
pub type OptionMap = IndexMap<OptionKey, Tokens>;

/// Base tokens, variants and defaults recorded for one owner type.
///
/// The store is a plain container: nothing is validated when it is written.
/// A default naming a missing option, for instance, only fails when a
/// resolution actually needs it.
///
/// Schemas are normally populated through [`StyleSchema::build`] and then
/// only read; see [`StyleBuilder`](super::StyleBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSchema {
    pub(crate) base: Vec<String>,
    pub(crate) variants: IndexMap<String, OptionMap>,
    pub(crate) defaults: IndexMap<String, OptionKey>,
}

impl StyleSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all three tables.
    pub fn reset(&mut self) {
        self.base.clear();
        self.variants.clear();
        self.defaults.clear();
    }

    /// Appends tokens to the base list, in call order.
    pub fn append_base(&mut self, tokens: impl Into<Tokens>) {
        let tokens: Tokens = tokens.into();
        self.base.extend(tokens);
    }

    /// Declares a variant and returns its option map.
    ///
    /// Declaring an existing variant again returns the map already recorded.
    pub fn declare_variant(&mut self, name: impl Into<String>) -> &mut OptionMap {
        self.variants.entry(name.into()).or_default()
    }

    /// Records the tokens for one option, overwriting a previous definition.
    pub fn set_option(
        &mut self,
        variant: impl Into<String>,
        key: impl Into<OptionKey>,
        tokens: impl Into<Tokens>,
    ) {
        self.declare_variant(variant)
            .insert(key.into(), tokens.into());
    }

    /// Records the default option for a variant. Last write wins.
    pub fn set_default(&mut self, variant: impl Into<String>, key: impl Into<OptionKey>) {
        self.defaults.insert(variant.into(), key.into());
    }

    /// Base tokens, in call order.
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Variant table, in declaration order.
    pub fn variants(&self) -> &IndexMap<String, OptionMap> {
        &self.variants
    }

    /// Default option per variant, in declaration order.
    pub fn defaults(&self) -> &IndexMap<String, OptionKey> {
        &self.defaults
    }

    /// Returns the options declared for a variant.
    pub fn options(&self, variant: &str) -> Option<&OptionMap> {
        self.variants.get(variant)
    }

    /// Returns the declared variant names, in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.variants.is_empty() && self.defaults.is_empty()
    }
}

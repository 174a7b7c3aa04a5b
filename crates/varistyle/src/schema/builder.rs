//! Fluent builder API for populating a [`StyleSchema`].
//!
//! A schema is defined by a block with three directives:
//!
//! - [`base`](StyleBuilder::base): tokens always emitted first
//! - [`variants`](StyleBuilder::variants): named variants and their options
//! - [`defaults`](StyleBuilder::defaults): option used when a variant is not selected
//!
//! Variant and option names are open-ended: any name passed to
//! [`VariantsBuilder::variant`] or [`OptionsBuilder::option`] becomes a new
//! entry. The top-level directive set is closed; see [`Directive`].
//!
//! # Example
//!
//! ```rust
//! use varistyle::{Selections, StyleSchema};
//!
//! let schema = StyleSchema::build(|s| {
//!     s.base("btn");
//!     s.variants(|v| {
//!         v.variant("color", |o| {
//!             o.option("primary", "btn-primary");
//!             o.option("danger", "btn-danger");
//!         });
//!         v.variant("outline", |o| {
//!             o.yes("btn-outline");
//!         });
//!     });
//!     s.default("color", "primary");
//! });
//!
//! let classes = schema.resolve(&Selections::new().set("outline", true)).unwrap();
//! assert_eq!(classes, "btn btn-primary btn-outline");
//! ```

use std::fmt;
use std::str::FromStr;

use super::store::{OptionMap, StyleSchema};
use super::value::{OptionKey, Tokens};
use crate::error::SchemaError;

/// The closed set of top-level schema directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Base,
    Variants,
    Defaults,
}

impl Directive {
    /// Every directive, in the order they are listed in error messages.
    pub const ALL: [Directive; 3] = [Directive::Base, Directive::Variants, Directive::Defaults];

    /// The directive's name as written in a schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Directive::Base => "base",
            Directive::Variants => "variants",
            Directive::Defaults => "defaults",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Directive {
    type Err = SchemaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Directive::ALL
            .into_iter()
            .find(|directive| directive.as_str() == name)
            .ok_or_else(|| SchemaError::UnrecognizedDirective {
                name: name.to_string(),
            })
    }
}

impl StyleSchema {
    /// Builds a new schema from a definition block.
    pub fn build<F>(block: F) -> Self
    where
        F: FnOnce(&mut StyleBuilder<'_>),
    {
        let mut schema = StyleSchema::new();
        schema.define(block);
        schema
    }

    /// Re-initializes this schema and runs a definition block against it.
    ///
    /// Defining twice replaces the earlier definition entirely.
    pub fn define<F>(&mut self, block: F)
    where
        F: FnOnce(&mut StyleBuilder<'_>),
    {
        self.reset();
        block(&mut StyleBuilder { schema: self });

        tracing::debug!(
            base = self.base.len(),
            variants = self.variants.len(),
            defaults = self.defaults.len(),
            "Defined style schema"
        );
    }
}

/// Top-level definition context.
pub struct StyleBuilder<'a> {
    schema: &'a mut StyleSchema,
}

impl<'a> StyleBuilder<'a> {
    /// Appends tokens to the base list.
    pub fn base(&mut self, tokens: impl Into<Tokens>) -> &mut Self {
        self.schema.append_base(tokens);
        self
    }

    /// Enters the variant declaration context.
    pub fn variants<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut VariantsBuilder<'_>),
    {
        block(&mut VariantsBuilder {
            schema: self.schema,
        });
        self
    }

    /// Merges `(variant, option)` pairs into the defaults.
    pub fn defaults<I, V, K>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (V, K)>,
        V: Into<String>,
        K: Into<OptionKey>,
    {
        for (variant, key) in pairs {
            self.schema.set_default(variant, key.into().normalize());
        }
        self
    }

    /// Sets the default option for a single variant.
    pub fn default(&mut self, variant: impl Into<String>, key: impl Into<OptionKey>) -> &mut Self {
        self.schema.set_default(variant, key.into().normalize());
        self
    }
}

/// Variant declaration context. Every name passed in becomes a variant.
pub struct VariantsBuilder<'a> {
    schema: &'a mut StyleSchema,
}

impl<'a> VariantsBuilder<'a> {
    /// Declares a variant and runs its option block.
    pub fn variant<F>(&mut self, name: impl Into<String>, block: F) -> &mut Self
    where
        F: FnOnce(&mut OptionsBuilder<'_>),
    {
        let options = self.schema.declare_variant(name);
        block(&mut OptionsBuilder { options });
        self
    }
}

/// Option declaration context for one variant.
pub struct OptionsBuilder<'a> {
    options: &'a mut OptionMap,
}

impl<'a> OptionsBuilder<'a> {
    /// Declares an option with its tokens.
    ///
    /// The names `true` and `false` are the boolean keys. The names `yes`
    /// and `no` are recorded under their own name and under the boolean key
    /// `true` or `false`.
    pub fn option(&mut self, key: impl Into<OptionKey>, tokens: impl Into<Tokens>) -> &mut Self {
        let key = key.into().normalize();
        let tokens = tokens.into();

        if let OptionKey::Name(name) = &key {
            if let Some(alias) = OptionKey::alias_of(name) {
                self.options.insert(alias, tokens.clone());
            }
        }
        self.options.insert(key, tokens);
        self
    }

    /// Declares the "on" state of a boolean variant.
    pub fn yes(&mut self, tokens: impl Into<Tokens>) -> &mut Self {
        self.option("yes", tokens)
    }

    /// Declares the "off" state of a boolean variant.
    pub fn no(&mut self, tokens: impl Into<Tokens>) -> &mut Self {
        self.option("no", tokens)
    }
}

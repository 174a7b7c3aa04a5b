//! Named schema registry.
//!
//! [`StyleRegistry`] maps owner names (e.g. `"button"`) to their schemas. It
//! is the explicit alternative to [`Styled`](crate::Styled) for hosts that
//! look schemas up by name at render time, such as templates.
//!
//! Schemas are added from definition blocks ([`StyleRegistry::define`]),
//! prebuilt values ([`StyleRegistry::insert`]) or document strings
//! ([`StyleRegistry::add_yaml`], [`StyleRegistry::add_json`]). Where the
//! document text comes from is up to the host.
//!
//! # Example
//!
//! ```rust
//! use varistyle::{Selections, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//! registry.define("button", |s| {
//!     s.base("btn");
//!     s.variants(|v| {
//!         v.variant("color", |o| {
//!             o.option("danger", "btn-danger");
//!         });
//!     });
//! });
//!
//! let classes = registry
//!     .resolve("button", &Selections::new().set("color", "danger"))
//!     .unwrap();
//! assert_eq!(classes, "btn btn-danger");
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::error::{SchemaError, VariantNotFound};
use crate::schema::{StyleBuilder, StyleSchema};
use crate::selection::Selections;

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No schema registered under this name.
    #[error("Schema not found: \"{name}\"")]
    NotFound { name: String },

    /// A schema document is not a valid schema.
    #[error("Invalid schema \"{name}\": {source}")]
    Schema { name: String, source: SchemaError },

    #[error(transparent)]
    Resolve(#[from] VariantNotFound),
}

/// Registry of schemas keyed by owner name.
///
/// Resolution only reads the registry, so a registry shared behind an `Arc`
/// can be resolved against from many threads once populated.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    schemas: HashMap<String, StyleSchema>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines the schema for `name`, replacing any previous one.
    pub fn define<F>(&mut self, name: impl Into<String>, block: F) -> &StyleSchema
    where
        F: FnOnce(&mut StyleBuilder<'_>),
    {
        let name = name.into();
        tracing::debug!(name = %name, "Defining style schema");

        let schema = self.schemas.entry(name).or_default();
        schema.define(block);
        schema
    }

    /// Registers a prebuilt schema, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, schema: StyleSchema) -> Option<StyleSchema> {
        self.schemas.insert(name.into(), schema)
    }

    /// Parses a YAML schema document and registers it under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Schema`] if the document is not a valid
    /// schema. The registry is left unchanged in that case.
    pub fn add_yaml(&mut self, name: impl Into<String>, source: &str) -> Result<(), RegistryError> {
        let name = name.into();
        let parsed = StyleSchema::from_yaml(source);
        self.add_parsed(name, parsed)
    }

    /// Parses a JSON schema document and registers it under `name`.
    ///
    /// # Errors
    ///
    /// Same as [`StyleRegistry::add_yaml`].
    pub fn add_json(&mut self, name: impl Into<String>, source: &str) -> Result<(), RegistryError> {
        let name = name.into();
        let parsed = StyleSchema::from_json(source);
        self.add_parsed(name, parsed)
    }

    fn add_parsed(
        &mut self,
        name: String,
        parsed: Result<StyleSchema, SchemaError>,
    ) -> Result<(), RegistryError> {
        let schema = parsed.map_err(|source| RegistryError::Schema {
            name: name.clone(),
            source,
        })?;
        tracing::debug!(name = %name, "Loaded style schema document");
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Looks up a schema by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&StyleSchema, RegistryError> {
        self.schemas.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    /// Resolves selections against the schema registered under `name`.
    pub fn resolve(&self, name: &str, selections: &Selections) -> Result<String, RegistryError> {
        Ok(self.get(name)?.resolve(selections)?)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(|s| s.as_str())
    }

    /// Removes every schema.
    pub fn clear(&mut self) {
        self.schemas.clear();
    }
}

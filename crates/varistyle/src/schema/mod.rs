//! Style schemas: base tokens, variants and defaults.
//!
//! - [`StyleSchema`]: the store holding the three tables for one owner
//! - [`StyleBuilder`]: fluent definition API, with [`VariantsBuilder`] and
//!   [`OptionsBuilder`] for the nested variant and option blocks
//! - [`Directive`]: the closed set of top-level directives
//! - [`Tokens`] and [`OptionKey`]: token lists and option keys
//!
//! Schemas can also be loaded from YAML or JSON documents with
//! [`StyleSchema::from_yaml`] and [`StyleSchema::from_json`].

mod builder;
mod document;
mod store;
mod value;

pub use builder::{Directive, OptionsBuilder, StyleBuilder, VariantsBuilder};
pub use store::{OptionMap, StyleSchema};
pub use value::{OptionKey, Tokens};

//! # Varistyle - Declarative Style Variants
//!
//! Varistyle resolves a declarative style schema into a single space-joined
//! string of style tokens, typically CSS class names. A schema has:
//!
//! - **base** tokens, always emitted first
//! - **variants**, named axes of choice (`color`, `size`) whose options map to
//!   one or more tokens
//! - **defaults**, the option used when a variant is not selected
//!
//! At render time, [`Selections`] pick an option per variant and the resolver
//! produces the token string. Unknown variants and options fail with
//! [`VariantNotFound`].
//!
//! ## Quick Start
//!
//! ```rust
//! use varistyle::{Selections, StyleSchema};
//!
//! let button = StyleSchema::build(|s| {
//!     s.base("btn");
//!     s.variants(|v| {
//!         v.variant("color", |o| {
//!             o.option("primary", "btn-primary");
//!             o.option("danger", "btn-danger");
//!         });
//!         v.variant("size", |o| {
//!             o.option("xs", "btn-xs");
//!             o.option("md", "btn-md");
//!         });
//!     });
//!     s.defaults([("color", "primary"), ("size", "md")]);
//! });
//!
//! let classes = button
//!     .resolve(&Selections::new().set("color", "danger"))
//!     .unwrap();
//! assert_eq!(classes, "btn btn-danger btn-md");
//! ```
//!
//! ## Boolean Variants
//!
//! Options named `yes` and `no` also register the boolean keys `true` and
//! `false`, so callers can pass native booleans. Declaring only `yes` makes
//! `false` resolve to nothing:
//!
//! ```rust
//! use varistyle::{Selections, StyleSchema};
//!
//! let schema = StyleSchema::build(|s| {
//!     s.variants(|v| {
//!         v.variant("outline", |o| {
//!             o.yes("btn-outline");
//!         });
//!         v.variant("full", |o| {
//!             o.yes("btn-full");
//!             o.no("btn-fit");
//!         });
//!     });
//! });
//!
//! let selections = Selections::new().set("outline", true).set("full", false);
//! assert_eq!(schema.resolve(&selections).unwrap(), "btn-outline btn-fit");
//! ```
//!
//! ## Attaching Schemas
//!
//! - [`Styled`] + [`styled!`]: one schema per Rust type, built once on first use
//! - [`StyleRegistry`]: schemas keyed by name, defined in code or loaded from
//!   YAML/JSON documents
//! - [`Renderer`] / [`register_functions`]: a `variants(...)` function for
//!   MiniJinja templates
//!
//! With the `macros` feature, the `style!` macro offers a nested DSL that
//! compiles to builder calls.

mod error;
mod registry;
mod render;
mod resolve;
mod schema;
mod selection;
mod styled;

pub use error::{SchemaError, VariantNotFound};
pub use registry::{RegistryError, StyleRegistry};
pub use render::{register_functions, Renderer};
pub use schema::{
    Directive, OptionKey, OptionMap, OptionsBuilder, StyleBuilder, StyleSchema, Tokens,
    VariantsBuilder,
};
pub use selection::{SelectionValue, Selections, EXTRA_CLASSES};
pub use styled::Styled;

#[cfg(feature = "macros")]
pub use varistyle_macros::style;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

//! Schema definition and resolution errors.

use thiserror::Error;

/// The directives accepted at the top level of a schema, for error messages.
pub(crate) const VALID_DIRECTIVES: &str = "'base', 'variants' and 'defaults'";

/// Error raised while defining a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A top-level directive other than `base`, `variants` or `defaults`.
    #[error("unrecognized schema directive '{name}'. The available directives are: {}", VALID_DIRECTIVES)]
    UnrecognizedDirective { name: String },

    /// A directive body has the wrong shape (e.g. `base` given a mapping).
    #[error("invalid '{directive}' definition: {message}")]
    InvalidDefinition { directive: String, message: String },

    /// The schema document could not be parsed.
    #[error("failed to parse schema document: {0}")]
    Parse(String),
}

/// Error raised when a selection cannot be resolved against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantNotFound {
    /// The selected variant was never declared.
    #[error("Variant `{variant}` doesn't exist. Available variants are: {}", .available.join(", "))]
    UnknownVariant {
        variant: String,
        available: Vec<String>,
    },

    /// The variant exists but has no such option.
    #[error("Option `{option}` for `{variant}` variant doesn't exist. Valid options are: {}", .available.join(", "))]
    UnknownOption {
        variant: String,
        option: String,
        available: Vec<String>,
    },
}

impl VariantNotFound {
    /// Returns the name of the variant the failing selection referenced.
    pub fn variant(&self) -> &str {
        match self {
            VariantNotFound::UnknownVariant { variant, .. } => variant,
            VariantNotFound::UnknownOption { variant, .. } => variant,
        }
    }
}

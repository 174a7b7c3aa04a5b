//! Schema documents in YAML or JSON.
//!
//! A document is a mapping whose top-level keys are directives:
//!
//! ```yaml
//! base: btn
//! variants:
//!   color:
//!     primary: btn-primary
//!     danger: [btn-danger, text-white]
//!   outline:
//!     yes: btn-outline
//! defaults:
//!   color: primary
//!   outline: false
//! ```
//!
//! Any other top-level key is rejected with
//! [`SchemaError::UnrecognizedDirective`]. Option names `true`/`false` (and
//! the `yes`/`no` aliases) address the boolean keys. Integer keys such as
//! `2:` are option names.

use std::fmt;

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

use super::builder::Directive;
use super::store::StyleSchema;
use super::value::{OptionKey, Tokens};
use crate::error::SchemaError;

/// A mapping key. YAML allows bare booleans and integers as keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
enum Key {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Key {
    fn into_option_key(self) -> OptionKey {
        match self {
            Key::Bool(value) => OptionKey::Bool(value),
            Key::Int(value) => OptionKey::Name(value.to_string()),
            Key::Text(name) => OptionKey::Name(name).normalize(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(value) => write!(f, "{}", value),
            Key::Int(value) => write!(f, "{}", value),
            Key::Text(name) => f.write_str(name),
        }
    }
}

// `Other` catches any shape the loader does not understand (numbers as
// tokens, float keys, nested lists) so the error can name the directive.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Node {
    Null,
    Bool(bool),
    Text(String),
    List(Vec<String>),
    Map(IndexMap<Key, Node>),
    Other(IgnoredAny),
}

impl Node {
    fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "a boolean",
            Node::Text(_) => "a string",
            Node::List(_) => "a list",
            Node::Map(_) => "a mapping",
            Node::Other(_) => "an unsupported value",
        }
    }
}

type Document = IndexMap<Key, Node>;

type VariantDecl = (String, Vec<(OptionKey, Tokens)>);

impl StyleSchema {
    /// Parses a schema from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] for invalid YAML,
    /// [`SchemaError::UnrecognizedDirective`] for unknown top-level keys and
    /// [`SchemaError::InvalidDefinition`] for malformed directive bodies.
    pub fn from_yaml(source: &str) -> Result<Self, SchemaError> {
        let document: Document =
            serde_yaml::from_str(source).map_err(|e| SchemaError::Parse(e.to_string()))?;
        from_document(document)
    }

    /// Parses a schema from a JSON document.
    ///
    /// # Errors
    ///
    /// Same as [`StyleSchema::from_yaml`].
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let document: Document =
            serde_json::from_str(source).map_err(|e| SchemaError::Parse(e.to_string()))?;
        from_document(document)
    }
}

fn from_document(document: Document) -> Result<StyleSchema, SchemaError> {
    let mut base = Vec::new();
    let mut variants: Vec<VariantDecl> = Vec::new();
    let mut defaults: Vec<(String, OptionKey)> = Vec::new();

    for (key, node) in document {
        match key.to_string().parse::<Directive>()? {
            Directive::Base => base.push(tokens_of(Directive::Base, node)?),
            Directive::Variants => {
                for (name, options) in mapping_of(Directive::Variants, node)? {
                    let mut decl = Vec::new();
                    for (option, tokens) in mapping_of(Directive::Variants, options)? {
                        decl.push((option.into_option_key(), tokens_of(Directive::Variants, tokens)?));
                    }
                    variants.push((name.to_string(), decl));
                }
            }
            Directive::Defaults => {
                for (variant, value) in mapping_of(Directive::Defaults, node)? {
                    let key = match value {
                        Node::Bool(value) => OptionKey::Bool(value),
                        Node::Text(name) => OptionKey::Name(name).normalize(),
                        other => return Err(invalid(Directive::Defaults, "an option name or boolean", &other)),
                    };
                    defaults.push((variant.to_string(), key));
                }
            }
        }
    }

    Ok(StyleSchema::build(|s| {
        for tokens in base {
            s.base(tokens);
        }
        s.variants(|v| {
            for (name, options) in variants {
                v.variant(name, |o| {
                    for (key, tokens) in options {
                        o.option(key, tokens);
                    }
                });
            }
        });
        s.defaults(defaults);
    }))
}

fn tokens_of(directive: Directive, node: Node) -> Result<Tokens, SchemaError> {
    match node {
        Node::Null => Ok(Tokens::new()),
        Node::Text(token) => Ok(Tokens::from(token)),
        Node::List(tokens) => Ok(Tokens::from(tokens)),
        other => Err(invalid(directive, "a token or list of tokens", &other)),
    }
}

fn mapping_of(directive: Directive, node: Node) -> Result<IndexMap<Key, Node>, SchemaError> {
    match node {
        Node::Map(map) => Ok(map),
        Node::Null => Ok(IndexMap::new()),
        other => Err(invalid(directive, "a mapping", &other)),
    }
}

fn invalid(directive: Directive, expected: &str, found: &Node) -> SchemaError {
    SchemaError::InvalidDefinition {
        directive: directive.to_string(),
        message: format!("expected {}, found {}", expected, found.kind()),
    }
}

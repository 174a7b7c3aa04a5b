//! Token and option key values.

use std::fmt;

/// One or more opaque style tokens (e.g. CSS class names).
///
/// Schema authors may attach a single token or several to a base directive,
/// an option, or the `extra_classes` selection. The content of each token is
/// never inspected.
///
/// # Example
///
/// ```rust
/// use varistyle::Tokens;
///
/// let one: Tokens = "btn".into();
/// let many: Tokens = ["btn", "btn-lg"].into();
///
/// assert_eq!(one.as_slice(), ["btn"]);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Creates an empty token list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the tokens as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tokens, empty ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the list, returning the owned tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Tokens {
    fn from(token: &str) -> Self {
        Self(vec![token.to_string()])
    }
}

impl From<String> for Tokens {
    fn from(token: String) -> Self {
        Self(vec![token])
    }
}

impl From<&String> for Tokens {
    fn from(token: &String) -> Self {
        Self(vec![token.clone()])
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl From<Vec<&str>> for Tokens {
    fn from(tokens: Vec<&str>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<&[&str]> for Tokens {
    fn from(tokens: &[&str]) -> Self {
        tokens.iter().copied().collect()
    }
}

impl From<&[String]> for Tokens {
    fn from(tokens: &[String]) -> Self {
        Self(tokens.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Tokens {
    fn from(tokens: [&str; N]) -> Self {
        tokens.into_iter().collect()
    }
}

impl<const N: usize> From<[String; N]> for Tokens {
    fn from(tokens: [String; N]) -> Self {
        Self(tokens.into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Tokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Tokens {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The key of an option within a variant.
///
/// Options are either arbitrary names or one of the two boolean keys. The
/// boolean keys are what callers select with native `true`/`false` values;
/// schema authors reach them through the `yes`/`no` aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Bool(bool),
    Name(String),
}

impl OptionKey {
    /// Returns the boolean key aliased by an author-facing option name.
    ///
    /// `yes` aliases `true` and `no` aliases `false`.
    pub fn alias_of(name: &str) -> Option<OptionKey> {
        match name {
            "yes" => Some(OptionKey::Bool(true)),
            "no" => Some(OptionKey::Bool(false)),
            _ => None,
        }
    }

    /// Returns true for the `false` boolean key.
    pub fn is_false(&self) -> bool {
        matches!(self, OptionKey::Bool(false))
    }

    /// Maps the names `true` and `false` onto the boolean keys.
    ///
    /// Schema authors writing text (documents, `style!`, `&str` keys in the
    /// builder) reach the boolean keys this way.
    pub fn normalize(self) -> OptionKey {
        match self {
            OptionKey::Name(name) if name == "true" => OptionKey::Bool(true),
            OptionKey::Name(name) if name == "false" => OptionKey::Bool(false),
            key => key,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::Bool(value) => write!(f, "{}", value),
            OptionKey::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<bool> for OptionKey {
    fn from(value: bool) -> Self {
        OptionKey::Bool(value)
    }
}

impl From<&str> for OptionKey {
    fn from(name: &str) -> Self {
        OptionKey::Name(name.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(name: String) -> Self {
        OptionKey::Name(name)
    }
}

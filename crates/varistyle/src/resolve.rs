//! Resolution of selections into a token string.
//!
//! Resolution runs in a fixed order:
//!
//! 1. `extra_classes` is held aside
//! 2. nil selections are dropped
//! 3. defaults are merged in; an explicit selection replaces its default in
//!    place, so defaulted variants come first in declaration order, followed
//!    by the remaining selections in caller order
//! 4. each `(variant, option)` pair is looked up
//! 5. base tokens, variant tokens and extra tokens are concatenated
//! 6. empty tokens are dropped and the rest joined with a single space
//!
//! Selecting `false` for a variant that only declares `true` contributes
//! nothing. An exact `false` entry always wins over that fallback.

use indexmap::IndexMap;

use crate::error::VariantNotFound;
use crate::schema::{OptionKey, StyleSchema};
use crate::selection::Selections;

impl StyleSchema {
    /// Resolves selections into a space-joined token string.
    ///
    /// # Errors
    ///
    /// Returns [`VariantNotFound`] when a selected or defaulted variant is not
    /// declared, or when its option is not declared and the boolean fallback
    /// does not apply.
    ///
    /// # Example
    ///
    /// ```rust
    /// use varistyle::{Selections, StyleSchema};
    ///
    /// let schema = StyleSchema::build(|s| {
    ///     s.base("btn");
    ///     s.variants(|v| {
    ///         v.variant("size", |o| {
    ///             o.option("xs", "btn-xs");
    ///             o.option("md", "btn-md");
    ///         });
    ///     });
    ///     s.default("size", "md");
    /// });
    ///
    /// assert_eq!(schema.resolve(&Selections::new()).unwrap(), "btn btn-md");
    /// assert!(schema.resolve(&Selections::new().set("size", "xl")).is_err());
    /// ```
    pub fn resolve(&self, selections: &Selections) -> Result<String, VariantNotFound> {
        Ok(self.resolve_tokens(selections)?.join(" "))
    }

    /// Resolves selections into the ordered list of non-empty tokens.
    pub fn resolve_tokens(&self, selections: &Selections) -> Result<Vec<String>, VariantNotFound> {
        let mut merged: IndexMap<&str, &OptionKey> = self
            .defaults
            .iter()
            .map(|(variant, key)| (variant.as_str(), key))
            .collect();

        for (variant, value) in &selections.entries {
            if let Some(key) = value.key() {
                merged.insert(variant.as_str(), key);
            }
        }

        let mut tokens: Vec<String> = self.base.clone();
        for (variant, key) in merged {
            match self.lookup(variant, key) {
                Ok(resolved) => tokens.extend(resolved.iter().cloned()),
                Err(err) => {
                    tracing::debug!(variant, option = %key, error = %err, "Style resolution failed");
                    return Err(err);
                }
            }
        }
        if let Some(extra) = &selections.extra_classes {
            tokens.extend(extra.iter().map(str::to_string));
        }

        tokens.retain(|token| !token.is_empty());
        tracing::trace!(tokens = tokens.len(), "Resolved style tokens");
        Ok(tokens)
    }

    fn lookup(&self, variant: &str, key: &OptionKey) -> Result<&[String], VariantNotFound> {
        let Some(options) = self.variants.get(variant) else {
            return Err(VariantNotFound::UnknownVariant {
                variant: variant.to_string(),
                available: self.variants.keys().cloned().collect(),
            });
        };

        if let Some(tokens) = options.get(key) {
            return Ok(tokens.as_slice());
        }

        // only the "on" state was declared
        if key.is_false() && options.contains_key(&OptionKey::Bool(true)) {
            return Ok(&[]);
        }

        Err(VariantNotFound::UnknownOption {
            variant: variant.to_string(),
            option: key.to_string(),
            available: options.keys().map(ToString::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> StyleSchema {
        StyleSchema::build(|s| {
            s.base("btn");
            s.variants(|v| {
                v.variant("color", |o| {
                    o.option("primary", "btn-primary");
                    o.option("danger", "btn-danger");
                });
                v.variant("size", |o| {
                    o.option("xs", "btn-xs");
                    o.option("md", "btn-md");
                    o.option("lg", "btn-lg");
                });
            });
            s.defaults([("color", "primary"), ("size", "md")]);
        })
    }

    fn toggles() -> StyleSchema {
        StyleSchema::build(|s| {
            s.variants(|v| {
                v.variant("outline", |o| {
                    o.yes("btn-outline");
                });
                v.variant("full", |o| {
                    o.yes("btn-full");
                    o.no("btn-fit");
                });
                v.variant("loading", |o| {
                    o.yes("btn-loading");
                    o.no("btn-normal");
                });
            });
            s.default("loading", false);
        })
    }

    #[test]
    fn test_empty_schema_empty_selections() {
        let schema = StyleSchema::new();
        assert_eq!(schema.resolve(&Selections::new()).unwrap(), "");
    }

    #[test]
    fn test_base_only() {
        let schema = StyleSchema::build(|s| {
            s.base("btn");
        });
        assert_eq!(schema.resolve(&Selections::new()).unwrap(), "btn");
    }

    #[test]
    fn test_variants_without_defaults_follow_selection_order() {
        let schema = StyleSchema::build(|s| {
            s.variants(|v| {
                v.variant("color", |o| {
                    o.option("primary", "btn-primary");
                });
                v.variant("size", |o| {
                    o.option("xs", "btn-xs");
                });
            });
        });

        let selections = Selections::new().set("size", "xs").set("color", "primary");
        assert_eq!(schema.resolve(&selections).unwrap(), "btn-xs btn-primary");
    }

    #[test]
    fn test_defaults_applied() {
        assert_eq!(
            button().resolve(&Selections::new()).unwrap(),
            "btn btn-primary btn-md"
        );
    }

    #[test]
    fn test_explicit_selection_overrides_default() {
        let selections = Selections::new().set("color", "danger");
        assert_eq!(
            button().resolve(&selections).unwrap(),
            "btn btn-danger btn-md"
        );
    }

    #[test]
    fn test_override_keeps_default_position() {
        let selections = Selections::new().set("size", "lg").set("color", "danger");
        assert_eq!(
            button().resolve(&selections).unwrap(),
            "btn btn-danger btn-lg"
        );
    }

    #[test]
    fn test_nil_selections_fall_back_to_defaults() {
        let schema = button();
        let nil = Selections::new().unset("color").unset("size");
        assert_eq!(
            schema.resolve(&nil).unwrap(),
            schema.resolve(&Selections::new()).unwrap()
        );
    }

    #[test]
    fn test_nil_without_default_contributes_nothing() {
        let schema = StyleSchema::build(|s| {
            s.variants(|v| {
                v.variant("color", |o| {
                    o.option("primary", "btn-primary");
                });
            });
        });
        let selections = Selections::new().unset("color").unset("undeclared");
        assert_eq!(schema.resolve(&selections).unwrap(), "");
    }

    #[test]
    fn test_extra_classes_appended_last() {
        let selections = Selections::new()
            .extra_classes(["disabled:hidden", "w-full"])
            .set("color", "danger");
        assert_eq!(
            button().resolve(&selections).unwrap(),
            "btn btn-danger btn-md disabled:hidden w-full"
        );
    }

    #[test]
    fn test_multi_token_option_flattened() {
        let schema = StyleSchema::build(|s| {
            s.variants(|v| {
                v.variant("tone", |o| {
                    o.option("loud", ["font-bold", "uppercase"]);
                });
            });
        });
        let tokens = schema
            .resolve_tokens(&Selections::new().set("tone", "loud"))
            .unwrap();
        assert_eq!(tokens, vec!["font-bold", "uppercase"]);
    }

    #[test]
    fn test_empty_tokens_dropped() {
        let schema = StyleSchema::build(|s| {
            s.base(["", "btn"]);
            s.variants(|v| {
                v.variant("tone", |o| {
                    o.option("plain", "");
                });
            });
        });
        let selections = Selections::new().set("tone", "plain").extra_classes("");
        assert_eq!(schema.resolve(&selections).unwrap(), "btn");
    }

    #[test]
    fn test_boolean_defaults() {
        assert_eq!(toggles().resolve(&Selections::new()).unwrap(), "btn-normal");
    }

    #[test]
    fn test_boolean_selections() {
        let selections = Selections::new().set("outline", true).set("full", false);
        assert_eq!(
            toggles().resolve(&selections).unwrap(),
            "btn-normal btn-outline btn-fit"
        );
    }

    #[test]
    fn test_yes_no_names_selectable() {
        let selections = Selections::new().set("loading", "yes").set("full", "no");
        assert_eq!(
            toggles().resolve(&selections).unwrap(),
            "btn-loading btn-fit"
        );
    }

    #[test]
    fn test_false_fallback_when_only_true_declared() {
        let selections = Selections::new().set("outline", false);
        assert_eq!(toggles().resolve(&selections).unwrap(), "btn-normal");
    }

    #[test]
    fn test_exact_false_match_wins_over_fallback() {
        let selections = Selections::new().set("full", false).set("loading", true);
        assert_eq!(
            toggles().resolve(&selections).unwrap(),
            "btn-loading btn-fit"
        );
    }

    #[test]
    fn test_true_not_declared_fails() {
        let schema = StyleSchema::build(|s| {
            s.variants(|v| {
                v.variant("compact", |o| {
                    o.no("spacious");
                });
            });
        });
        let err = schema
            .resolve(&Selections::new().set("compact", true))
            .unwrap_err();
        assert!(matches!(err, VariantNotFound::UnknownOption { .. }));
    }

    #[test]
    fn test_unknown_variant() {
        let err = button()
            .resolve(&Selections::new().set("disabled", true))
            .unwrap_err();
        assert_eq!(
            err,
            VariantNotFound::UnknownVariant {
                variant: "disabled".to_string(),
                available: vec!["color".to_string(), "size".to_string()],
            }
        );
    }

    #[test]
    fn test_unknown_option() {
        let err = button()
            .resolve(&Selections::new().set("color", "warning"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Option `warning` for `color` variant doesn't exist. Valid options are: primary, danger"
        );
    }

    #[test]
    fn test_invalid_default_fails_only_when_used() {
        let schema = StyleSchema::build(|s| {
            s.variants(|v| {
                v.variant("size", |o| {
                    o.option("md", "btn-md");
                });
            });
            s.default("size", "huge");
        });

        assert!(schema.resolve(&Selections::new()).is_err());
        assert_eq!(
            schema.resolve(&Selections::new().set("size", "md")).unwrap(),
            "btn-md"
        );
    }

    #[test]
    fn test_default_for_undeclared_variant_fails() {
        let schema = StyleSchema::build(|s| {
            s.default("ghost", "on");
        });
        let err = schema.resolve(&Selections::new()).unwrap_err();
        assert_eq!(err.variant(), "ghost");
    }
}

//! Attaching schemas to owner types.
//!
//! An owner type implements [`Styled`] by handing out its schema. The
//! [`styled!`](crate::styled) macro does this with a lazily built static, so
//! the definition block runs once per type, on first use.

use crate::error::VariantNotFound;
use crate::schema::StyleSchema;
use crate::selection::Selections;

/// A type with a style schema attached.
///
/// # Example
///
/// ```rust
/// use varistyle::{styled, Selections, Styled};
///
/// struct Badge {
///     tone: &'static str,
/// }
///
/// styled!(Badge, |s| {
///     s.base("badge");
///     s.variants(|v| {
///         v.variant("tone", |o| {
///             o.option("info", "badge-info");
///             o.option("warn", "badge-warn");
///         });
///     });
///     s.default("tone", "info");
/// });
///
/// assert_eq!(Badge::resolve_style(&Selections::new()).unwrap(), "badge badge-info");
///
/// let badge = Badge { tone: "warn" };
/// let classes = badge.build_style(&Selections::new().set("tone", badge.tone)).unwrap();
/// assert_eq!(classes, "badge badge-warn");
/// ```
pub trait Styled {
    /// Returns the schema attached to this type.
    fn style_schema() -> &'static StyleSchema;

    /// Resolves selections against this type's schema.
    fn resolve_style(selections: &Selections) -> Result<String, VariantNotFound> {
        Self::style_schema().resolve(selections)
    }

    /// Instance-level form of [`Styled::resolve_style`].
    fn build_style(&self, selections: &Selections) -> Result<String, VariantNotFound>
    where
        Self: Sized,
    {
        Self::resolve_style(selections)
    }
}

/// Implements [`Styled`] for a type from a definition block.
///
/// The block receives a [`StyleBuilder`](crate::StyleBuilder) and runs once,
/// the first time the schema is needed.
#[macro_export]
macro_rules! styled {
    ($owner:ty, $block:expr $(,)?) => {
        impl $crate::Styled for $owner {
            fn style_schema() -> &'static $crate::StyleSchema {
                static SCHEMA: $crate::__private::Lazy<$crate::StyleSchema> =
                    $crate::__private::Lazy::new(|| $crate::StyleSchema::build($block));
                &SCHEMA
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Button;

    crate::styled!(Button, |s| {
        s.base("btn");
        s.variants(|v| {
            v.variant("color", |o| {
                o.option("primary", "btn-primary");
                o.option("danger", "btn-danger");
            });
            v.variant("size", |o| {
                o.option("xs", "btn-xs");
                o.option("md", "btn-md");
            });
        });
        s.defaults([("color", "primary"), ("size", "md")]);
    });

    struct Link;

    crate::styled!(Link, |s| {
        s.base("link");
    });

    #[test]
    fn test_type_level_resolution() {
        let classes = Button::resolve_style(&Selections::new().set("color", "danger")).unwrap();
        assert_eq!(classes, "btn btn-danger btn-md");
    }

    #[test]
    fn test_instance_level_forwards() {
        let selections = Selections::new().set("size", "xs");
        assert_eq!(
            Button.build_style(&selections).unwrap(),
            Button::resolve_style(&selections).unwrap()
        );
    }

    #[test]
    fn test_schema_built_once() {
        assert!(std::ptr::eq(Button::style_schema(), Button::style_schema()));
    }

    #[test]
    fn test_schemas_are_per_type() {
        assert_eq!(Link::resolve_style(&Selections::new()).unwrap(), "link");
        assert!(Link::resolve_style(&Selections::new().set("color", "primary")).is_err());
    }
}

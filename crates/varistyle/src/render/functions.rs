//! MiniJinja function registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

use crate::registry::StyleRegistry;
use crate::schema::{OptionKey, Tokens};
use crate::selection::{SelectionValue, Selections, EXTRA_CLASSES};

/// Registers the `variants(name, **selections)` function on an environment.
///
/// Resolution errors surface as [`ErrorKind::InvalidOperation`] carrying the
/// resolver's message.
pub fn register_functions(env: &mut Environment<'static>, registry: Arc<StyleRegistry>) {
    env.add_function(
        "variants",
        move |name: &str, kwargs: Kwargs| -> Result<String, Error> {
            let selections = selections_from_kwargs(&kwargs)?;
            registry
                .resolve(name, &selections)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        },
    );
}

fn selections_from_kwargs(kwargs: &Kwargs) -> Result<Selections, Error> {
    let mut selections = Selections::new();

    for key in kwargs.args() {
        let value: Value = kwargs.get(key)?;
        if key == EXTRA_CLASSES {
            if let Some(tokens) = tokens_from_value(&value)? {
                selections = selections.extra_classes(tokens);
            }
        } else {
            selections.insert(key, selection_from_value(key, &value)?);
        }
    }

    Ok(selections)
}

fn selection_from_value(variant: &str, value: &Value) -> Result<SelectionValue, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(SelectionValue::unset()),
        ValueKind::Bool => Ok(OptionKey::Bool(value.is_true()).into()),
        ValueKind::String | ValueKind::Number => Ok(match value.as_str() {
            Some(name) => OptionKey::from(name).into(),
            None => OptionKey::Name(value.to_string()).into(),
        }),
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("cannot select variant `{}` with a value of kind {:?}", variant, kind),
        )),
    }
}

fn tokens_from_value(value: &Value) -> Result<Option<Tokens>, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(None),
        ValueKind::Seq => {
            let tokens = value
                .try_iter()?
                .map(|item| match item.as_str() {
                    Some(token) => token.to_string(),
                    None => item.to_string(),
                })
                .collect::<Tokens>();
            Ok(Some(tokens))
        }
        _ => Ok(Some(match value.as_str() {
            Some(token) => Tokens::from(token),
            None => Tokens::from(value.to_string()),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn environment() -> Environment<'static> {
        let mut registry = StyleRegistry::new();
        registry.define("button", |s| {
            s.base("btn");
            s.variants(|v| {
                v.variant("color", |o| {
                    o.option("primary", "btn-primary");
                    o.option("danger", "btn-danger");
                });
                v.variant("outline", |o| {
                    o.yes("btn-outline");
                });
            });
            s.default("color", "primary");
        });

        let mut env = Environment::new();
        register_functions(&mut env, Arc::new(registry));
        env
    }

    #[test]
    fn test_variants_function_defaults() {
        let output = environment()
            .render_str(r#"{{ variants("button") }}"#, context! {})
            .unwrap();
        assert_eq!(output, "btn btn-primary");
    }

    #[test]
    fn test_variants_function_selections() {
        let output = environment()
            .render_str(
                r#"{{ variants("button", color="danger", outline=true) }}"#,
                context! {},
            )
            .unwrap();
        assert_eq!(output, "btn btn-danger btn-outline");
    }

    #[test]
    fn test_variants_function_none_defers_to_default() {
        let output = environment()
            .render_str(
                r#"{{ variants("button", color=none, outline=false) }}"#,
                context! {},
            )
            .unwrap();
        assert_eq!(output, "btn btn-primary");
    }

    #[test]
    fn test_variants_function_context_values() {
        let output = environment()
            .render_str(
                r#"{{ variants("button", color=tone, extra_classes=extra) }}"#,
                context! { tone => "danger", extra => vec!["w-full", "mt-2"] },
            )
            .unwrap();
        assert_eq!(output, "btn btn-danger w-full mt-2");
    }

    #[test]
    fn test_variants_function_extra_string() {
        let output = environment()
            .render_str(
                r#"{{ variants("button", extra_classes="disabled:hidden") }}"#,
                context! {},
            )
            .unwrap();
        assert_eq!(output, "btn btn-primary disabled:hidden");
    }

    #[test]
    fn test_variants_function_unknown_option_errors() {
        let err = environment()
            .render_str(r#"{{ variants("button", color="warning") }}"#, context! {})
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("Option `warning` for `color` variant"));
    }

    #[test]
    fn test_variants_function_unknown_schema_errors() {
        let result = environment().render_str(r#"{{ variants("card") }}"#, context! {});
        assert!(result.is_err());
    }
}

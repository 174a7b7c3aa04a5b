//! Template renderer with schema resolution available.

use std::sync::Arc;

use minijinja::{Environment, Error};
use serde::Serialize;

use super::functions::register_functions;
use crate::registry::StyleRegistry;

/// A renderer with pre-registered templates that can call `variants(...)`.
///
/// # Example
///
/// ```rust
/// use varistyle::{Renderer, StyleRegistry};
/// use serde::Serialize;
///
/// let mut registry = StyleRegistry::new();
/// registry.define("alert", |s| {
///     s.base("alert");
///     s.variants(|v| {
///         v.variant("tone", |o| {
///             o.option("info", "alert-info");
///             o.option("error", "alert-error");
///         });
///     });
///     s.default("tone", "info");
/// });
///
/// let mut renderer = Renderer::new(registry);
/// renderer
///     .add_template("alert", r#"<div class="{{ variants("alert", tone=tone) }}">{{ message }}</div>"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Alert { tone: Option<String>, message: String }
///
/// let html = renderer
///     .render("alert", &Alert { tone: Some("error".into()), message: "Failed".into() })
///     .unwrap();
/// assert_eq!(html, r#"<div class="alert alert-error">Failed</div>"#);
/// ```
pub struct Renderer {
    env: Environment<'static>,
    registry: Arc<StyleRegistry>,
}

impl Renderer {
    /// Creates a renderer resolving against `registry`.
    pub fn new(registry: StyleRegistry) -> Self {
        Self::with_registry(Arc::new(registry))
    }

    /// Creates a renderer sharing an existing registry.
    pub fn with_registry(registry: Arc<StyleRegistry>) -> Self {
        let mut env = Environment::new();
        register_functions(&mut env, Arc::clone(&registry));
        Self { env, registry }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found, a `variants` call
    /// fails to resolve, or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// The registry templates resolve against.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }
}

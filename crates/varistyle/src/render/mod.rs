//! Template call-site integration.
//!
//! Templates resolve schemas from a [`StyleRegistry`](crate::StyleRegistry)
//! with the `variants` function:
//!
//! ```jinja
//! <button class="{{ variants("button", color="danger", outline=true) }}">
//! ```
//!
//! Keyword arguments are selections: `none` defers to the default, booleans
//! select the boolean keys, strings select named options, and `extra_classes`
//! takes a string or a list of strings. Escaping of the produced string is
//! left to the environment's auto-escape settings.

mod functions;
mod renderer;

pub use functions::register_functions;
pub use renderer::Renderer;

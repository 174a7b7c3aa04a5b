//! Proc macros for authoring varistyle schemas.
//!
//! # Macros
//!
//! - [`style!`] - Nested schema DSL compiled to `StyleSchema::build` calls
//!
//! # Example
//!
//! ```rust,ignore
//! use varistyle::style;
//!
//! let button = style! {
//!     base("btn");
//!     variants {
//!         color {
//!             primary("btn-primary");
//!             danger("btn-danger", "text-white");
//!         }
//!         outline {
//!             yes("btn-outline");
//!         }
//!     }
//!     defaults(color = primary, outline = false);
//! };
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, parenthesized, parse_macro_input, Ident, LitStr, Token};

/// Builds a `varistyle::StyleSchema` from a nested DSL.
///
/// # Directives
///
/// - `base("token", ...)` - appends base tokens
/// - `variants { name { option("token", ...) ... } ... }` - declares variants;
///   any identifier is a variant or option name, and `yes`/`no` also register
///   the boolean keys
/// - `defaults(variant = option, ...)` - default options; values are
///   identifiers, string literals, `true` or `false`
///
/// Each directive may be followed by `;`.
///
/// # Compile-Time Errors
///
/// - Any other top-level directive, naming the valid ones
/// - Non string-literal tokens
#[proc_macro]
pub fn style(input: TokenStream) -> TokenStream {
    let schema = parse_macro_input!(input as SchemaInput);
    schema.expand().into()
}

struct SchemaInput {
    directives: Vec<DirectiveInput>,
}

enum DirectiveInput {
    Base(Vec<LitStr>),
    Variants(Vec<VariantInput>),
    Defaults(Vec<(String, KeyInput)>),
}

struct VariantInput {
    name: String,
    options: Vec<(String, Vec<LitStr>)>,
}

enum KeyInput {
    Bool(bool),
    Name(String),
}

impl KeyInput {
    fn from_name(name: String) -> Self {
        match name.as_str() {
            "true" => KeyInput::Bool(true),
            "false" => KeyInput::Bool(false),
            _ => KeyInput::Name(name),
        }
    }

    fn expand(&self) -> TokenStream2 {
        match self {
            KeyInput::Bool(value) => quote! { #value },
            KeyInput::Name(name) => quote! { #name },
        }
    }
}

impl Parse for SchemaInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut directives = Vec::new();
        while !input.is_empty() {
            directives.push(input.parse()?);
            if input.peek(Token![;]) {
                input.parse::<Token![;]>()?;
            }
        }
        Ok(Self { directives })
    }
}

impl Parse for DirectiveInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident = Ident::parse_any(input)?;
        match ident.to_string().as_str() {
            "base" => Ok(DirectiveInput::Base(parse_tokens(input)?)),
            "variants" => {
                let content;
                braced!(content in input);
                let mut variants = Vec::new();
                while !content.is_empty() {
                    variants.push(content.parse()?);
                }
                Ok(DirectiveInput::Variants(variants))
            }
            "defaults" => {
                let content;
                parenthesized!(content in input);
                let pairs = Punctuated::<DefaultPair, Token![,]>::parse_terminated(&content)?;
                Ok(DirectiveInput::Defaults(
                    pairs.into_iter().map(|pair| (pair.variant, pair.key)).collect(),
                ))
            }
            other => Err(syn::Error::new(
                ident.span(),
                format!(
                    "unrecognized schema directive '{}'. The available directives are: 'base', 'variants' and 'defaults'",
                    other
                ),
            )),
        }
    }
}

impl Parse for VariantInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = parse_name(input)?;
        let content;
        braced!(content in input);

        let mut options = Vec::new();
        while !content.is_empty() {
            let option = parse_name(&content)?;
            options.push((option, parse_tokens(&content)?));
            if content.peek(Token![;]) {
                content.parse::<Token![;]>()?;
            }
        }
        Ok(Self { name, options })
    }
}

struct DefaultPair {
    variant: String,
    key: KeyInput,
}

impl Parse for DefaultPair {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let variant = parse_name(input)?;
        input.parse::<Token![=]>()?;
        let key = KeyInput::from_name(parse_name(input)?);
        Ok(Self { variant, key })
    }
}

/// Parses an identifier (keywords included) or a string literal.
fn parse_name(input: ParseStream) -> syn::Result<String> {
    if input.peek(LitStr) {
        Ok(input.parse::<LitStr>()?.value())
    } else {
        Ok(Ident::parse_any(input)?.to_string())
    }
}

/// Parses a parenthesized, comma separated list of string literals.
fn parse_tokens(input: ParseStream) -> syn::Result<Vec<LitStr>> {
    let content;
    parenthesized!(content in input);
    let tokens = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(tokens.into_iter().collect())
}

fn token_list(tokens: &[LitStr]) -> TokenStream2 {
    quote! {
        {
            let __tokens: &[&str] = &[#(#tokens),*];
            __tokens
        }
    }
}

impl SchemaInput {
    fn expand(&self) -> TokenStream2 {
        let style = Ident::new("__style", Span::call_site());
        let statements = self.directives.iter().map(|directive| match directive {
            DirectiveInput::Base(tokens) => {
                let tokens = token_list(tokens);
                quote! { #style.base(#tokens); }
            }
            DirectiveInput::Variants(variants) => {
                let variants = variants.iter().map(VariantInput::expand);
                quote! {
                    #style.variants(|__variants| {
                        #(#variants)*
                    });
                }
            }
            DirectiveInput::Defaults(pairs) => {
                let defaults = pairs.iter().map(|(variant, key)| {
                    let key = key.expand();
                    quote! { #style.default(#variant, #key); }
                });
                quote! { #(#defaults)* }
            }
        });

        quote! {
            ::varistyle::StyleSchema::build(|#style: &mut ::varistyle::StyleBuilder<'_>| {
                #(#statements)*
            })
        }
    }
}

impl VariantInput {
    fn expand(&self) -> TokenStream2 {
        let name = &self.name;
        let options = self.options.iter().map(|(option, tokens)| {
            let key = KeyInput::from_name(option.clone()).expand();
            let tokens = token_list(tokens);
            quote! { __options.option(#key, #tokens); }
        });

        quote! {
            __variants.variant(#name, |__options| {
                #(#options)*
            });
        }
    }
}

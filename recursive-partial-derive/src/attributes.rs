//! Parsing of `#[partial(...)]` attributes.
//!
//! Container options apply to the generated partial struct as a whole,
//! field options decide how a single field is transformed.

use proc_macro2::TokenStream as TokenStream2;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, LitStr, Path, Token};

const ATTRIBUTE_NAME: &str = "partial";

/// Options given on the struct itself.
#[derive(Default)]
pub struct ContainerOptions {
    /// Name of the generated struct, `Partial{Name}` when absent.
    pub name: Option<Ident>,
    /// Extra derives placed on the generated struct.
    pub derives: Vec<Path>,
    /// Raw attributes copied onto the generated struct.
    pub attributes: Vec<TokenStream2>,
    /// Derive `Serialize`/`Deserialize` through the re-exported serde.
    pub serde: bool,
    /// Path of the runtime crate, `::recursive_partial` when absent.
    pub crate_path: Option<Path>,
}

/// Options given on a single field.
#[derive(Default)]
pub struct FieldOptions {
    /// The field holds a record shape and is transformed recursively.
    pub nested: bool,
    /// The field is left out of the partial struct.
    pub skip: bool,
    /// Raw attributes copied onto the generated field.
    pub attributes: Vec<TokenStream2>,
}

impl ContainerOptions {
    pub fn from_attributes(attributes: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        for attribute in partial_attributes(attributes) {
            attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if options.name.is_some() {
                        return Err(meta.error("duplicate `name` option"));
                    }
                    let literal: LitStr = meta.value()?.parse()?;
                    options.name = Some(literal.parse::<Ident>()?);
                    Ok(())
                } else if meta.path.is_ident("derive") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let paths =
                        content.parse_terminated(Path::parse_mod_style, Token![,])?;
                    if let Some(default) = paths.iter().find(|path| is_default_derive(path)) {
                        return Err(syn::Error::new_spanned(
                            default,
                            "the partial struct always implements `Default`; remove it from `derive(...)`",
                        ));
                    }
                    options.derives.extend(paths);
                    Ok(())
                } else if meta.path.is_ident("attr") {
                    options.attributes.push(parse_raw_attribute(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("serde") {
                    if options.serde {
                        return Err(meta.error("duplicate `serde` option"));
                    }
                    options.serde = true;
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    if options.crate_path.is_some() {
                        return Err(meta.error("duplicate `crate` option"));
                    }
                    let literal: LitStr = meta.value()?.parse()?;
                    options.crate_path = Some(literal.parse::<Path>()?);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown container option; expected one of `name`, `derive`, `attr`, `serde`, `crate`",
                    ))
                }
            })?;
        }

        Ok(options)
    }
}

impl FieldOptions {
    pub fn from_attributes(attributes: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        for attribute in partial_attributes(attributes) {
            attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("nested") {
                    if options.nested {
                        return Err(meta.error("duplicate `nested` option"));
                    }
                    if options.skip {
                        return Err(meta.error("`nested` cannot be combined with `skip`"));
                    }
                    options.nested = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    if options.skip {
                        return Err(meta.error("duplicate `skip` option"));
                    }
                    if options.nested {
                        return Err(meta.error("`skip` cannot be combined with `nested`"));
                    }
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("attr") {
                    options.attributes.push(parse_raw_attribute(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown field option; expected one of `nested`, `skip`, `attr`"))
                }
            })?;
        }

        Ok(options)
    }
}

fn partial_attributes(attributes: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident(ATTRIBUTE_NAME))
}

fn is_default_derive(path: &Path) -> bool {
    path.segments
        .last()
        .is_some_and(|segment| segment.ident == "Default")
}

/// Reads the tokens of `attr(...)`, which become `#[...]` on the output.
fn parse_raw_attribute(meta: &ParseNestedMeta<'_>) -> syn::Result<TokenStream2> {
    let content;
    syn::parenthesized!(content in meta.input);
    let tokens: TokenStream2 = content.parse()?;
    if tokens.is_empty() {
        return Err(meta.error("`attr(...)` expects an attribute body"));
    }
    Ok(tokens)
}

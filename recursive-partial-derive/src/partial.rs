//! Implementation of the `#[derive(RecursivePartial)]` macro.
//!
//! For a struct `Shape` the macro emits:
//!
//! - `struct PartialShape` with every field wrapped in `Option`, where
//!   `#[partial(nested)]` fields hold the partial of their own type
//! - `Default` and `is_empty` for the partial struct
//! - `RecursivePartial` for both structs (the partial maps to itself)
//! - `Overlay` for both structs
//! - `Complete` for the shape

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, Generics, Ident, LitStr, Path, PathArguments, Type,
    Visibility, WherePredicate, parse_macro_input, parse_quote,
};

use crate::attributes::{ContainerOptions, FieldOptions};
use crate::bounds::{GenericNames, with_predicates};

/// Main implementation of the `RecursivePartial` derive macro.
pub fn derive_recursive_partial_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

/// A field of the input struct together with its options.
struct ShapeField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    vis: &'a Visibility,
    options: FieldOptions,
    /// Doc comments carried over to the partial field.
    docs: Vec<&'a Attribute>,
    /// Local binding used when the partial is destructured.
    binding: Ident,
}

impl ShapeField<'_> {
    /// The field name as written in paths reported to users.
    fn display_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Type held inside the `Option` of the partial field.
    fn partial_type(&self, crate_path: &Path) -> TokenStream2 {
        let ty = self.ty;
        if self.options.nested {
            quote! { <#ty as #crate_path::RecursivePartial>::Partial }
        } else {
            quote! { #ty }
        }
    }
}

/// Everything the generators need about one derive invocation.
struct Shape<'a> {
    name: &'a Ident,
    vis: &'a Visibility,
    generics: &'a Generics,
    partial_name: Ident,
    crate_path: Path,
    options: ContainerOptions,
    /// Fields kept in the partial struct.
    fields: Vec<ShapeField<'a>>,
    /// Fields filled with `Default::default()` on completion.
    skipped: Vec<ShapeField<'a>>,
    generic_names: GenericNames,
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let shape = Shape::from_input(input)?;

    let partial_struct = shape.generate_partial_struct();
    let partial_inherent = shape.generate_partial_inherent();
    let recursive_partial = shape.generate_recursive_partial();
    let overlay = shape.generate_overlay();
    let complete = shape.generate_complete();

    Ok(quote! {
        #partial_struct
        #partial_inherent
        #recursive_partial
        #overlay
        #complete
    })
}

impl<'a> Shape<'a> {
    fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let raw_fields = named_fields(input)?;
        let options = ContainerOptions::from_attributes(&input.attrs)?;
        let generic_names = GenericNames::new(&input.generics);

        let partial_name = options
            .name
            .clone()
            .unwrap_or_else(|| format_ident!("Partial{}", input.ident));
        if partial_name == input.ident {
            return Err(syn::Error::new_spanned(
                &partial_name,
                "the partial struct needs a name different from the struct itself",
            ));
        }

        let crate_path = options
            .crate_path
            .clone()
            .unwrap_or_else(|| parse_quote!(::recursive_partial));

        let mut errors: Option<syn::Error> = None;
        let mut fields = Vec::new();
        let mut skipped = Vec::new();

        for (index, field) in raw_fields.into_iter().enumerate() {
            match shape_field(field, index, &generic_names) {
                Ok(shape_field) if shape_field.options.skip => skipped.push(shape_field),
                Ok(shape_field) => fields.push(shape_field),
                Err(error) => match errors.as_mut() {
                    Some(combined) => combined.combine(error),
                    None => errors = Some(error),
                },
            }
        }

        if let Some(error) = errors {
            return Err(error);
        }

        Ok(Self {
            name: &input.ident,
            vis: &input.vis,
            generics: &input.generics,
            partial_name,
            crate_path,
            options,
            fields,
            skipped,
            generic_names,
        })
    }

    fn nested_fields(&self) -> impl Iterator<Item = &ShapeField<'a>> {
        self.fields.iter().filter(|field| field.options.nested)
    }

    /// `ty: Trait` for every nested field type that mentions a generic parameter.
    fn nested_bounds(&self, bound: &TokenStream2) -> Vec<WherePredicate> {
        self.nested_fields()
            .filter(|field| self.generic_names.is_used_by(field.ty))
            .map(|field| {
                let ty = field.ty;
                parse_quote! { #ty: #bound }
            })
            .collect()
    }

    /// Generics of the partial struct: the shape's own plus `RecursivePartial`
    /// bounds on generic nested fields.
    fn partial_generics(&self) -> Generics {
        let crate_path = &self.crate_path;
        with_predicates(
            self.generics,
            self.nested_bounds(&quote! { #crate_path::RecursivePartial }),
        )
    }

    /// Explicit serde bounds on the partial field types of generic fields.
    ///
    /// Serde would otherwise bound the parameters themselves, which misses
    /// `<T as RecursivePartial>::Partial` and adds `T: Default` for
    /// `#[serde(default)]` fields.
    fn serde_bounds(&self) -> TokenStream2 {
        let crate_path = &self.crate_path;
        let serde_path = format!("{}::__private::serde", path_string(crate_path));
        let partial_types: Vec<String> = self
            .fields
            .iter()
            .filter(|field| self.generic_names.is_used_by(field.ty))
            .map(|field| field.partial_type(crate_path).to_string())
            .collect();

        if partial_types.is_empty() {
            return quote! {};
        }

        let join = |bound: &str| {
            partial_types
                .iter()
                .map(|partial_type| format!("{partial_type}: {serde_path}::{bound}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let serialize = LitStr::new(&join("Serialize"), proc_macro2::Span::call_site());
        let deserialize = LitStr::new(&join("Deserialize<'de>"), proc_macro2::Span::call_site());

        quote! {
            #[serde(bound(serialize = #serialize, deserialize = #deserialize))]
        }
    }

    fn generate_partial_struct(&self) -> TokenStream2 {
        let vis = self.vis;
        let partial_name = &self.partial_name;
        let crate_path = &self.crate_path;
        let generics = self.partial_generics();
        let parameters = &generics.params;
        let where_clause = &generics.where_clause;

        let declared_generics = if parameters.is_empty() {
            quote! {}
        } else {
            quote! { <#parameters> }
        };

        let derives = &self.options.derives;
        let derive_attribute = if derives.is_empty() {
            quote! {}
        } else {
            quote! { #[derive(#(#derives),*)] }
        };

        let serde_attributes = if self.options.serde {
            let serde_crate = LitStr::new(
                &format!("{}::__private::serde", path_string(crate_path)),
                proc_macro2::Span::call_site(),
            );
            let bounds = self.serde_bounds();
            quote! {
                #[derive(
                    #crate_path::__private::serde::Serialize,
                    #crate_path::__private::serde::Deserialize
                )]
                #[serde(crate = #serde_crate, deny_unknown_fields)]
                #bounds
            }
        } else {
            quote! {}
        };

        let extra_attributes = &self.options.attributes;
        let documentation = LitStr::new(
            &format!(
                "Recursive partial of [`{}`]: every field is optional and nested records are partial themselves.",
                self.name
            ),
            proc_macro2::Span::call_site(),
        );

        let field_definitions = self.fields.iter().map(|field| {
            let field_vis = field.vis;
            let ident = field.ident;
            let partial_type = field.partial_type(crate_path);
            let attributes = &field.options.attributes;
            let docs = &field.docs;
            let serde_field = if self.options.serde && !field.options.nested && is_option(field.ty) {
                let present_option = LitStr::new(
                    &format!("{}::__private::deserialize_present_option", path_string(crate_path)),
                    proc_macro2::Span::call_site(),
                );
                quote! {
                    #[serde(
                        default,
                        skip_serializing_if = "::core::option::Option::is_none",
                        deserialize_with = #present_option
                    )]
                }
            } else if self.options.serde {
                quote! {
                    #[serde(default, skip_serializing_if = "::core::option::Option::is_none")]
                }
            } else {
                quote! {}
            };

            quote! {
                #(#docs)*
                #serde_field
                #(#[#attributes])*
                #field_vis #ident: ::core::option::Option<#partial_type>,
            }
        });

        quote! {
            #[doc = #documentation]
            #derive_attribute
            #serde_attributes
            #(#[#extra_attributes])*
            #vis struct #partial_name #declared_generics #where_clause {
                #(#field_definitions)*
            }
        }
    }

    fn generate_partial_inherent(&self) -> TokenStream2 {
        let partial_name = &self.partial_name;
        let generics = self.partial_generics();
        let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
        let idents: Vec<&Ident> = self.fields.iter().map(|field| field.ident).collect();

        let emptiness_checks = idents.iter().map(|ident| quote! { self.#ident.is_none() });
        let is_empty_body = quote! { true #(&& #emptiness_checks)* };

        quote! {
            #[automatically_derived]
            impl #impl_generics ::core::default::Default for #partial_name #type_generics #where_clause {
                fn default() -> Self {
                    Self {
                        #(#idents: ::core::option::Option::None,)*
                    }
                }
            }

            impl #impl_generics #partial_name #type_generics #where_clause {
                /// Returns `true` when no field carries a value.
                #[inline]
                #[must_use]
                pub const fn is_empty(&self) -> bool {
                    #is_empty_body
                }
            }
        }
    }

    fn generate_recursive_partial(&self) -> TokenStream2 {
        let name = self.name;
        let partial_name = &self.partial_name;
        let crate_path = &self.crate_path;
        let generics = self.partial_generics();
        let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

        let lifted_fields = self.fields.iter().map(|field| {
            let ident = field.ident;
            let ty = field.ty;
            if field.options.nested {
                quote! {
                    #ident: ::core::option::Option::Some(
                        <#ty as #crate_path::RecursivePartial>::into_partial(self.#ident)
                    ),
                }
            } else {
                quote! { #ident: ::core::option::Option::Some(self.#ident), }
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics #crate_path::RecursivePartial for #name #type_generics #where_clause {
                type Partial = #partial_name #type_generics;

                fn into_partial(self) -> Self::Partial {
                    #partial_name {
                        #(#lifted_fields)*
                    }
                }
            }

            #[automatically_derived]
            impl #impl_generics #crate_path::RecursivePartial for #partial_name #type_generics #where_clause {
                type Partial = Self;

                #[inline]
                fn into_partial(self) -> Self {
                    self
                }
            }
        }
    }

    /// Pattern destructuring a partial value into the per-field bindings.
    fn destructure_partial(&self) -> TokenStream2 {
        let partial_name = &self.partial_name;
        let idents = self.fields.iter().map(|field| field.ident);
        let bindings = self.fields.iter().map(|field| &field.binding);

        quote! { #partial_name { #(#idents: #bindings),* } }
    }

    fn generate_overlay(&self) -> TokenStream2 {
        let name = self.name;
        let partial_name = &self.partial_name;
        let crate_path = &self.crate_path;
        let destructure = self.destructure_partial();

        let shape_generics = with_predicates(
            &self.partial_generics(),
            self.nested_bounds(&quote! { #crate_path::Overlay }),
        );
        let (impl_generics, type_generics, where_clause) = shape_generics.split_for_impl();

        let shape_type: Type = parse_quote! { #name #type_generics };
        let partial_generics = with_predicates(
            &self.partial_generics(),
            [parse_quote! {
                #shape_type: #crate_path::Overlay
                    + #crate_path::RecursivePartial<Partial = #partial_name #type_generics>
            }],
        );
        let (partial_impl_generics, _, partial_where_clause) = partial_generics.split_for_impl();

        let overlay_fields = self.fields.iter().map(|field| {
            let ident = field.ident;
            let binding = &field.binding;
            let ty = field.ty;
            if field.options.nested {
                quote! {
                    if let ::core::option::Option::Some(value) = #binding {
                        <#ty as #crate_path::Overlay>::overlay(&mut self.#ident, value);
                    }
                }
            } else {
                quote! {
                    if let ::core::option::Option::Some(value) = #binding {
                        self.#ident = value;
                    }
                }
            }
        });

        let combine_fields = self.fields.iter().map(|field| {
            let ident = field.ident;
            let binding = &field.binding;
            let ty = field.ty;
            if field.options.nested {
                quote! {
                    if let ::core::option::Option::Some(value) = #binding {
                        base.#ident = ::core::option::Option::Some(match base.#ident.take() {
                            ::core::option::Option::Some(mut current) => {
                                <#ty as #crate_path::Overlay>::combine_partials(&mut current, value);
                                current
                            }
                            ::core::option::Option::None => value,
                        });
                    }
                }
            } else {
                quote! {
                    if let ::core::option::Option::Some(value) = #binding {
                        base.#ident = ::core::option::Option::Some(value);
                    }
                }
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics #crate_path::Overlay for #name #type_generics #where_clause {
                fn overlay(&mut self, overrides: Self::Partial) {
                    let #destructure = overrides;
                    #(#overlay_fields)*
                }

                #[allow(unused_variables)]
                fn combine_partials(base: &mut Self::Partial, overrides: Self::Partial) {
                    let #destructure = overrides;
                    #(#combine_fields)*
                }
            }

            #[automatically_derived]
            impl #partial_impl_generics #crate_path::Overlay for #partial_name #type_generics #partial_where_clause {
                #[inline]
                fn overlay(&mut self, overrides: Self) {
                    <#shape_type as #crate_path::Overlay>::combine_partials(self, overrides);
                }

                #[inline]
                fn combine_partials(base: &mut Self, overrides: Self) {
                    <#shape_type as #crate_path::Overlay>::combine_partials(base, overrides);
                }
            }
        }
    }

    fn generate_complete(&self) -> TokenStream2 {
        let name = self.name;
        let crate_path = &self.crate_path;
        let destructure = self.destructure_partial();

        let generics = with_predicates(
            &self.partial_generics(),
            self.nested_bounds(&quote! { #crate_path::Complete }),
        );
        let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

        let completed_fields = self.fields.iter().map(|field| {
            let binding = &field.binding;
            let ty = field.ty;
            let display_name = field.display_name();
            if field.options.nested {
                quote! {
                    let #binding = <#ty as #crate_path::Complete>::complete_at(
                        #binding.unwrap_or_default(),
                        &#crate_path::complete::field_path(path, #display_name),
                        missing,
                    );
                }
            } else {
                quote! {
                    let #binding = #binding.or_else(|| {
                        missing.push(#crate_path::complete::field_path(path, #display_name));
                        ::core::option::Option::None
                    });
                }
            }
        });

        let assignments = self.fields.iter().map(|field| {
            let ident = field.ident;
            let binding = &field.binding;
            quote! { #ident: #binding?, }
        });
        let defaults = self.skipped.iter().map(|field| {
            let ident = field.ident;
            quote! { #ident: ::core::default::Default::default(), }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics #crate_path::Complete for #name #type_generics #where_clause {
                #[allow(unused_variables)]
                fn complete_at(
                    partial: Self::Partial,
                    path: &str,
                    missing: &mut ::std::vec::Vec<::std::string::String>,
                ) -> ::core::option::Option<Self> {
                    let #destructure = partial;
                    #(#completed_fields)*
                    ::core::option::Option::Some(Self {
                        #(#assignments)*
                        #(#defaults)*
                    })
                }
            }
        }
    }
}

/// Returns the named fields of a struct, or an empty list for unit structs.
fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => Ok(named_fields.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "RecursivePartial can only be derived for structs with named fields, not tuple structs.",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "RecursivePartial can only be derived for structs, not enums.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "RecursivePartial cannot be derived for unions.",
        )),
    }
}

fn shape_field<'a>(
    field: &'a Field,
    index: usize,
    generic_names: &GenericNames,
) -> syn::Result<ShapeField<'a>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let options = FieldOptions::from_attributes(&field.attrs)?;

    if options.skip && generic_names.is_used_by(&field.ty) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "cannot skip a field whose type uses a generic parameter of the struct",
        ));
    }

    Ok(ShapeField {
        ident,
        ty: &field.ty,
        vis: &field.vis,
        options,
        docs: field
            .attrs
            .iter()
            .filter(|attribute| attribute.path().is_ident("doc"))
            .collect(),
        binding: format_ident!("__partial_field_{}", index),
    })
}

/// Returns `true` for a leaf spelled `Option<_>`, whatever its path prefix.
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| {
                segment.ident == "Option"
                    && matches!(segment.arguments, PathArguments::AngleBracketed(_))
            }),
        Type::Group(group) => is_option(&group.elem),
        Type::Paren(paren) => is_option(&paren.elem),
        _ => false,
    }
}

/// Renders a path without the spaces `quote` inserts between tokens.
fn path_string(path: &Path) -> String {
    quote! { #path }.to_string().replace(' ', "")
}

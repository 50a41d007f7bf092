//! Where-clause helpers for generic shapes.
//!
//! Bounds are only added for field types that mention a generic parameter
//! of the shape. Bounds on fully concrete types are left to the type checker.

use std::collections::HashSet;

use syn::visit::{self, Visit};
use syn::{ExprPath, GenericParam, Generics, Ident, Lifetime, Type, TypePath, WherePredicate};

/// Names of the generic parameters declared on a shape.
pub struct GenericNames {
    types: HashSet<Ident>,
    lifetimes: HashSet<Ident>,
}

impl GenericNames {
    pub fn new(generics: &Generics) -> Self {
        let mut types = HashSet::new();
        let mut lifetimes = HashSet::new();

        for parameter in &generics.params {
            match parameter {
                GenericParam::Type(type_param) => {
                    types.insert(type_param.ident.clone());
                }
                GenericParam::Const(const_param) => {
                    types.insert(const_param.ident.clone());
                }
                GenericParam::Lifetime(lifetime_param) => {
                    lifetimes.insert(lifetime_param.lifetime.ident.clone());
                }
            }
        }

        Self { types, lifetimes }
    }

    /// Returns `true` when `ty` refers to any of the generic parameters.
    pub fn is_used_by(&self, ty: &Type) -> bool {
        if self.types.is_empty() && self.lifetimes.is_empty() {
            return false;
        }
        let mut usage = Usage {
            names: self,
            found: false,
        };
        usage.visit_type(ty);
        usage.found
    }
}

struct Usage<'a> {
    names: &'a GenericNames,
    found: bool,
}

impl<'ast> Visit<'ast> for Usage<'_> {
    fn visit_type_path(&mut self, type_path: &'ast TypePath) {
        if type_path.qself.is_none()
            && let Some(first) = type_path.path.segments.first()
            && self.names.types.contains(&first.ident)
        {
            self.found = true;
        }
        visit::visit_type_path(self, type_path);
    }

    fn visit_expr_path(&mut self, expr_path: &'ast ExprPath) {
        if expr_path.path.get_ident().is_some_and(|ident| self.names.types.contains(ident)) {
            self.found = true;
        }
        visit::visit_expr_path(self, expr_path);
    }

    fn visit_lifetime(&mut self, lifetime: &'ast Lifetime) {
        if self.names.lifetimes.contains(&lifetime.ident) {
            self.found = true;
        }
    }
}

/// Clones `generics` and appends `predicates` to its where clause.
pub fn with_predicates(
    generics: &Generics,
    predicates: impl IntoIterator<Item = WherePredicate>,
) -> Generics {
    let mut generics = generics.clone();
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn names() -> GenericNames {
        let generics: Generics = parse_quote!(<'a, T: Clone, const N: usize>);
        GenericNames::new(&generics)
    }

    #[rstest]
    #[case(parse_quote!(T))]
    #[case(parse_quote!(Vec<T>))]
    #[case(parse_quote!(&'a str))]
    #[case(parse_quote!([u8; N]))]
    #[case(parse_quote!(<T as Iterator>::Item))]
    #[case(parse_quote!(Box<dyn Fn(T) -> i32>))]
    fn detects_generic_usage(#[case] ty: Type) {
        assert!(names().is_used_by(&ty));
    }

    #[rstest]
    #[case(parse_quote!(i32))]
    #[case(parse_quote!(Vec<String>))]
    #[case(parse_quote!(&'static str))]
    #[case(parse_quote!(module::T))]
    fn ignores_concrete_types(#[case] ty: Type) {
        assert!(!names().is_used_by(&ty));
    }

    #[rstest]
    fn with_predicates_creates_where_clause() {
        let generics: Generics = parse_quote!(<T>);
        let extended = with_predicates(&generics, [parse_quote!(T: Clone)]);

        let where_clause = extended.where_clause.expect("where clause must exist");
        assert_eq!(where_clause.predicates.len(), 1);
    }
}

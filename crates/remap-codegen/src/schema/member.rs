use super::{ty, ErrorSet, Name};

#[derive(Debug)]
pub(crate) struct Member {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Name the member is registered under
    pub(crate) name: Name,

    pub(crate) kind: MemberKind,
}

#[derive(Debug)]
pub(crate) enum MemberKind {
    /// Read and written as a value
    Value,

    /// `#[reflect(nested)]` on a `T` field
    Nested(syn::Type),

    /// `#[reflect(nested)]` on an `Option<T>` field, holding `T`
    OptionalNested(syn::Type),
}

#[derive(Debug, Default)]
struct MemberAttr {
    nested: bool,
    skip: bool,
    rename: Option<syn::LitStr>,
}

impl Member {
    /// Returns `None` for fields marked `#[reflect(skip)]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "reflect fields must be named"));
        };

        let attr = MemberAttr::from_ast(&field.attrs)?;

        if attr.skip {
            return Ok(None);
        }

        let name = match &attr.rename {
            Some(lit) => Name::from_lit(lit),
            None => Name::from_ident(ident),
        };

        if name.parts.is_empty() {
            return Err(syn::Error::new(name.span, "member name has no words"));
        }

        let kind = if !attr.nested {
            MemberKind::Value
        } else if let Some(inner) = ty::option_inner(&field.ty) {
            MemberKind::OptionalNested(inner.clone())
        } else {
            MemberKind::Nested(field.ty.clone())
        };

        Ok(Some(Member {
            ident: ident.clone(),
            name,
            kind,
        }))
    }
}

impl MemberAttr {
    fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();
        let mut out = MemberAttr::default();
        let mut last = None;

        for attr in attrs {
            if !attr.path().is_ident("reflect") {
                continue;
            }
            last = Some(attr);

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("nested") {
                    if out.nested {
                        return Err(meta.error("duplicate `nested`"));
                    }
                    out.nested = true;
                } else if meta.path.is_ident("skip") {
                    if out.skip {
                        return Err(meta.error("duplicate `skip`"));
                    }
                    out.skip = true;
                } else if meta.path.is_ident("rename") {
                    if out.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    out.rename = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error("expected `nested`, `skip`, or `rename = \"...\"`"));
                }
                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if let (true, true, Some(attr)) = (out.skip, out.nested || out.rename.is_some(), last) {
            errs.push(syn::Error::new_spanned(
                attr,
                "`skip` cannot be combined with other reflect options",
            ));
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(out),
        }
    }
}

use super::ErrorSet;

/// Struct level `#[reflect(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct ReflectAttr {
    /// `#[reflect(methods(a, b))]`: read-only members computed by `&self`
    /// methods
    pub(crate) methods: Vec<syn::Ident>,
}

impl ReflectAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("reflect") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident("methods") {
                    return Err(meta.error("expected `methods(...)`"));
                }

                meta.parse_nested_meta(|method| {
                    let Some(ident) = method.path.get_ident() else {
                        return Err(method.error("expected a method name"));
                    };

                    if self.methods.contains(ident) {
                        return Err(method.error(format!("duplicate method `{ident}`")));
                    }

                    self.methods.push(ident.clone());
                    Ok(())
                })
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

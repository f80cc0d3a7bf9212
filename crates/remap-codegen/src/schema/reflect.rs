use super::{ErrorSet, Member, Name, ReflectAttr};

#[derive(Debug)]
pub(crate) struct Reflect {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Field members, in declaration order
    pub(crate) members: Vec<Member>,

    /// Method members
    pub(crate) methods: Vec<(syn::Ident, Name)>,
}

impl Reflect {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "Reflect can only be derived for structs with named fields",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "Reflect generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut attr = ReflectAttr::default();
        let mut members: Vec<Member> = vec![];

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for field in &node.named {
            match Member::from_ast(field) {
                Ok(Some(member)) => {
                    if members.iter().any(|m| m.name.parts == member.name.parts) {
                        errs.push(syn::Error::new(
                            member.name.span,
                            format!("duplicate member name `{}`", member.name.value),
                        ));
                    } else {
                        members.push(member);
                    }
                }
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        let methods: Vec<_> = attr
            .methods
            .into_iter()
            .map(|ident| {
                let name = Name::from_ident(&ident);
                (ident, name)
            })
            .collect();

        for (ident, name) in &methods {
            if members.iter().any(|m| m.name.parts == name.parts) {
                errs.push(syn::Error::new_spanned(
                    ident,
                    format!("method `{ident}` clashes with a field member"),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Reflect {
            ident: ast.ident.clone(),
            members,
            methods,
        })
    }
}

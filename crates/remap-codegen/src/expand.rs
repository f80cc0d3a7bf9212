use crate::schema::{Member, MemberKind, Reflect};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The type being expanded
    reflect: &'a Reflect,

    /// Path prefix for remap types
    remap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let remap = &self.remap;
        let ident = &self.reflect.ident;
        let members = self.reflect.members.iter().map(|member| self.expand_member(member));
        let methods = self.expand_methods();

        wrap_in_const(quote! {
            impl #remap::Reflect for #ident {
                fn shape() -> #remap::Shape {
                    #remap::Shape::builder::<Self>()
                        #( #members )*
                        #( #methods )*
                        .build()
                }
            }
        })
    }

    fn expand_member(&self, member: &Member) -> TokenStream {
        let ident = &member.ident;
        let name = member.name.lit();

        match &member.kind {
            MemberKind::Value => quote! {
                .field(#name, |v| &v.#ident, |v| &mut v.#ident)
            },
            MemberKind::Nested(ty) => quote! {
                .nested::<#ty>(#name, |v| ::core::option::Option::Some(&v.#ident))
            },
            MemberKind::OptionalNested(ty) => quote! {
                .nested::<#ty>(#name, |v| v.#ident.as_ref())
            },
        }
    }

    fn expand_methods(&self) -> Vec<TokenStream> {
        self.reflect
            .methods
            .iter()
            .map(|(ident, name)| {
                let name = name.lit();
                quote!(.method(#name, Self::#ident))
            })
            .collect()
    }
}

pub(super) fn reflect(reflect: &Reflect) -> TokenStream {
    Expand {
        reflect,
        remap: quote!(_remap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use remap as _remap;
            #code
        };
    }
}

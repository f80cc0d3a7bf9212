mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let reflect = schema::Reflect::from_ast(&item)?;

    Ok(expand::reflect(&reflect))
}

use proc_macro2::Span;
use std_util::str;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Name {
    /// Member name as seen by the mapper
    pub(crate) value: String,

    /// Lowercase words of `value`
    pub(crate) parts: Vec<String>,

    pub(crate) span: Span,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        Self::from_str(&ident.unraw().to_string(), ident.span())
    }

    pub(crate) fn from_lit(lit: &syn::LitStr) -> Self {
        Self::from_str(&lit.value(), lit.span())
    }

    pub(crate) fn from_str(src: &str, span: Span) -> Self {
        Self {
            value: src.to_string(),
            parts: str::words(src),
            span,
        }
    }

    pub(crate) fn lit(&self) -> syn::LitStr {
        syn::LitStr::new(&self.value, self.span)
    }
}

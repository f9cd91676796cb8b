mod default_args;

use darling::FromDeriveInput;
use quote::quote;

pub use default_args::InspectArgs;
pub use default_args::InspectFieldArgsDefault;

// Utility function to convert an Option<T> to tokens
pub fn expand_to_tokens<T: quote::ToTokens>(input: &Option<T>) -> proc_macro2::TokenStream {
    match input {
        Some(value) => quote!(Some(#value)),
        None => quote!(None),
    }
}

// Metadata from the struct's type annotation
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(inspect))]
pub struct InspectStructArgs {
    pub ident: syn::Ident,
}

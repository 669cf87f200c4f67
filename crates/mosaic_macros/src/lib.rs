use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, parse_macro_input};

/// Derives the theme token mapping for a fieldless enum.
///
/// Each variant maps to the string key used in theme definitions. The key
/// defaults to the kebab-cased variant name and can be set explicitly with
/// `#[token("...")]`.
///
/// Generates `token()`, `from_token()`, `Display` and `From<Self> for String`.
#[proc_macro_derive(ThemeToken, attributes(token))]
pub fn theme_token_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let variants = match input.data {
        Data::Enum(data_enum) => data_enum.variants,
        _ => {
            return syn::Error::new(name.span(), "#[derive(ThemeToken)] can only be used on enums")
                .to_compile_error()
                .into();
        }
    };

    let mut idents = Vec::with_capacity(variants.len());
    let mut tokens = Vec::with_capacity(variants.len());

    for variant in &variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(variant, "ThemeToken variants can't carry fields")
                .to_compile_error()
                .into();
        }

        let token = match get_token_attr(&variant.attrs) {
            Ok(Some(token)) => token,
            Ok(None) => LitStr::new(&kebab_case(&variant.ident), variant.ident.span()),
            Err(error) => return error.to_compile_error().into(),
        };

        idents.push(&variant.ident);
        tokens.push(token);
    }

    let expanded = quote! {
        impl #name {
            /// The key this value is stored under in theme definitions.
            pub fn token(&self) -> &'static str {
                match self {
                    #( #name::#idents => #tokens, )*
                }
            }

            /// Parses a theme key back into a value.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    #( #tokens => Some(#name::#idents), )*
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl From<#name> for String {
            fn from(value: #name) -> String {
                value.token().to_string()
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_token_attr(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("token"))
        .map(|attr| attr.parse_args::<LitStr>())
        .transpose()
}

fn kebab_case(ident: &Ident) -> String {
    let mut out = String::new();

    for (index, ch) in ident.to_string().chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

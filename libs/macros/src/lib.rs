use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Serializes wrapped in an object keyed by the camelCase type name, so
/// `ScoreReply` becomes `{ "scoreReply": { ... } }`.
#[proc_macro_derive(ToJson)]
pub fn json_derive_to_json(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let tag = camel_case(&name.to_string());

    let done = quote! {
        impl ToJson for #name {
            fn to_tagged_json(&self) -> std::result::Result<serde_json::Value, serde_json::Error> {
                let mut tagged = serde_json::Map::new();
                tagged.insert(#tag.to_owned(), serde_json::to_value(self)?);
                Ok(serde_json::Value::Object(tagged))
            }
        }
    };

    done.into()
}

//! Getters derive macro implementation
//!
//! For a field `user_name: String` this generates `getUserName(&self) -> &String`.
//! `bool` fields get `isX(&self) -> bool` instead.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::quote;
use syn::{
    ext::IdentExt, parse::Result, parse_macro_input, Attribute, Data, DeriveInput, Error, Fields,
    Type,
};

/// Main implementation function for the Getters derive
pub fn getters_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match process_getters(&input) {
        Ok(result) => result.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Accessor information extracted from a struct field
#[derive(Debug, Clone)]
struct AccessorInfo {
    field_name: Ident,
    field_type: Type,
    method_name: Ident,
    is_boolean: bool,
}

fn process_getters(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let accessors = extract_accessors(input)?;

    let struct_name = &input.ident;
    let type_name = struct_name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let methods = accessors.iter().map(|accessor| {
        let field_name = &accessor.field_name;
        let field_type = &accessor.field_type;
        let method_name = &accessor.method_name;

        if accessor.is_boolean {
            quote! {
                pub fn #method_name(&self) -> bool {
                    self.#field_name
                }
            }
        } else {
            quote! {
                pub fn #method_name(&self) -> &#field_type {
                    &self.#field_name
                }
            }
        }
    });

    let metas = accessors.iter().map(|accessor| {
        let method_name = accessor.method_name.to_string();
        quote! {
            ::propref::MethodMeta::new(#type_name, #method_name)
        }
    });

    Ok(quote! {
        #[allow(non_snake_case, dead_code)]
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#methods)*
        }

        impl #impl_generics ::propref::Getters for #struct_name #ty_generics #where_clause {
            const ACCESSORS: &'static [::propref::MethodMeta] = &[#(#metas),*];
        }
    })
}

fn extract_accessors(input: &DeriveInput) -> Result<Vec<AccessorInfo>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    input,
                    "#[derive(Getters)] requires structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                input,
                "#[derive(Getters)] can only be applied to structs",
            ))
        }
    };

    let mut accessors = Vec::new();
    for field in fields {
        if is_skipped(&field.attrs)? {
            continue;
        }

        if let Some(field_name) = &field.ident {
            let is_boolean = is_bool_type(&field.ty);
            let prefix = if is_boolean { "is" } else { "get" };
            let method_name = Ident::new(
                &format!("{}{}", prefix, upper_camel_case(&field_name.unraw().to_string())),
                Span::call_site(),
            );

            accessors.push(AccessorInfo {
                field_name: field_name.clone(),
                field_type: field.ty.clone(),
                method_name,
                is_boolean,
            });
        }
    }

    Ok(accessors)
}

/// Check for `#[getter(skip)]`, rejecting unknown arguments
fn is_skipped(attrs: &[Attribute]) -> Result<bool> {
    let mut skip = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("getter")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported getter attribute, expected `skip`"))
            }
        })?;
    }

    Ok(skip)
}

fn is_bool_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("bool"),
        _ => false,
    }
}

/// `user_name` -> `UserName`
fn upper_camel_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

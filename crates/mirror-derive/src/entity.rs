//! Entity derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

struct StructAttrs {
    table: Option<String>,
}

impl syn::parse::Parse for StructAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut table: Option<String> = None;

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let key = ident.to_string();

            let _: syn::Token![=] = input.parse()?;
            let value: syn::LitStr = input.parse()?;

            match key.as_str() {
                "table" => table = Some(value.value()),
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown entity attribute `{key}`"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(Self { table })
    }
}

struct FieldAttrs {
    skip: bool,
    column: Option<String>,
}

impl syn::parse::Parse for FieldAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = FieldAttrs {
            skip: false,
            column: None,
        };

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let key = ident.to_string();

            match key.as_str() {
                "skip" => attrs.skip = true,
                "column" => {
                    let _: syn::Token![=] = input.parse()?;
                    let value: syn::LitStr = input.parse()?;
                    attrs.column = Some(value.value());
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown entity field attribute `{key}`"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attrs)
    }
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let struct_attrs = get_struct_attrs(&input)?;
    let table_name = struct_attrs.table.unwrap_or_else(|| name.to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity can only be derived for structs",
            ));
        }
    };

    let mut columns: Vec<String> = Vec::new();
    let mut value_exprs: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_ident = field.ident.clone().unwrap();
        let field_attrs = get_field_attrs(field)?;

        if field_attrs.skip {
            continue;
        }

        let column_name = field_attrs.column.unwrap_or_else(|| field_ident.to_string());
        columns.push(column_name);
        value_exprs.push(quote! { ::mirror::Value::from(self.#field_ident.clone()) });
    }

    Ok(quote! {
        impl #impl_generics ::mirror::Entity for #name #ty_generics #where_clause {
            fn table() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [&'static str] {
                &[#(#columns),*]
            }

            fn values(&self) -> ::std::vec::Vec<::mirror::Value> {
                vec![#(#value_exprs),*]
            }
        }
    })
}

fn get_struct_attrs(input: &DeriveInput) -> Result<StructAttrs> {
    let mut table: Option<String> = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("mirror") {
            continue;
        }

        if let syn::Meta::List(meta_list) = &attr.meta {
            let parsed = syn::parse2::<StructAttrs>(meta_list.tokens.clone())?;
            if parsed.table.is_some() {
                table = parsed.table;
            }
        }
    }

    Ok(StructAttrs { table })
}

fn get_field_attrs(field: &syn::Field) -> Result<FieldAttrs> {
    let mut merged = FieldAttrs {
        skip: false,
        column: None,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("mirror") {
            continue;
        }

        if let syn::Meta::List(meta_list) = &attr.meta {
            let parsed = syn::parse2::<FieldAttrs>(meta_list.tokens.clone())?;
            merged.skip |= parsed.skip;
            if parsed.column.is_some() {
                merged.column = parsed.column;
            }
        }
    }

    Ok(merged)
}

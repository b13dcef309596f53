//! Suite attribute macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ImplItem, ItemImpl, Result};

enum Marker {
    Setup,
    Teardown,
    Case { expected: Option<String> },
}

struct CaseAttrs {
    expected: Option<String>,
}

impl syn::parse::Parse for CaseAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut expected: Option<String> = None;

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let key = ident.to_string();

            let _: syn::Token![=] = input.parse()?;
            let value: syn::LitStr = input.parse()?;

            match key.as_str() {
                "expected" => expected = Some(value.value()),
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown case attribute `{key}`"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(Self { expected })
    }
}

pub fn expand(mut item: ItemImpl) -> Result<TokenStream> {
    if let Some((_, trait_path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            trait_path,
            "#[suite] applies to inherent impl blocks, not trait impls",
        ));
    }

    let mut setups: Vec<TokenStream> = Vec::new();
    let mut tests: Vec<TokenStream> = Vec::new();
    let mut teardowns: Vec<TokenStream> = Vec::new();

    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };

        let Some(marker) = take_marker(method)? else {
            continue;
        };

        check_receiver(method)?;

        let ident = &method.sig.ident;
        let name = ident.to_string();

        match marker {
            Marker::Setup => setups.push(quote! {
                ::mirror::Hook { name: #name, run: Self::#ident }
            }),
            Marker::Teardown => teardowns.push(quote! {
                ::mirror::Hook { name: #name, run: Self::#ident }
            }),
            Marker::Case { expected } => {
                let expected = match &expected {
                    Some(kind) => quote! { ::std::option::Option::Some(#kind) },
                    None => quote! { ::std::option::Option::None },
                };
                tests.push(quote! {
                    ::mirror::TestCase {
                        name: #name,
                        expected_failure: #expected,
                        run: Self::#ident,
                    }
                });
            }
        }
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics ::mirror::Suite for #self_ty #where_clause {
            fn setups() -> ::std::vec::Vec<::mirror::Hook<Self>> {
                vec![#(#setups),*]
            }

            fn tests() -> ::std::vec::Vec<::mirror::TestCase<Self>> {
                vec![#(#tests),*]
            }

            fn teardowns() -> ::std::vec::Vec<::mirror::Hook<Self>> {
                vec![#(#teardowns),*]
            }
        }
    })
}

/// Find, validate, and strip the suite marker on a method, if any.
fn take_marker(method: &mut syn::ImplItemFn) -> Result<Option<Marker>> {
    let mut marker: Option<Marker> = None;

    for attr in &method.attrs {
        let parsed = if attr.path().is_ident("setup") {
            require_bare(attr, "setup")?;
            Marker::Setup
        } else if attr.path().is_ident("teardown") {
            require_bare(attr, "teardown")?;
            Marker::Teardown
        } else if attr.path().is_ident("case") {
            let expected = match &attr.meta {
                syn::Meta::Path(_) => None,
                syn::Meta::List(meta_list) => {
                    syn::parse2::<CaseAttrs>(meta_list.tokens.clone())?.expected
                }
                syn::Meta::NameValue(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected #[case] or #[case(expected = \"kind\")]",
                    ));
                }
            };
            Marker::Case { expected }
        } else {
            continue;
        };

        if marker.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "method carries more than one suite marker",
            ));
        }
        marker = Some(parsed);
    }

    if marker.is_some() {
        method.attrs.retain(|attr| {
            !attr.path().is_ident("setup")
                && !attr.path().is_ident("teardown")
                && !attr.path().is_ident("case")
        });
    }

    Ok(marker)
}

fn require_bare(attr: &syn::Attribute, name: &str) -> Result<()> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(()),
        _ => Err(syn::Error::new_spanned(
            attr,
            format!("#[{name}] takes no arguments"),
        )),
    }
}

fn check_receiver(method: &syn::ImplItemFn) -> Result<()> {
    let receiver_ok = method
        .sig
        .receiver()
        .is_some_and(|r| r.reference.is_some() && r.mutability.is_some());
    if !receiver_ok {
        return Err(syn::Error::new_spanned(
            &method.sig,
            "suite operations must take `&mut self`",
        ));
    }
    Ok(())
}

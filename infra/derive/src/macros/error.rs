use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, FieldsNamed, Ident, Type, Variant};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{name}Ext");

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("ohub_error can only be applied to enums"); };
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match parse_variant(variant) {
            Ok(meta) => variants.push(meta),
            Err(err) => return err.to_compile_error(),
        }
    }

    let context_trait = expand_context_trait(name, &ext_trait, &variants);
    let from_impls: Vec<_> =
        variants.iter().filter_map(|v| expand_from_impl(name, &ext_trait, v)).collect();
    let internal_impls = expand_internal_impls(name, &variants);

    quote! {
        #[derive(Debug, ::thiserror::Error)]
        #input

        #context_trait
        #(#from_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(variant: &Variant) -> Result<ErrorVariant<'_>, syn::Error> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "ohub_error requires named fields for source/context handling",
        ));
    };

    let has_context = context_field(fields)?;
    let source = source_field(fields);

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "ohub_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        ));
    }

    Ok(ErrorVariant { ident: &variant.ident, source, has_context })
}

fn context_field(fields: &FieldsNamed) -> Result<bool, syn::Error> {
    for field in &fields.named {
        if field.ident.as_ref().is_none_or(|ident| ident != "context") {
            continue;
        }
        if !is_context_type(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "context field must be Option<Cow<'static, str>>",
            ));
        }
        return Ok(true);
    }
    Ok(false)
}

fn source_field(fields: &FieldsNamed) -> Option<(&Ident, &Type)> {
    fields.named.iter().find_map(|field| {
        let ident = field.ident.as_ref()?;
        let marked =
            field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"));
        (ident == "source" || marked).then_some((ident, &field.ty))
    })
}

fn expand_context_trait(
    name: &Ident,
    ext_trait: &Ident,
    variants: &[ErrorVariant<'_>],
) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        quote! { #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        #[allow(unreachable_patterns)]
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn expand_from_impl(
    name: &Ident,
    ext_trait: &Ident,
    variant: &ErrorVariant<'_>,
) -> Option<TokenStream> {
    if variant.ident == "Internal" {
        return None;
    }
    let (field, ty) = variant.source?;
    let ident = variant.ident;

    Some(quote! {
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(err: #ty) -> Self { Self::#ident { #field: err, context: None } }
        }

        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|err| #name::#ident { #field: err, context: Some(context.into()) })
            }
        }
    })
}

fn expand_internal_impls(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    if !variants.iter().any(|v| v.ident == "Internal") {
        return quote!();
    }

    quote! {
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: s.into(), context: None } }
        }
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: s.into(), context: None } }
        }
    }
}

/// Accepts the handful of spellings `Option<Cow<'static, str>>` shows up as.
fn is_context_type(ty: &Type) -> bool {
    let spelled = quote!(#ty).to_string().replace(' ', "");
    matches!(
        spelled.trim_start_matches("::"),
        "Option<Cow<'static,str>>"
            | "Option<std::borrow::Cow<'static,str>>"
            | "Option<::std::borrow::Cow<'static,str>>"
            | "std::option::Option<Cow<'static,str>>"
            | "core::option::Option<Cow<'static,str>>"
    )
}

//! Expansion of `#[derive(ErrorKind)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    punctuated::Punctuated,
    Attribute,
    Data,
    DeriveInput,
    Expr,
    Fields,
    MetaNameValue,
    Result,
    Token,
};

/// The expressions given to the `#[error(...)]` attributes of a struct.
#[derive(Default)]
struct ReportParts {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ReportParts {
    /// Collects the tags of every `#[error(...)]` attribute. Each tag may be given at most once.
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut parts = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("error")) {
            let tags = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
            for tag in tags {
                let slot = if tag.path.is_ident("message") {
                    &mut parts.message
                } else if tag.path.is_ident("labels") {
                    &mut parts.labels
                } else if tag.path.is_ident("help") {
                    &mut parts.help
                } else {
                    return Err(syn::Error::new_spanned(tag.path, "expected `message`, `labels` or `help`"));
                };

                if slot.replace(tag.value).is_some() {
                    return Err(syn::Error::new_spanned(tag.path, "this tag is already set"));
                }
            }
        }

        Ok(parts)
    }
}

/// Returns a statement binding every named field of `self` by reference, so the tag expressions
/// can use them.
fn bind_fields(input: &DeriveInput) -> Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
    };

    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().filter_map(|field| field.ident.as_ref());
            Ok(quote! {
                #[allow(unused_variables)]
                let Self { #(#names),* } = self;
            })
        },
        Fields::Unit => Ok(TokenStream2::new()),
        Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
            fields,
            "`ErrorKind` cannot be derived for tuple structs; name the fields instead",
        )),
    }
}

/// Generates the `ErrorKind` implementation for the struct.
///
/// The `n`th label points at the `n`th span of the error. Labels beyond the last span reuse it,
/// and an error with no spans points at the start of the source.
pub fn expand(input: DeriveInput) -> Result<TokenStream2> {
    let parts = ReportParts::from_attrs(&input.attrs)?;
    let Some(message) = parts.message else {
        return Err(syn::Error::new_spanned(&input.ident, "missing `message` in `#[error(...)]`"));
    };
    let bind = bind_fields(&input)?;
    let labels = parts.labels.map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
    let help = parts.help.map(|help| quote! { let report = report.with_help(#help); });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics alg_error::ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bind

                let span_at = |index: usize| spans.get(index)
                    .or_else(|| spans.last())
                    .cloned()
                    .unwrap_or(0..0);
                let texts = #labels;
                let labels = texts
                    .into_iter()
                    .enumerate()
                    .map(|(index, text)| {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span_at(index)))
                            .with_color(alg_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, span_at(0).start)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                report.finish()
            }
        }
    })
}

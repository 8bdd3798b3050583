mod error_kind;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `ErrorKind` trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```ignore
/// use alg_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add a term here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, the `n`th label points at the `n`th span.           |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression that should evaluate to something implementing [`ToString`].
/// For structs with named fields, the expression is evaluated with the members of the struct in
/// scope (as references), so they can be used in the expression.
///
/// The tags may be split over several `error` attributes, but each may only be given once, and
/// `message` is required.
///
/// The derived implementation refers to `ariadne` and `alg_error` by path, so both must be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error_kind::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

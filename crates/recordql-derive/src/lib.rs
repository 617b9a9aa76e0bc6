use proc_macro::TokenStream;

mod record;

/// Derive `Record`, `RecordKind` and `Reflect` for a struct with named
/// fields.
///
/// Each field may carry one `#[ql("...")]` attribute holding its column
/// directives. Tags on exported fields are checked here, so a malformed
/// tag is a compile error rather than a runtime one.
#[proc_macro_derive(Record, attributes(ql))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}

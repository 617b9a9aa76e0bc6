use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use recordql_core::tag::parse_tag;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, GenericArgument, LitStr, PathArguments,
    Type, Visibility, ext::IdentExt,
};

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(Error::new_spanned(
                    other,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "Record can only be derived for structs with named fields",
            ));
        }
    };

    let specs = fields
        .iter()
        .map(FieldSpec::from_field)
        .collect::<Result<Vec<_>, _>>()?;

    let defs = specs.iter().map(FieldSpec::def_tokens);
    let value_arms = specs
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.eligible)
        .map(|(position, spec)| {
            let member = &spec.ident;
            quote! {
                #position => Some(::recordql::traits::NativeType::to_value(&self.#member)),
            }
        });
    let name = ident.unraw().to_string();

    Ok(quote! {
        impl ::recordql::traits::RecordKind for #ident {
            const RECORD: &'static ::recordql::model::RecordType =
                &::recordql::model::RecordType {
                    path: concat!(module_path!(), "::", #name),
                    name: #name,
                    fields: &[#(#defs),*],
                };
        }

        impl ::recordql::traits::Record for #ident {
            fn record_type(&self) -> &'static ::recordql::model::RecordType {
                <Self as ::recordql::traits::RecordKind>::RECORD
            }

            fn field_value(&self, position: usize) -> Option<::recordql::value::Value> {
                match position {
                    #(#value_arms)*
                    _ => None,
                }
            }
        }

        impl ::recordql::traits::Reflect for #ident {
            fn shape(&self) -> ::recordql::traits::Shape<'_> {
                ::recordql::traits::Shape::Record(self)
            }
        }
    })
}

///
/// FieldSpec
///

struct FieldSpec {
    ident: syn::Ident,
    name: String,
    exported: bool,
    tag: Option<LitStr>,
    // exported and not excluded: its type must be a NativeType
    eligible: bool,
    ty: Type,
}

impl FieldSpec {
    fn from_field(field: &Field) -> Result<Self, Error> {
        let ident = field.ident.clone().expect("named field");
        let exported = matches!(field.vis, Visibility::Public(_));
        let tag = ql_tag(&field.attrs)?;

        let mut excluded = false;
        if exported && let Some(lit) = &tag {
            let directives = parse_tag(&lit.value())
                .map_err(|err| Error::new_spanned(lit, format!("invalid ql tag: {err}")))?;
            excluded = directives.is_excluded();
        }

        let eligible = exported && !excluded;
        if eligible && option_inner(&field.ty).and_then(option_inner).is_some() {
            return Err(Error::new_spanned(
                &field.ty,
                "nested optional fields cannot back a column",
            ));
        }

        Ok(Self {
            name: ident.unraw().to_string(),
            ident,
            exported,
            tag,
            eligible,
            ty: field.ty.clone(),
        })
    }

    fn def_tokens(&self) -> TokenStream {
        let Self {
            name,
            exported,
            ty,
            ..
        } = self;

        let tag = self
            .tag
            .as_ref()
            .map_or_else(|| quote!(None), |lit| quote!(Some(#lit)));

        // ineligible fields never reach the column type table
        let kind = if self.eligible {
            quote!(<#ty as ::recordql::traits::NativeType>::KIND)
        } else {
            let spelled = ty.to_token_stream().to_string().replace(' ', "");
            quote!(::recordql::types::NativeKind::opaque(#spelled))
        };

        quote! {
            ::recordql::model::FieldDef {
                name: #name,
                exported: #exported,
                tag: #tag,
                kind: #kind,
            }
        }
    }
}

// The single `#[ql("...")]` attribute of a field, if present.
fn ql_tag(attrs: &[Attribute]) -> Result<Option<LitStr>, Error> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("ql")) {
        if found.is_some() {
            return Err(Error::new_spanned(attr, "duplicate ql attribute"));
        }
        found = Some(attr.parse_args::<LitStr>()?);
    }

    Ok(found)
}

// `T` when `ty` is spelled `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first()? {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

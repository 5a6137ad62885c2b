mod generator;
use proc_macro::TokenStream as TokenStream1;

use proc_macro2::TokenStream;
use proc_macro_error::{abort, proc_macro_error};
use syn::parse::Parse;
use syn::spanned::Spanned;
use syn::*;
use template_quote::quote;

#[derive(Debug, Default)]
struct Arguments {
    krate: Option<Path>,
}

impl Parse for Arguments {
    fn parse(input: parse::ParseStream) -> Result<Self> {
        let mut ret: Self = Default::default();
        while input.peek(Ident) {
            let ident: Ident = input.parse()?;
            if &ident == "krate" {
                input.parse::<Token![=]>()?;
                ret.krate = Some(input.parse()?);
            } else {
                return Err(Error::new(ident.span(), "Bad option, expected `krate = <path>`"));
            }
            if input.parse::<Token![,]>().is_err() {
                break;
            }
        }
        if !input.is_empty() {
            Err(syn::parse::Error::new(input.span(), "Unparsed args"))
        } else {
            Ok(ret)
        }
    }
}

fn inner_struct(item: &ItemStruct, arg: Arguments) -> TokenStream {
    let krate = arg.krate.unwrap_or(parse_quote!(::enumerate));
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let arity = item.fields.len();
    let mut out = quote! {
        #item

        impl #impl_generics #krate::Arity for #{&item.ident} #ty_generics #where_clause {
            const ARITY: ::core::primitive::usize = #arity;
        }

        impl #impl_generics #krate::Aggregate for #{&item.ident} #ty_generics #where_clause {}
    };
    out.extend(
        generator::EmitContext {
            kind: generator::EmitFields,
            krate: krate.clone(),
        }
        .emit(item),
    );
    out.extend(
        generator::EmitContext {
            kind: generator::EmitFieldsMut,
            krate,
        }
        .emit(item),
    );
    out
}

fn inner(arg: Arguments, input: Item) -> TokenStream {
    match input {
        Item::Struct(item_struct) => inner_struct(&item_struct, arg),
        Item::Enum(item_enum) => abort!(
            item_enum.enum_token.span(),
            "`#[aggregate]` needs a struct, an enum has no fixed field list"
        ),
        _ => abort!(input.span(), "Bad item, expected a struct"),
    }
}

/// Make a plain struct enumerable field by field.
///
/// Implements `Arity`, `Aggregate`, `Fields` and `FieldsMut` from the
/// `enumerate` crate, so `enumerate(value)` classifies the struct as an
/// aggregate and visits its fields in declaration order.
///
/// Use `#[aggregate(krate = path)]` when `enumerate` is re-exported under
/// another path.
#[proc_macro_error]
#[proc_macro_attribute]
pub fn aggregate(attr: TokenStream1, input: TokenStream1) -> TokenStream1 {
    inner(
        parse(attr).unwrap_or_else(|e| abort!(e.span(), &format!("{}", e))),
        parse_macro_input!(input as Item),
    )
    .into()
}

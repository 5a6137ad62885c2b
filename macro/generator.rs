use core::fmt::Debug;
use core::hash::Hash;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use syn::*;
use template_quote::quote;

pub trait Emitter: PartialEq + Debug + Hash {
    /// `Fields` or `FieldsMut`
    fn fields_trait(&self) -> Ident;
    /// `Visitor` or `VisitorMut`
    fn visitor_trait(&self) -> Ident;
    fn method(&self) -> Ident;
    fn visit(&self) -> Ident;
    fn native_reference(&self) -> TokenStream;
}

#[derive(PartialEq, Debug, Hash)]
pub struct EmitContext<K> {
    pub kind: K,
    pub krate: Path,
}

fn accessor(index: usize, field: &Field) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index {
            index: index as u32,
            span: Span::call_site(),
        }),
    }
}

impl<K> EmitContext<K>
where
    Self: Emitter,
{
    /// Visitor impl of `item`, generic over the visitor and index types and
    /// bounded by one visitor predicate per field type.
    pub fn emit(&self, item: &ItemStruct) -> TokenStream {
        let krate = &self.krate;
        let visitor_ty = Ident::new("__EnumerateVisitor", Span::call_site());
        let index_ty = Ident::new("__EnumerateIndex", Span::call_site());
        let visitor_trait = self.visitor_trait();

        let mut generics = item.generics.clone();
        generics.params.push(parse_quote!(#visitor_ty));
        generics.params.push(parse_quote!(#index_ty: #krate::Index));
        {
            let where_clause = generics.make_where_clause();
            for field in &item.fields {
                let ty = &field.ty;
                where_clause
                    .predicates
                    .push(parse_quote!(#visitor_ty: #krate::#visitor_trait<#index_ty, #ty>));
            }
        }
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        let (_, ty_generics, _) = item.generics.split_for_impl();
        let fields = item
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| (i, &field.ty, accessor(i, field)))
            .collect::<Vec<_>>();

        quote! {
            impl #impl_generics #krate::#{self.fields_trait()}<#visitor_ty, #index_ty>
            for #{&item.ident} #ty_generics #where_clause
            {
                #[allow(unused_variables)]
                fn #{self.method()}(
                    #{self.native_reference()} self,
                    visitor: &mut #visitor_ty,
                    limit: ::core::primitive::usize,
                ) {
                    #(for (i, ty, member) in &fields) {
                        if #i == limit {
                            return;
                        }
                        <#visitor_ty as #krate::#visitor_trait<#index_ty, #ty>>::#{self.visit()}(
                            visitor,
                            <#index_ty as #krate::Index>::from_usize(#i),
                            #{self.native_reference()} self.#member,
                        );
                    }
                }
            }
        }
    }
}

#[derive(PartialEq, Eq, Hash, Debug)]
pub struct EmitFields;

impl Emitter for EmitContext<EmitFields> {
    fn fields_trait(&self) -> Ident {
        Ident::new("Fields", Span::call_site())
    }

    fn visitor_trait(&self) -> Ident {
        Ident::new("Visitor", Span::call_site())
    }

    fn method(&self) -> Ident {
        Ident::new("visit_fields", Span::call_site())
    }

    fn visit(&self) -> Ident {
        Ident::new("visit", Span::call_site())
    }

    fn native_reference(&self) -> TokenStream {
        quote!(&)
    }
}

#[derive(PartialEq, Eq, Hash, Debug)]
pub struct EmitFieldsMut;

impl Emitter for EmitContext<EmitFieldsMut> {
    fn fields_trait(&self) -> Ident {
        Ident::new("FieldsMut", Span::call_site())
    }

    fn visitor_trait(&self) -> Ident {
        Ident::new("VisitorMut", Span::call_site())
    }

    fn method(&self) -> Ident {
        Ident::new("visit_fields_mut", Span::call_site())
    }

    fn visit(&self) -> Ident {
        Ident::new("visit_mut", Span::call_site())
    }

    fn native_reference(&self) -> TokenStream {
        quote!(&mut)
    }
}

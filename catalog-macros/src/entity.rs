use crate::{
    args::MacroArgs,
    derives::DeriveSet,
    fields::{ensure_leading_field, to_snake_case},
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, Item, Path, Type, spanned::Spanned};

/// - `id`：标识类型，默认 `::catalog_domain::value_object::UniqueId`
/// - `name`：实体类型名（`Entity::TYPE`），默认结构体名的 snake_case
/// - `debug`：是否派生 Debug，默认 true
pub(crate) fn expand(args: MacroArgs, item: Item) -> syn::Result<TokenStream> {
    args.check_keys(&["id", "name", "debug"])?;

    let mut st = match item {
        Item::Struct(st) => st,
        other => return Err(syn::Error::new(other.span(), "#[entity] only on struct")),
    };
    let span = st.span();
    let fields = match &mut st.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(syn::Error::new(
                span,
                "#[entity] only supports named-field struct",
            ));
        }
    };

    let id_type: Type = match args.ty("id")? {
        Some(ty) => ty,
        None => syn::parse_quote!(::catalog_domain::value_object::UniqueId),
    };
    ensure_leading_field(fields, "id", &id_type);

    // 判等只看标识，用户派生的 PartialEq/Eq 会与生成的实现冲突
    let mut required: Vec<Path> = Vec::with_capacity(2);
    if args.flag("debug", true)? {
        required.push(syn::parse_quote!(Debug));
    }
    required.push(syn::parse_quote!(Clone));
    DeriveSet::take_from(&mut st.attrs)?
        .forbid(&["PartialEq", "Eq"])
        .require(required)
        .write_to(&mut st.attrs);

    let ident = &st.ident;
    let type_name = args
        .string("name")?
        .unwrap_or_else(|| to_snake_case(&ident.to_string()));
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        #st

        impl #impl_generics ::catalog_domain::entity::Entity for #ident #ty_generics #where_clause {
            const TYPE: &'static str = #type_name;
            type Id = #id_type;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }

        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}
    })
}

use crate::{args::MacroArgs, derives::DeriveSet};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Item, Path, spanned::Spanned};

/// 值对象按值相等、可哈希、可序列化；不派生 `Default`，缺省值由类型自行定义。
pub(crate) fn expand(args: MacroArgs, item: Item) -> syn::Result<TokenStream> {
    args.check_keys(&["debug"])?;

    let mut required: Vec<Path> = Vec::with_capacity(7);
    if args.flag("debug", true)? {
        required.push(syn::parse_quote!(Debug));
    }
    required.extend::<[Path; 6]>([
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ]);

    let mut item = item;
    let attrs = match &mut item {
        Item::Struct(st) => &mut st.attrs,
        Item::Enum(en) => &mut en.attrs,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "#[value_object] only supports struct or enum",
            ));
        }
    };
    DeriveSet::take_from(attrs)?.require(required).write_to(attrs);

    Ok(item.into_token_stream())
}

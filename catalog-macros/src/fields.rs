use proc_macro2::Span;
use syn::{Field, FieldsNamed, Ident, Type};

/// 把名为 `name` 的字段移到最前；缺失时以 `ty` 新增一个私有字段
pub(crate) fn ensure_leading_field(fields: &mut FieldsNamed, name: &str, ty: &Type) {
    let is_target = |f: &Field| f.ident.as_ref().is_some_and(|i| i == name);

    let (mut leading, others): (Vec<Field>, Vec<Field>) =
        std::mem::take(&mut fields.named).into_iter().partition(is_target);

    let lead = leading.pop().unwrap_or_else(|| {
        let ident = Ident::new(name, Span::call_site());
        syn::parse_quote! { #ident: #ty }
    });

    fields.named.push(lead);
    fields.named.extend(others);
}

/// `CastMember` -> `cast_member`
pub(crate) fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

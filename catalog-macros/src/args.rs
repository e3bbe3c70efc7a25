use std::collections::BTreeMap;

use proc_macro2::Span;
use quote::ToTokens;
use syn::{
    Expr, ExprLit, Lit, MetaNameValue, Result, Token, Type,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// 宏参数：`key = value, ...`
///
/// 解析阶段只做语法检查；键是否合法、值的类型由 [`MacroArgs::check_keys`] 与各取值方法校验。
pub(crate) struct MacroArgs {
    values: BTreeMap<String, Expr>,
}

impl Parse for MacroArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)?;

        let mut values = BTreeMap::new();
        for pair in pairs {
            let key = pair
                .path
                .get_ident()
                .ok_or_else(|| syn::Error::new_spanned(&pair.path, "expected a plain key"))?
                .to_string();
            if values.contains_key(&key) {
                return Err(syn::Error::new_spanned(
                    &pair.path,
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
            values.insert(key, pair.value);
        }
        Ok(Self { values })
    }
}

impl MacroArgs {
    pub(crate) fn check_keys(&self, allowed: &[&str]) -> Result<()> {
        match self.values.keys().find(|k| !allowed.contains(&k.as_str())) {
            None => Ok(()),
            Some(unknown) => Err(syn::Error::new(
                Span::call_site(),
                format!(
                    "unknown key '{unknown}' in attribute; expected one of: {}",
                    allowed.join(", ")
                ),
            )),
        }
    }

    pub(crate) fn flag(&self, key: &str, default: bool) -> Result<bool> {
        match self.values.get(key) {
            None => Ok(default),
            Some(Expr::Lit(ExprLit {
                lit: Lit::Bool(b), ..
            })) => Ok(b.value),
            Some(other) => Err(syn::Error::new_spanned(
                other,
                format!("expected boolean literal for '{key}'"),
            )),
        }
    }

    pub(crate) fn string(&self, key: &str) -> Result<Option<String>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            })) => Ok(Some(s.value())),
            Some(other) => Err(syn::Error::new_spanned(
                other,
                format!("expected string literal for '{key}'"),
            )),
        }
    }

    /// 以类型解释参数值（`id = my::IdType`）
    pub(crate) fn ty(&self, key: &str) -> Result<Option<Type>> {
        self.values
            .get(key)
            .map(|expr| syn::parse2::<Type>(expr.to_token_stream()))
            .transpose()
    }
}

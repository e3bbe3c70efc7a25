use quote::ToTokens;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

/// 结构体/枚举上的 derive 集合
///
/// 从属性列表中摘出全部 `#[derive(..)]`，按名称去重后重新写回为单个 derive 属性。
pub(crate) struct DeriveSet {
    paths: Vec<Path>,
}

impl DeriveSet {
    /// 移除 `attrs` 中的 derive 属性并收集其条目
    pub(crate) fn take_from(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let mut paths = Vec::new();
        let mut rest = Vec::with_capacity(attrs.len());
        for attr in attrs.drain(..) {
            if attr.path().is_ident("derive") {
                paths.extend(attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?);
            } else {
                rest.push(attr);
            }
        }
        *attrs = rest;
        Ok(Self { paths })
    }

    /// 追加宏要求的派生（排在用户派生之前；同名条目只保留一份）
    pub(crate) fn require(mut self, required: impl IntoIterator<Item = Path>) -> Self {
        let mut merged: Vec<Path> = Vec::new();
        for path in required.into_iter().chain(self.paths) {
            if !merged.iter().any(|p| same_derive(p, &path)) {
                merged.push(path);
            }
        }
        self.paths = merged;
        self
    }

    pub(crate) fn forbid(mut self, names: &[&str]) -> Self {
        self.paths.retain(|p| !names.contains(&derive_name(p).as_str()));
        self
    }

    pub(crate) fn write_to(self, attrs: &mut Vec<Attribute>) {
        if self.paths.is_empty() {
            return;
        }
        let paths = self.paths;
        attrs.insert(0, syn::parse_quote!(#[derive(#(#paths),*)]));
    }
}

// 以末段名称判定：`Serialize` 与 `serde::Serialize` 视为同一派生
fn derive_name(path: &Path) -> String {
    path.segments
        .last()
        .map(|s| s.ident.to_string())
        .unwrap_or_else(|| path.to_token_stream().to_string())
}

fn same_derive(a: &Path, b: &Path) -> bool {
    derive_name(a) == derive_name(b)
}

//! 领域建模过程宏（catalog-macros）
//!
//! - `#[value_object]`：为不可变值类型合并派生（按值相等、可哈希、可序列化）；
//! - `#[entity]`：为实体补齐标识字段、实现 `Entity` 并生成按标识判等。
//!
use proc_macro::TokenStream;
use syn::{Item, parse_macro_input};

mod args;
mod derives;
mod entity;
mod fields;
mod value_object;

use args::MacroArgs;

/// 值对象宏
///
/// 合并/追加派生：Debug（可关闭）, Clone, Serialize, Deserialize, PartialEq, Eq, Hash。
/// 参数：`#[value_object(debug = true|false)]`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MacroArgs);
    let item = parse_macro_input!(item as Item);
    value_object::expand(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 实体宏
///
/// - 若缺失则追加标识字段 `id`，并置于字段最前；
/// - 实现 `::catalog_domain::entity::Entity`（`TYPE`/`Id`/`id()`）；
/// - 生成仅比较标识的 `PartialEq`/`Eq`。
///
/// 参数：`#[entity(id = IdType, name = "type_name", debug = true|false)]`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MacroArgs);
    let item = parse_macro_input!(item as Item);
    entity::expand(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

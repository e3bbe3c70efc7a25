//! 实体（Entity）基础抽象
//!
//! 实体以标识而非属性值区分彼此：同一实体类型、标识相等即视为同一实体。
//! 通常通过 `#[entity]` 宏实现 `Entity` 并生成按标识判等的 `PartialEq`。
//!
use std::fmt::Display;

use serde::{Serialize, de::DeserializeOwned};

use crate::{error::DomainResult, value_object::ValueObject};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体类型名（稳定字符串，用于跨类型判等与错误信息）
    const TYPE: &'static str;

    /// 实体标识类型
    type Id: ValueObject + Clone + Display + PartialEq + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}

/// 实体与其普通数据投影（plain object）之间的转换
///
/// - `to_plain_object` 只读快照，标识以原始字符串呈现；
/// - `from_plain_object` 用于从可信存储重建实体，不触发校验。
pub trait PlainObject: Entity + Sized {
    type Plain: Serialize + DeserializeOwned + Clone + Send + Sync;

    fn to_plain_object(&self) -> Self::Plain;

    fn from_plain_object(plain: Self::Plain) -> DomainResult<Self>;
}

/// 仓储用于重建实体的工厂函数
pub type EntityFactory<E> = fn(<E as PlainObject>::Plain) -> DomainResult<E>;

/// 跨实体类型的判等：类型名与标识的字符串形式均相同才相等
pub fn same_entity<A, B>(a: &A, b: &B) -> bool
where
    A: Entity,
    B: Entity,
{
    A::TYPE == B::TYPE && a.id().to_string() == b.id().to_string()
}

//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::{fmt, str::FromStr};

use catalog_macros::value_object;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 唯一标识（UUID 字符串）
///
/// 只接受规范的连字符形式（`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`），
/// 保留调用方传入的原始字符串，构造后不可变。
///
/// # 示例
///
/// ```
/// use catalog_domain::value_object::UniqueId;
///
/// let id = UniqueId::parse("123e4567-e89b-12d3-a456-426614174000").unwrap();
/// assert_eq!(id.as_str(), "123e4567-e89b-12d3-a456-426614174000");
///
/// assert!(UniqueId::parse("not-a-uuid").is_err());
/// ```
#[value_object]
#[serde(try_from = "String", into = "String")]
pub struct UniqueId(String);

impl UniqueId {
    /// 生成新的随机标识（UUID v4）
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 解析并校验给定字符串
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let id = Self(value.into());
        id.validate()?;
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for UniqueId {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        // try_parse 同时接受 simple/braced/urn 形式，长度限定为连字符形式
        if self.0.len() != 36 || Uuid::try_parse(&self.0).is_err() {
            return Err(DomainError::InvalidIdentifier(format!(
                "ID {} must be a valid UUID",
                self.0
            )));
        }
        Ok(())
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UniqueId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UniqueId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<UniqueId> for String {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

impl From<Uuid> for UniqueId {
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl AsRef<str> for UniqueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试缺省构造生成合法标识
    #[test]
    fn test_unique_id_new_is_valid() {
        let id = UniqueId::new();
        assert!(id.validate().is_ok());
        assert_eq!(id.as_str().len(), 36);
        assert_ne!(UniqueId::new(), UniqueId::default());
    }

    // 测试非法字符串
    #[test]
    fn test_unique_id_rejects_invalid() {
        for raw in [
            "",
            "fake id",
            "123e4567e89b12d3a456426614174000",
            "{123e4567-e89b-12d3-a456-426614174000}",
            "123e4567-e89b-12d3-a456-42661417400z",
        ] {
            let err = UniqueId::parse(raw).unwrap_err();
            assert!(matches!(err, DomainError::InvalidIdentifier(_)), "{raw}");
        }
    }

    // 测试按值相等
    #[test]
    fn test_unique_id_value_equality() {
        let a = UniqueId::parse("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let b: UniqueId = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    }

    // 测试序列化为原始字符串，反序列化时校验
    #[test]
    fn test_unique_id_serde() {
        let id = UniqueId::parse("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123e4567-e89b-12d3-a456-426614174000\"");

        let back: UniqueId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<UniqueId>("\"oops\"").is_err());
    }

    #[test]
    fn test_unique_id_from_uuid() {
        let raw = Uuid::new_v4();
        let id = UniqueId::from(raw);
        assert_eq!(id.as_str(), raw.to_string());
    }
}

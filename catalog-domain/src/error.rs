//! 目录领域的错误类型
//!
//! 覆盖标识解析、实体校验、仓储查找与存储后端四类错误，
//! 各适配器的底层错误在边界处转换为 `DomainError`。
//!
use crate::validator::FieldErrors;
use thiserror::Error;

/// 领域层错误
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值对象 ---
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    // --- 实体校验 ---
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    // --- 仓储/持久化 ---
    #[error("{entity} not found using id {}", join_ids(.ids))]
    EntityNotFound {
        entity: &'static str,
        ids: Vec<String>,
    },
    #[error("storage error: {reason}")]
    Storage { reason: String },
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::EntityNotFound {
            entity,
            ids: vec![id.to_string()],
        }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage {
            reason: reason.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// 实体校验失败：携带完整的 字段 -> 错误信息 映射
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity validation failed: {}", describe(.errors))]
pub struct EntityValidationError {
    errors: FieldErrors,
}

impl EntityValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// 指定字段的错误信息（按规则声明顺序）
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

fn join_ids(ids: &[String]) -> String {
    ids.join(", ")
}

fn describe(errors: &FieldErrors) -> String {
    errors
        .values()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

// ---- 外部错误转换 ----

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::InvalidIdentifier(err.to_string())
    }
}

#[cfg(feature = "infra-sqlx")]
impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Storage {
            reason: err.to_string(),
        }
    }
}

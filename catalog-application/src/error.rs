use catalog_domain::error::{DomainError, EntityValidationError};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// 输入未通过实体校验（可修正后重试）
    #[error("validation: {0}")]
    Validation(EntityValidationError),

    #[error("{entity} not found: {}", join_ids(.ids))]
    NotFound {
        entity: &'static str,
        ids: Vec<String>,
    },

    #[error("domain: {0}")]
    Domain(DomainError),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::Validation(e),
            DomainError::EntityNotFound { entity, ids } => AppError::NotFound { entity, ids },
            other => AppError::Domain(other),
        }
    }
}

impl From<EntityValidationError> for AppError {
    fn from(err: EntityValidationError) -> Self {
        AppError::Validation(err)
    }
}

fn join_ids(ids: &[String]) -> String {
    ids.join(", ")
}

use crate::{dto::Dto, error::AppError};
use async_trait::async_trait;

/// 应用层用例
///
/// 编排领域对象与仓储完成一次调用，返回 [`Dto`](crate::dto::Dto)。
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output: Dto;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, AppError>;
}

use crate::{error::AppError, use_case::UseCase};
use async_trait::async_trait;
use catalog_domain::{
    category_repository::CategoryRepository, persist::Repository, value_object::UniqueId,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DeleteCategoryInput {
    pub id: String,
}

pub struct DeleteCategoryUseCase<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> DeleteCategoryUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UseCase for DeleteCategoryUseCase<R>
where
    R: CategoryRepository + ?Sized,
{
    type Input = DeleteCategoryInput;
    type Output = ();

    async fn execute(&self, input: DeleteCategoryInput) -> Result<(), AppError> {
        let id = UniqueId::parse(input.id)?;
        self.repo.delete(&id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}

use crate::{dto::CategoryOutput, error::AppError, use_case::UseCase};
use async_trait::async_trait;
use catalog_domain::{
    category::Category, category_repository::CategoryRepository, entity::Entity,
    error::DomainError, persist::Repository, value_object::UniqueId,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GetCategoryInput {
    pub id: String,
}

pub struct GetCategoryUseCase<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> GetCategoryUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UseCase for GetCategoryUseCase<R>
where
    R: CategoryRepository + ?Sized,
{
    type Input = GetCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: GetCategoryInput) -> Result<CategoryOutput, AppError> {
        let id = UniqueId::parse(input.id)?;
        let category = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::TYPE, &id))?;

        Ok(CategoryOutput::from(category))
    }
}

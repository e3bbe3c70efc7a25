use crate::{dto::CategoryOutput, error::AppError, use_case::UseCase};
use async_trait::async_trait;
use bon::Builder;
use catalog_domain::{
    category::Category, category_repository::CategoryRepository, entity::Entity,
    error::DomainError, persist::Repository, value_object::UniqueId,
};
use std::sync::Arc;

/// 仅更新给出的字段；`description` 为 `Some(None)` 时清空描述
#[derive(Debug, Clone, Builder)]
pub struct UpdateCategoryInput {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

pub struct UpdateCategoryUseCase<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> UpdateCategoryUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UseCase for UpdateCategoryUseCase<R>
where
    R: CategoryRepository + ?Sized,
{
    type Input = UpdateCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: UpdateCategoryInput) -> Result<CategoryOutput, AppError> {
        let id = UniqueId::parse(input.id)?;
        let mut category = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::TYPE, &id))?;

        if let Some(name) = input.name {
            category.change_name(name)?;
        }
        if let Some(description) = input.description {
            category.change_description(description)?;
        }
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.repo.update(category.clone()).await?;
        tracing::info!(category_id = %id, "category updated");

        Ok(CategoryOutput::from(category))
    }
}

use crate::{dto::CategoryOutput, error::AppError, use_case::UseCase};
use async_trait::async_trait;
use bon::Builder;
use catalog_domain::{
    category::{Category, CategoryProps},
    category_repository::CategoryRepository,
    entity::Entity,
    persist::Repository,
};
use std::sync::Arc;

#[derive(Debug, Clone, Builder)]
pub struct CreateCategoryInput {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub struct CreateCategoryUseCase<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> CreateCategoryUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UseCase for CreateCategoryUseCase<R>
where
    R: CategoryRepository + ?Sized,
{
    type Input = CreateCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: CreateCategoryInput) -> Result<CategoryOutput, AppError> {
        let category = Category::create(
            CategoryProps::builder()
                .name(input.name)
                .maybe_description(input.description)
                .maybe_is_active(input.is_active)
                .build(),
        )?;

        self.repo.insert(category.clone()).await?;
        tracing::info!(category_id = %category.id(), "category created");

        Ok(CategoryOutput::from(category))
    }
}

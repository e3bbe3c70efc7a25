use crate::{dto::CategoryOutput, error::AppError, use_case::UseCase};
use async_trait::async_trait;
use bon::Builder;
use catalog_domain::{
    category_repository::CategoryRepository,
    persist::{SearchParams, SearchResult, SearchableRepository},
};
use std::sync::Arc;

/// 未经归一化的查询输入（通常来自查询字符串）
#[derive(Debug, Clone, Default, Builder)]
pub struct ListCategoriesInput {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    #[builder(into)]
    pub sort: Option<String>,
    #[builder(into)]
    pub sort_dir: Option<String>,
    #[builder(into)]
    pub filter: Option<String>,
}

pub struct ListCategoriesUseCase<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> ListCategoriesUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UseCase for ListCategoriesUseCase<R>
where
    R: CategoryRepository + ?Sized,
{
    type Input = ListCategoriesInput;
    type Output = SearchResult<CategoryOutput>;

    async fn execute(
        &self,
        input: ListCategoriesInput,
    ) -> Result<SearchResult<CategoryOutput>, AppError> {
        let params = SearchParams::builder()
            .maybe_page(input.page)
            .maybe_per_page(input.per_page)
            .maybe_sort(input.sort)
            .maybe_sort_dir(input.sort_dir)
            .maybe_filter(input.filter)
            .build();

        let result = self.repo.search(params).await?;
        tracing::debug!(
            total = result.total(),
            page = result.current_page(),
            "categories listed"
        );

        Ok(result.map(CategoryOutput::from))
    }
}

use catalog_application::category::{
    CreateCategoryInput, DeleteCategoryInput, ListCategoriesInput, UpdateCategoryInput,
};
use catalog_application::error::AppError;
use catalog_application::use_case::UseCase;
use catalog_application::{
    CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase, UpdateCategoryUseCase,
};
use catalog_domain::category_repository::{CategoryInMemoryRepository, CategoryRepository};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let repo: Arc<dyn CategoryRepository> = Arc::new(CategoryInMemoryRepository::default());

    let create = CreateCategoryUseCase::new(Arc::clone(&repo));
    let mut ids = Vec::new();
    for (name, description) in [
        ("Movie", Some("Feature films")),
        ("Documentary", None),
        ("Music", Some("Concerts and clips")),
    ] {
        let output = create
            .execute(
                CreateCategoryInput::builder()
                    .name(name)
                    .maybe_description(description)
                    .build(),
            )
            .await?;
        ids.push(output.id);
    }

    match create
        .execute(CreateCategoryInput::builder().name("").build())
        .await
    {
        Err(AppError::Validation(err)) => {
            tracing::warn!(errors = ?err.errors(), "rejected invalid category");
        }
        other => anyhow::bail!("expected a validation error, got {other:?}"),
    }

    if let Some(id) = ids.first() {
        UpdateCategoryUseCase::new(Arc::clone(&repo))
            .execute(
                UpdateCategoryInput::builder()
                    .id(id.clone())
                    .name("Film")
                    .is_active(false)
                    .build(),
            )
            .await?;
    }

    if let Some(id) = ids.last() {
        DeleteCategoryUseCase::new(Arc::clone(&repo))
            .execute(DeleteCategoryInput { id: id.clone() })
            .await?;
    }

    let page = ListCategoriesUseCase::new(Arc::clone(&repo))
        .execute(ListCategoriesInput::builder().sort("name").per_page(10).build())
        .await?;

    for category in page.items() {
        tracing::info!(
            id = %category.id,
            name = %category.name,
            active = category.is_active,
            "category"
        );
    }
    tracing::info!(
        total = page.total(),
        last_page = page.last_page(),
        "listing complete"
    );

    Ok(())
}

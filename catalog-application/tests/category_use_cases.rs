use catalog_application::category::{
    CreateCategoryInput, DeleteCategoryInput, GetCategoryInput, ListCategoriesInput,
    UpdateCategoryInput,
};
use catalog_application::error::AppError;
use catalog_application::use_case::UseCase;
use catalog_application::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};
use catalog_domain::category_repository::{CategoryInMemoryRepository, CategoryRepository};
use catalog_domain::error::DomainError;
use catalog_domain::value_object::UniqueId;
use std::sync::Arc;

fn repository() -> Arc<CategoryInMemoryRepository> {
    Arc::new(CategoryInMemoryRepository::default())
}

async fn seed(repo: &Arc<CategoryInMemoryRepository>, name: &str) -> String {
    CreateCategoryUseCase::new(Arc::clone(repo))
        .execute(CreateCategoryInput::builder().name(name).build())
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn create_persists_valid_category() {
    let repo = repository();
    let output = CreateCategoryUseCase::new(Arc::clone(&repo))
        .execute(
            CreateCategoryInput::builder()
                .name("Movie")
                .description("Movies")
                .is_active(false)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(output.name, "Movie");
    assert_eq!(output.description.as_deref(), Some("Movies"));
    assert!(!output.is_active);
    assert!(UniqueId::parse(output.id.as_str()).is_ok());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn create_rejects_invalid_name_without_persisting() {
    let repo = repository();
    let err = CreateCategoryUseCase::new(Arc::clone(&repo))
        .execute(CreateCategoryInput::builder().name("").build())
        .await
        .unwrap_err();

    match err {
        AppError::Validation(e) => assert!(e.errors().contains_key("name")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn get_returns_stored_category() {
    let repo = repository();
    let id = seed(&repo, "Movie").await;

    let output = GetCategoryUseCase::new(Arc::clone(&repo))
        .execute(GetCategoryInput { id: id.clone() })
        .await
        .unwrap();
    assert_eq!(output.id, id);
    assert_eq!(output.name, "Movie");
}

#[tokio::test]
async fn get_reports_missing_and_malformed_ids() {
    let repo = repository();
    let use_case = GetCategoryUseCase::new(Arc::clone(&repo));

    let err = use_case
        .execute(GetCategoryInput {
            id: UniqueId::new().to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "category", .. }));

    let err = use_case
        .execute(GetCategoryInput {
            id: "fake id".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::InvalidIdentifier(_))
    ));
}

#[tokio::test]
async fn update_applies_only_given_fields() {
    let repo = repository();
    let id = seed(&repo, "Movie").await;
    let use_case = UpdateCategoryUseCase::new(Arc::clone(&repo));

    let output = use_case
        .execute(
            UpdateCategoryInput::builder()
                .id(id.clone())
                .description(Some("Movies".to_string()))
                .is_active(false)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(output.name, "Movie");
    assert_eq!(output.description.as_deref(), Some("Movies"));
    assert!(!output.is_active);

    let output = use_case
        .execute(
            UpdateCategoryInput::builder()
                .id(id.clone())
                .name("Film")
                .description(None)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(output.name, "Film");
    assert_eq!(output.description, None);
    assert!(!output.is_active);
}

#[tokio::test]
async fn update_with_invalid_name_leaves_store_untouched() {
    let repo = repository();
    let id = seed(&repo, "Movie").await;

    let err = UpdateCategoryUseCase::new(Arc::clone(&repo))
        .execute(UpdateCategoryInput::builder().id(id.clone()).name("").build())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let stored = GetCategoryUseCase::new(Arc::clone(&repo))
        .execute(GetCategoryInput { id })
        .await
        .unwrap();
    assert_eq!(stored.name, "Movie");
}

#[tokio::test]
async fn delete_removes_and_then_reports_not_found() {
    let repo = repository();
    let id = seed(&repo, "Movie").await;
    let use_case = DeleteCategoryUseCase::new(Arc::clone(&repo));

    use_case
        .execute(DeleteCategoryInput { id: id.clone() })
        .await
        .unwrap();
    assert!(repo.is_empty().await);

    let err = use_case
        .execute(DeleteCategoryInput { id })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn list_normalizes_input_and_serializes_page() {
    let repo = repository();
    for name in ["b", "a", "c"] {
        seed(&repo, name).await;
    }

    let dyn_repo: Arc<dyn CategoryRepository> = repo;
    let result = ListCategoriesUseCase::new(dyn_repo)
        .execute(
            ListCategoriesInput::builder()
                .page(-1)
                .per_page(2)
                .sort("name")
                .sort_dir("desc")
                .build(),
        )
        .await
        .unwrap();

    let names: Vec<&str> = result.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b"]);
    assert_eq!(result.total(), 3);
    assert_eq!(result.current_page(), 1);
    assert_eq!(result.last_page(), 2);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["per_page"], 2);
    assert_eq!(json["items"][0]["name"], "c");
}

#[tokio::test]
async fn list_filters_by_name() {
    let repo = repository();
    for name in ["Action Movie", "Music", "Horror Movie"] {
        seed(&repo, name).await;
    }

    let result = ListCategoriesUseCase::new(Arc::clone(&repo))
        .execute(
            ListCategoriesInput::builder()
                .filter("MOVIE")
                .sort("name")
                .build(),
        )
        .await
        .unwrap();

    let names: Vec<&str> = result.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Action Movie", "Horror Movie"]);
}

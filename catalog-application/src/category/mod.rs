//! Category 用例
//!
mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateCategoryInput, CreateCategoryUseCase};
pub use delete::{DeleteCategoryInput, DeleteCategoryUseCase};
pub use get::{GetCategoryInput, GetCategoryUseCase};
pub use list::{ListCategoriesInput, ListCategoriesUseCase};
pub use update::{UpdateCategoryInput, UpdateCategoryUseCase};

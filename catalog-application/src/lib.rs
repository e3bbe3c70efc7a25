pub mod category;
pub mod dto;
pub mod error;
pub mod use_case;

pub use category::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};

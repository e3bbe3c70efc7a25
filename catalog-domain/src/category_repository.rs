//! Category 仓储契约与内存查询规则
//!
use crate::{category::Category, persist::SearchableRepository};

/// Category 仓储：过滤条件为名称片段
pub trait CategoryRepository: SearchableRepository<Category, String> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, String> + ?Sized {}

#[cfg(feature = "inmemory")]
pub use inmemory::{CategoryInMemoryRepository, CategorySearchPolicy};

#[cfg(feature = "inmemory")]
mod inmemory {
    use std::cmp::Ordering;

    use crate::{
        category::Category,
        persist::{InMemoryRepository, SearchPolicy},
    };

    pub type CategoryInMemoryRepository = InMemoryRepository<Category, CategorySearchPolicy>;

    /// - 可排序字段：`name`、`created_at`
    /// - 过滤：名称包含（忽略大小写），空白过滤条件视为未过滤
    /// - 默认顺序：`created_at` 降序
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CategorySearchPolicy;

    impl SearchPolicy<Category> for CategorySearchPolicy {
        type Filter = String;

        fn sortable_fields(&self) -> &[&'static str] {
            &["name", "created_at"]
        }

        fn apply_filter(&self, items: Vec<Category>, filter: Option<&String>) -> Vec<Category> {
            let Some(needle) = filter.map(|f| f.trim().to_lowercase()).filter(|f| !f.is_empty())
            else {
                return items;
            };
            items
                .into_iter()
                .filter(|c| c.name().to_lowercase().contains(&needle))
                .collect()
        }

        fn compare(&self, field: &str, a: &Category, b: &Category) -> Ordering {
            match field {
                "name" => a.name().cmp(b.name()),
                "created_at" => a.created_at().cmp(&b.created_at()),
                _ => Ordering::Equal,
            }
        }

        fn default_order(&self, a: &Category, b: &Category) -> Ordering {
            b.created_at().cmp(&a.created_at())
        }
    }
}

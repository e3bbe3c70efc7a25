//! 持久化协议（persist）
//!
//! 定义仓储契约与查询的请求/响应模型：
//! - 增删改查与批量插入（`Repository`）；
//! - 分页/排序/过滤查询（`SearchableRepository`、`SearchParams`、`SearchResult`）；
//! - 基于内存的通用实现（`InMemoryRepository`，需启用 `inmemory` 特性）。
//!
//! 该模块聚焦协议，具体存储后端（如 Postgres）由上层提供实现并注入。
//!
#[cfg(feature = "inmemory")]
mod inmemory_repository;
mod repository;
mod search_params;
mod search_result;

#[cfg(feature = "inmemory")]
pub use inmemory_repository::{InMemoryRepository, SearchPolicy};
pub use repository::{Repository, SearchableRepository};
pub use search_params::{DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchParams, SortDirection};
pub use search_result::SearchResult;

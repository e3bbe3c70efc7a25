//! 目录领域层基础库（catalog-domain）
//!
//! 提供以 DDD 为中心的通用抽象与构件：
//! - 值对象（`value_object`）与唯一标识 `UniqueId`
//! - 实体（`entity`）：按标识判等与普通数据投影
//! - 字段校验引擎（`validator`）：显式规则表，一次收集全部违规
//! - Category 实体及其校验器（`category`、`category_validator`）
//! - 仓储契约与分页查询模型（`persist`）
//!
//! 本 crate 不绑定任何存储或传输实现，仅定义领域层接口与最小必要的错误类型；
//! `inmemory` 特性提供一个基于内存的参考适配器。
//!
//! 典型用法：
//! 1. 通过 `Category::create` 构造并校验实体；
//! 2. 交给 `Repository` 实现持久化；
//! 3. 使用 `SearchParams` 调用 `SearchableRepository::search` 获取 `SearchResult`。
//!
pub mod category;
pub mod category_repository;
pub mod category_validator;
pub mod entity;
pub mod error;
pub mod persist;
pub mod validator;
pub mod value_object;

// 允许在本 crate 内部通过 ::catalog_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内也能解析。
extern crate self as catalog_domain;

//! 仓储协议
//!
//! 定义任何持久化后端都必须满足的契约：
//! - `Repository`：增删改查与批量插入；
//! - `SearchableRepository`：在其上增加分页/排序/过滤查询。
//!
use crate::{
    entity::{EntityFactory, PlainObject},
    error::DomainResult as Result,
    persist::{SearchParams, SearchResult},
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: PlainObject,
{
    async fn insert(&self, entity: E) -> Result<()>;

    /// 全部成功或全部失败
    async fn bulk_insert(&self, entities: Vec<E>) -> Result<()>;

    /// 标识不存在时返回 `EntityNotFound`
    async fn update(&self, entity: E) -> Result<()>;

    /// 标识不存在时返回 `EntityNotFound`
    async fn delete(&self, id: &E::Id) -> Result<()>;

    /// 不存在不是错误
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>>;

    async fn find_all(&self) -> Result<Vec<E>>;

    /// 供通用基础设施（如数据映射）重建实体
    fn entity_factory(&self) -> EntityFactory<E> {
        E::from_plain_object
    }
}

/// 可查询仓储
///
/// - `sortable_fields` 为排序白名单：不在其中的排序字段被忽略（不报错），
///   回落到实现自定义但稳定的默认顺序；
/// - 按可排序字段排序时，以标识作为次序键保证全序。
#[async_trait]
pub trait SearchableRepository<E, F = String>: Repository<E>
where
    E: PlainObject,
    F: Send + Sync + 'static,
{
    fn sortable_fields(&self) -> &[&'static str];

    async fn search(&self, params: SearchParams<F>) -> Result<SearchResult<E>>;
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: PlainObject + 'static,
    T: Repository<E> + ?Sized,
{
    async fn insert(&self, entity: E) -> Result<()> {
        (**self).insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> Result<()> {
        (**self).bulk_insert(entities).await
    }

    async fn update(&self, entity: E) -> Result<()> {
        (**self).update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> Result<()> {
        (**self).delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        (**self).find_all().await
    }

    fn entity_factory(&self) -> EntityFactory<E> {
        (**self).entity_factory()
    }
}

#[async_trait]
impl<E, F, T> SearchableRepository<E, F> for Arc<T>
where
    E: PlainObject + 'static,
    F: Send + Sync + 'static,
    T: SearchableRepository<E, F> + ?Sized,
{
    fn sortable_fields(&self) -> &[&'static str] {
        (**self).sortable_fields()
    }

    async fn search(&self, params: SearchParams<F>) -> Result<SearchResult<E>> {
        (**self).search(params).await
    }
}

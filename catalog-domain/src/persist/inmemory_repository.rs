//! 内存仓储适配器
//!
//! 以 `Vec` 保存实体（保持插入顺序），通过 `SearchPolicy` 注入过滤与排序规则。
//! 写操作在同一把写锁内完成，批量插入先整体校验再提交。
//!
use std::{cmp::Ordering, collections::HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    entity::{Entity, PlainObject},
    error::{DomainError, DomainResult as Result},
    persist::{Repository, SearchParams, SearchResult, SearchableRepository, SortDirection},
};

/// 内存仓储的查询规则
pub trait SearchPolicy<E>: Send + Sync {
    /// 过滤条件类型
    type Filter: Send + Sync + 'static;

    /// 排序字段白名单
    fn sortable_fields(&self) -> &[&'static str];

    /// 按过滤条件筛选；`filter` 为 `None` 时原样返回
    fn apply_filter(&self, items: Vec<E>, filter: Option<&Self::Filter>) -> Vec<E>;

    /// 按白名单内字段升序比较
    fn compare(&self, field: &str, a: &E, b: &E) -> Ordering;

    /// 未指定（或指定了不可排序）字段时的默认顺序
    fn default_order(&self, a: &E, b: &E) -> Ordering;
}

pub struct InMemoryRepository<E, P> {
    items: RwLock<Vec<E>>,
    policy: P,
}

impl<E, P> InMemoryRepository<E, P> {
    pub fn new(policy: P) -> Self {
        Self::with_items(policy, Vec::new())
    }

    pub fn with_items(policy: P, items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<E, P: Default> Default for InMemoryRepository<E, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

fn by_identity<E: Entity>(a: &E, b: &E) -> Ordering {
    a.id().to_string().cmp(&b.id().to_string())
}

fn already_exists<E: Entity>(ids: &[String]) -> DomainError {
    DomainError::storage(format!(
        "{} already exists using id {}",
        E::TYPE,
        ids.join(", ")
    ))
}

#[async_trait]
impl<E, P> Repository<E> for InMemoryRepository<E, P>
where
    E: PlainObject + Clone + 'static,
    P: Send + Sync,
{
    async fn insert(&self, entity: E) -> Result<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|e| e.id() == entity.id()) {
            return Err(already_exists::<E>(&[entity.id().to_string()]));
        }
        tracing::debug!(entity = E::TYPE, id = %entity.id(), "insert");
        items.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> Result<()> {
        let mut items = self.items.write().await;

        let mut seen: HashSet<String> = items.iter().map(|e| e.id().to_string()).collect();
        let conflicts: Vec<String> = entities
            .iter()
            .map(|e| e.id().to_string())
            .filter(|id| !seen.insert(id.clone()))
            .collect();
        if !conflicts.is_empty() {
            return Err(already_exists::<E>(&conflicts));
        }

        tracing::debug!(entity = E::TYPE, count = entities.len(), "bulk insert");
        items.extend(entities);
        Ok(())
    }

    async fn update(&self, entity: E) -> Result<()> {
        let mut items = self.items.write().await;
        let Some(slot) = items.iter_mut().find(|e| e.id() == entity.id()) else {
            return Err(DomainError::not_found(E::TYPE, entity.id()));
        };
        tracing::debug!(entity = E::TYPE, id = %entity.id(), "update");
        *slot = entity;
        Ok(())
    }

    async fn delete(&self, id: &E::Id) -> Result<()> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|e| e.id() == id) else {
            return Err(DomainError::not_found(E::TYPE, id));
        };
        tracing::debug!(entity = E::TYPE, id = %id, "delete");
        items.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.items.read().await.clone())
    }
}

#[async_trait]
impl<E, P> SearchableRepository<E, P::Filter> for InMemoryRepository<E, P>
where
    E: PlainObject + Clone + 'static,
    P: SearchPolicy<E>,
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.policy.sortable_fields()
    }

    async fn search(&self, params: SearchParams<P::Filter>) -> Result<SearchResult<E>> {
        let snapshot = self.items.read().await.clone();
        let mut matched = self.policy.apply_filter(snapshot, params.filter());

        let sort = params
            .sort()
            .filter(|field| self.policy.sortable_fields().iter().any(|f| f == field));

        match sort {
            Some(field) => matched.sort_by(|a, b| {
                let ord = self.policy.compare(field, a, b);
                let ord = match params.sort_dir() {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                };
                ord.then_with(|| by_identity(a, b))
            }),
            None => matched.sort_by(|a, b| {
                self.policy
                    .default_order(a, b)
                    .then_with(|| by_identity(a, b))
            }),
        }

        let total = matched.len();
        let items: Vec<E> = matched
            .into_iter()
            .skip(params.offset())
            .take(params.per_page())
            .collect();

        tracing::debug!(
            entity = E::TYPE,
            page = params.page(),
            per_page = params.per_page(),
            sort = ?sort,
            sort_dir = %params.sort_dir(),
            total,
            "search"
        );

        Ok(SearchResult::new(items, total, params.page(), params.per_page()))
    }
}

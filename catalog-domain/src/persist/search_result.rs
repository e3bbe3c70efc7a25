//! 查询结果（SearchResult）
//!
use serde::Serialize;

use crate::entity::PlainObject;

/// 一次查询的结果页：当前页条目、过滤后总数与派生的末页页码
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: usize, current_page: usize, per_page: usize) -> Self {
        // per_page 为 0 时末页定义为 0
        let last_page = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// 转换条目类型，分页信息保持不变
    pub fn map<U>(self, f: impl FnMut(E) -> U) -> SearchResult<U> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

impl<E: PlainObject> SearchResult<E> {
    /// 以普通数据快照呈现，便于直接序列化
    pub fn to_plain(&self) -> SearchResult<E::Plain> {
        SearchResult {
            items: self.items.iter().map(PlainObject::to_plain_object).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

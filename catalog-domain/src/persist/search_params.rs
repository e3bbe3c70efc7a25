//! 查询请求（SearchParams）
//!
//! 构造时归一化：非法或非正的页码/页大小回落为默认值，从不报错；
//! 构造完成后不可变。
//!
use std::fmt;

use bon::bon;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 15;

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// 仅精确的 "desc" 解析为降序，其余（包括 "DESC"）一律升序
    pub fn parse(raw: &str) -> Self {
        if raw == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// 分页、排序与过滤条件
///
/// `filter` 对本类型不透明，由仓储的 search 实现解释。
///
/// ```
/// use catalog_domain::persist::{SearchParams, SortDirection};
///
/// let params: SearchParams = SearchParams::builder()
///     .page(-1)
///     .per_page(0)
///     .sort("name")
///     .sort_dir("DESC")
///     .build();
/// assert_eq!(params.page(), 1);
/// assert_eq!(params.per_page(), 15);
/// assert_eq!(params.sort(), Some("name"));
/// assert_eq!(params.sort_dir(), SortDirection::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams<F = String> {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_dir: SortDirection,
    filter: Option<F>,
}

#[bon]
impl<F> SearchParams<F> {
    #[builder]
    pub fn new(
        page: Option<i64>,
        per_page: Option<i64>,
        #[builder(into)] sort: Option<String>,
        #[builder(into)] sort_dir: Option<String>,
        filter: Option<F>,
    ) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            per_page: positive_or(per_page, DEFAULT_PER_PAGE),
            sort: sort.filter(|s| !s.is_empty()),
            sort_dir: sort_dir
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
            filter,
        }
    }
}

impl<F> SearchParams<F> {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// 当前页第一条记录的偏移量
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_dir: SortDirection::Asc,
            filter: None,
        }
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    value
        .and_then(|v| usize::try_from(v).ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

//! Category 实体
//!
//! - `new` 从（可信）属性集重建实体，不触发校验；
//! - `create` 构造后立即校验一次；
//! - `change_name`/`change_description` 先在副本上修改并整体校验，通过后才提交；
//! - `activate`/`deactivate` 直接翻转状态，不校验。
//!
use bon::Builder;
use catalog_macros::entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    category_validator::CategoryValidatorFactory,
    entity::{Entity, PlainObject},
    error::{DomainResult, EntityValidationError},
    validator::FieldErrors,
    value_object::UniqueId,
};

pub const CATEGORY_NAME_MAX_LEN: usize = 255;

#[entity(name = "category")]
pub struct Category {
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    errors: Option<FieldErrors>,
}

/// Category 的部分属性集，缺省字段按实体默认值补齐
#[derive(Debug, Clone, Default, Builder)]
pub struct CategoryProps {
    id: Option<UniqueId>,
    #[builder(into)]
    name: Option<String>,
    #[builder(into)]
    description: Option<String>,
    is_active: Option<bool>,
    created_at: Option<DateTime<Utc>>,
}

/// Category 的普通数据快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPlain {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(props: CategoryProps) -> Self {
        Self {
            id: props.id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
            errors: None,
        }
    }

    pub fn create(props: CategoryProps) -> Result<Self, EntityValidationError> {
        let category = Self::new(props);
        Self::validate(&category)?;
        Ok(category)
    }

    /// 全量校验；`create` 与各修改方法共用的唯一校验入口
    pub fn validate(category: &Category) -> Result<(), EntityValidationError> {
        #[cfg(test)]
        tests::record_validate_call();

        let mut validator = CategoryValidatorFactory::create();
        if validator.validate(category) {
            return Ok(());
        }

        let errors = validator.take_errors().unwrap_or_default();
        tracing::debug!(
            category_id = %category.id,
            fields = ?errors.keys().collect::<Vec<_>>(),
            "category validation failed"
        );
        Err(EntityValidationError::new(errors))
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let mut candidate = self.clone();
        candidate.name = Some(name.into());
        self.commit(candidate)
    }

    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let mut candidate = self.clone();
        candidate.description = description;
        self.commit(candidate)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    // 校验失败时保留原字段值，仅记录错误
    fn commit(&mut self, candidate: Category) -> Result<(), EntityValidationError> {
        match Self::validate(&candidate) {
            Ok(()) => {
                *self = candidate;
                self.errors = None;
                Ok(())
            }
            Err(err) => {
                self.errors = Some(err.errors().clone());
                Err(err)
            }
        }
    }

    /// 名称；未设置时为空串
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    // 校验投影需要区分“未设置”与空串
    pub(crate) fn name_value(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 最近一次失败的修改所记录的校验错误
    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }
}

impl PlainObject for Category {
    type Plain = CategoryPlain;

    fn to_plain_object(&self) -> CategoryPlain {
        CategoryPlain {
            id: self.id().to_string(),
            name: self.name().to_owned(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    fn from_plain_object(plain: CategoryPlain) -> DomainResult<Self> {
        Ok(Self::new(CategoryProps {
            id: Some(UniqueId::parse(plain.id)?),
            name: Some(plain.name),
            description: plain.description,
            is_active: Some(plain.is_active),
            created_at: Some(plain.created_at),
        }))
    }
}

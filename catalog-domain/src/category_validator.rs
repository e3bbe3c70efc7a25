//! Category 的规则表与校验器
//!
use serde_json::{Value, json};

use crate::{
    category::{CATEGORY_NAME_MAX_LEN, Category},
    validator::{FieldErrors, Rule, RuleSet, ValidatorFields},
};

/// Category 公开字段的约束与数据投影
pub struct CategoryRules;

impl CategoryRules {
    pub fn rule_set() -> RuleSet {
        RuleSet::new()
            .field(
                "name",
                [
                    Rule::NotEmpty,
                    Rule::IsString,
                    Rule::MaxLength(CATEGORY_NAME_MAX_LEN),
                ],
            )
            .field("description", [Rule::Optional, Rule::IsString])
            .field("is_active", [Rule::Required, Rule::IsBoolean])
    }

    /// 将实体当前字段值投影为普通数据对象
    pub fn project(category: &Category) -> Value {
        json!({
            "name": category.name_value(),
            "description": category.description(),
            "is_active": category.is_active(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CategoryValidator {
    inner: ValidatorFields,
}

impl CategoryValidator {
    pub fn validate(&mut self, category: &Category) -> bool {
        self.inner.validate(&CategoryRules::project(category))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        self.inner.errors()
    }

    pub fn take_errors(&mut self) -> Option<FieldErrors> {
        self.inner.take_errors()
    }
}

pub struct CategoryValidatorFactory;

impl CategoryValidatorFactory {
    pub fn create() -> CategoryValidator {
        CategoryValidator {
            inner: ValidatorFields::new(CategoryRules::rule_set()),
        }
    }
}

//! 字段校验引擎（ValidatorFields）
//!
//! 以显式规则表（字段名 -> 有序规则列表）描述约束，对实体的普通数据投影
//! （`serde_json::Value` 对象）逐字段、逐规则求值：
//! - 不在首个失败处短路，所有字段的所有违规信息一次性收集；
//! - 错误按字段名分组，组内按规则声明顺序排列；
//! - 每次校验覆盖（而非合并）上一次的结果。
//!
use std::collections::BTreeMap;

use serde_json::Value;

/// 字段名 -> 错误信息列表
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// 单条声明式约束
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 值不能为 null/缺失
    Required,
    /// 值为 null/缺失时跳过该字段其余规则
    Optional,
    /// 值不能为 null/缺失/空字符串
    NotEmpty,
    IsString,
    IsBoolean,
    /// 字符串长度（按字符计）不超过上限
    MaxLength(usize),
}

impl Rule {
    /// 违规时返回错误信息
    fn check(&self, field: &str, value: &Value) -> Option<String> {
        let ok = match self {
            Rule::Required | Rule::Optional => !value.is_null(),
            Rule::NotEmpty => !(value.is_null() || value.as_str() == Some("")),
            Rule::IsString => value.is_string(),
            Rule::IsBoolean => value.is_boolean(),
            Rule::MaxLength(max) => value.as_str().is_some_and(|s| s.chars().count() <= *max),
        };
        if ok {
            return None;
        }
        Some(match self {
            Rule::Required | Rule::Optional => format!("{field} should not be null or undefined"),
            Rule::NotEmpty => format!("{field} should not be empty"),
            Rule::IsString => format!("{field} must be a string"),
            Rule::IsBoolean => format!("{field} must be a boolean value"),
            Rule::MaxLength(max) => {
                format!("{field} must be shorter than or equal to {max} characters")
            }
        })
    }
}

/// 单个字段的规则列表
#[derive(Debug, Clone)]
pub struct FieldRules {
    field: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    fn evaluate(&self, value: &Value) -> Vec<String> {
        if self.rules.contains(&Rule::Optional) && value.is_null() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|rule| **rule != Rule::Optional)
            .filter_map(|rule| rule.check(self.field, value))
            .collect()
    }
}

/// 规则表
///
/// ```
/// use catalog_domain::validator::{Rule, RuleSet};
///
/// let rules = RuleSet::new()
///     .field("name", [Rule::NotEmpty, Rule::IsString, Rule::MaxLength(255)])
///     .field("is_active", [Rule::IsBoolean]);
/// assert_eq!(rules.fields().collect::<Vec<_>>(), vec!["name", "is_active"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules {
            field,
            rules: rules.into_iter().collect(),
        });
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.field)
    }

    /// 纯函数形式：返回全部违规信息，无违规时为空
    pub fn check(&self, data: &Value) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field_rules in &self.fields {
            let value = data.get(field_rules.field).unwrap_or(&Value::Null);
            let messages = field_rules.evaluate(value);
            if !messages.is_empty() {
                errors.insert(field_rules.field.to_string(), messages);
            }
        }
        errors
    }
}

/// 持有规则表与最近一次校验结果的校验器
///
/// 错误累加器归属于单个校验器实例，不应在并发校验间共享。
#[derive(Debug, Clone)]
pub struct ValidatorFields {
    rules: RuleSet,
    errors: Option<FieldErrors>,
}

impl ValidatorFields {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            errors: None,
        }
    }

    /// 校验普通数据投影；通过返回 `true` 并清空错误，否则记录错误并返回 `false`
    pub fn validate(&mut self, data: &Value) -> bool {
        let errors = self.rules.check(data);
        if errors.is_empty() {
            self.errors = None;
            true
        } else {
            self.errors = Some(errors);
            false
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    pub fn take_errors(&mut self) -> Option<FieldErrors> {
        self.errors.take()
    }
}

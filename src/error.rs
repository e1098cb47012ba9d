use serde::Serialize;

/// 字段错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// 缺失、类型错误或格式不符
    Format,
    /// 格式正确但语义无效 (如未来日期)
    Semantic,
}

/// 单个字段的校验错误
///
/// 序列化为 `{"type", "attribute", "msg"}`，与对外 API 错误格式一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
    #[serde(rename = "attribute")]
    pub field: String,
    #[serde(rename = "msg")]
    pub reason: String,
}

impl FieldError {
    pub fn format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::Format,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn semantic(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::Semantic,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// 服务层错误，由 api 层映射为 HTTP 状态码
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("receipt failed validation with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("invalid receipt id: {0:?}")]
    InvalidId(String),

    #[error("receipt not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_json_shape() {
        let err = FieldError::format("items[0].price", "must be in the format '0.00'");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "format",
                "attribute": "items[0].price",
                "msg": "must be in the format '0.00'",
            })
        );
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::Validation(vec![
            FieldError::format("total", "bad"),
            FieldError::semantic("purchaseDate", "future"),
        ]);
        assert_eq!(err.to_string(), "receipt failed validation with 2 error(s)");
    }
}

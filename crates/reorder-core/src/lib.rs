//! # Reorder Core
//!
//! 補貨計劃的核心資料模型與類型定義

pub mod config;
pub mod ingest;
pub mod item;
pub mod plan;

// Re-export 主要類型
pub use config::{ErrorPolicy, PlanningConfig};
pub use ingest::{parse_records, parse_records_report, IngestReport, RecordFailure};
pub use item::ItemRecord;
pub use plan::{ReorderEntry, ReorderPlan};

/// 補貨計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error("第 {index} 筆記錄不是物件")]
    NotAnObject { index: usize },

    #[error("第 {index} 筆記錄（物料 {}）缺少欄位 `{field}`", display_id(.item_id))]
    MissingField {
        index: usize,
        item_id: Option<String>,
        field: &'static str,
    },

    #[error(
        "第 {index} 筆記錄（物料 {}）欄位 `{field}` 類型錯誤，應為 {expected}",
        display_id(.item_id)
    )]
    InvalidFieldType {
        index: usize,
        item_id: Option<String>,
        field: &'static str,
        expected: &'static str,
    },

    #[error("物料 {item_id} 的批量 `batch_size` 必須為正整數，實際為 {batch_size}")]
    NonPositiveBatchSize { item_id: String, batch_size: i64 },

    #[error("物料 {item_id} 計算 `{field}` 時數值溢位")]
    Overflow { item_id: String, field: &'static str },

    #[error("無效的補貨輸入: {0}")]
    InvalidInput(String),

    #[error("無效的計劃配置: {0}")]
    InvalidConfig(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReorderError {
    /// 出錯的物料ID（若可辨識）
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::MissingField { item_id, .. } | Self::InvalidFieldType { item_id, .. } => {
                item_id.as_deref()
            }
            Self::NonPositiveBatchSize { item_id, .. } | Self::Overflow { item_id, .. } => {
                Some(item_id)
            }
            Self::NotAnObject { .. }
            | Self::InvalidInput(_)
            | Self::InvalidConfig(_)
            | Self::Json(_) => None,
        }
    }

    /// 出錯的欄位名稱（若與特定欄位相關）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidFieldType { field, .. }
            | Self::Overflow { field, .. } => Some(field),
            Self::NonPositiveBatchSize { .. } => Some(item::fields::BATCH_SIZE),
            Self::NotAnObject { .. }
            | Self::InvalidInput(_)
            | Self::InvalidConfig(_)
            | Self::Json(_) => None,
        }
    }
}

fn display_id(item_id: &Option<String>) -> &str {
    item_id.as_deref().unwrap_or("<未知>")
}

pub type Result<T> = std::result::Result<T, ReorderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_item_and_field() {
        let err = ReorderError::NonPositiveBatchSize {
            item_id: "A".to_string(),
            batch_size: 0,
        };

        let message = err.to_string();
        assert!(message.contains('A'));
        assert!(message.contains("batch_size"));
        assert_eq!(err.item_id(), Some("A"));
        assert_eq!(err.field(), Some("batch_size"));
    }

    #[test]
    fn test_missing_field_without_item_id() {
        let err = ReorderError::MissingField {
            index: 3,
            item_id: None,
            field: "item_id",
        };

        assert!(err.to_string().contains("<未知>"));
        assert_eq!(err.item_id(), None);
        assert_eq!(err.field(), Some("item_id"));
    }
}

//! 物料補貨輸入記錄

use serde::Serialize;

use crate::{ReorderError, Result};

/// 輸入記錄欄位名稱
pub mod fields {
    pub const ITEM_ID: &str = "item_id";
    pub const CURRENT_STOCK: &str = "current_stock";
    pub const FORECASTED_DEMAND: &str = "forecasted_demand";
    pub const REORDER_COST_PER_UNIT: &str = "reorder_cost_per_unit";
    pub const BATCH_SIZE: &str = "batch_size";
}

/// 單一物料的補貨輸入
///
/// 只透過 [`ItemRecord::new`] 或 [`ItemRecord::from_json_value`] 建立，後者負責欄位驗證。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    /// 物料ID（不強制唯一）
    pub item_id: String,

    /// 現有庫存（可為負）
    pub current_stock: i64,

    /// 下期預測需求
    pub forecasted_demand: i64,

    /// 單位訂購成本
    ///
    /// 僅隨記錄攜帶，不參與補貨數量計算。
    pub reorder_cost_per_unit: f64,

    /// 固定訂購批量
    pub batch_size: i64,
}

impl ItemRecord {
    /// 創建新的補貨記錄
    pub fn new(item_id: String, current_stock: i64, forecasted_demand: i64, batch_size: i64) -> Self {
        Self {
            item_id,
            current_stock,
            forecasted_demand,
            reorder_cost_per_unit: 0.0,
            batch_size,
        }
    }

    /// 建構器模式：設置單位訂購成本
    pub fn with_reorder_cost_per_unit(mut self, cost: f64) -> Self {
        self.reorder_cost_per_unit = cost;
        self
    }

    /// 檢查記錄是否可進入計算
    pub fn validate(&self) -> Result<()> {
        if self.batch_size <= 0 {
            return Err(ReorderError::NonPositiveBatchSize {
                item_id: self.item_id.clone(),
                batch_size: self.batch_size,
            });
        }
        Ok(())
    }

    /// 預測需求是否超過現有庫存
    pub fn is_short(&self) -> bool {
        self.forecasted_demand > self.current_stock
    }
}

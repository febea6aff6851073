//! 缺口計算

use reorder_core::{ItemRecord, ReorderError};

/// 缺口計算器
pub struct ShortageCalculator;

impl ShortageCalculator {
    /// 計算缺口
    ///
    /// 缺口 = max(0, 預測需求 - 現有庫存)。庫存過剩時回傳 0，永不為負。
    pub fn calculate(item: &ItemRecord) -> reorder_core::Result<i64> {
        let gap = item
            .forecasted_demand
            .checked_sub(item.current_stock)
            .ok_or_else(|| ReorderError::Overflow {
                item_id: item.item_id.clone(),
                field: "shortage",
            })?;

        Ok(gap.max(0))
    }
}

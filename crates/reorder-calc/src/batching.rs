//! 固定批量取整

use reorder_core::item::fields;
use reorder_core::ReorderError;

/// 批量計算器
pub struct BatchSizingCalculator;

impl BatchSizingCalculator {
    /// 需要幾批才能覆蓋缺口（向上取整）
    ///
    /// 以整數運算求 ceil(shortage / batch_size)，不經過浮點數。
    /// 僅由 [`Self::units_to_order`] 在驗證 `shortage > 0` 且 `batch_size > 0` 後呼叫。
    fn batches_needed(shortage: i64, batch_size: i64) -> i64 {
        debug_assert!(shortage >= 0 && batch_size > 0);

        let batches = shortage / batch_size;
        if shortage % batch_size > 0 {
            batches + 1
        } else {
            batches
        }
    }

    /// 計算訂購數量：批數 × 批量
    pub fn units_to_order(
        item_id: &str,
        shortage: i64,
        batch_size: i64,
    ) -> reorder_core::Result<i64> {
        if batch_size <= 0 {
            return Err(ReorderError::NonPositiveBatchSize {
                item_id: item_id.to_string(),
                batch_size,
            });
        }
        if shortage <= 0 {
            return Ok(0);
        }

        Self::batches_needed(shortage, batch_size)
            .checked_mul(batch_size)
            .ok_or_else(|| ReorderError::Overflow {
                item_id: item_id.to_string(),
                field: fields::BATCH_SIZE,
            })
    }
}

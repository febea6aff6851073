//! # Reorder Calculation Engine
//!
//! 核心補貨計算引擎

pub mod batching;
pub mod calculator;
pub mod shortage;

// Re-export 主要類型
pub use batching::BatchSizingCalculator;
pub use calculator::ReorderCalculator;
pub use shortage::ShortageCalculator;

pub use reorder_core::RecordFailure;

use reorder_core::{ItemRecord, ReorderPlan};

/// 以預設配置（任一記錄無效即中止）計算補貨計劃
///
/// 回傳 `(物料ID, 訂購數量)` 列表，順序與輸入一致。
pub fn inventory_reordering(items: &[ItemRecord]) -> reorder_core::Result<Vec<(String, i64)>> {
    let plan = ReorderCalculator::default().calculate(items)?;
    Ok(plan.into_pairs())
}

/// 補貨計算結果（含被拒絕的記錄）
///
/// `rejected` 同時包含讀取階段與計算階段的拒絕，依原始輸入位置排序。
#[derive(Debug)]
pub struct PlanReport {
    /// 有效記錄產生的補貨計劃
    pub plan: ReorderPlan,

    /// 被拒絕的記錄
    pub rejected: Vec<RecordFailure>,

    /// 輸入記錄總數（含被拒絕的記錄）
    pub records_evaluated: usize,
}

impl PlanReport {
    /// 創建空的計算結果
    pub fn new(records_evaluated: usize) -> Self {
        Self {
            plan: ReorderPlan::empty(),
            rejected: Vec::new(),
            records_evaluated,
        }
    }

    /// 所有記錄皆有效的計算結果
    pub fn complete(plan: ReorderPlan, records_evaluated: usize) -> Self {
        Self {
            plan,
            rejected: Vec::new(),
            records_evaluated,
        }
    }

    /// 計劃是否涵蓋全部輸入記錄
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// 取出完整計劃；若有記錄被拒絕，回傳第一筆拒絕原因
    pub fn into_plan(self) -> reorder_core::Result<ReorderPlan> {
        match self.rejected.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.plan),
        }
    }
}
